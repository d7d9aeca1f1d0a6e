//! Length units used throughout the crate. Everything is stored and rendered in PDF points;
//! inches and centimetres exist so that callers can express sizes the way they think of them.

use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// Points per inch, the native PDF user space unit.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Centimetres per inch.
pub const CM_PER_INCH: f32 = 2.54;

/// A length in PDF points (1/72 of an inch)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    Deref,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Deref, Display, From, Into)]
pub struct In(pub f32);

/// A length in centimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Deref, Display, From, Into)]
pub struct Cm(pub f32);

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Pt {
        Pt(value.0 * POINTS_PER_INCH)
    }
}

impl From<Cm> for Pt {
    fn from(value: Cm) -> Pt {
        Pt((value.0 / CM_PER_INCH) * POINTS_PER_INCH)
    }
}

impl From<Cm> for In {
    fn from(value: Cm) -> In {
        In(value.0 / CM_PER_INCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centimetres_convert_through_inches() {
        let margin: Pt = Cm(2.54).into();
        assert!((*margin - 72.0).abs() < 1e-4);

        let side: Pt = Cm(5.0).into();
        assert!((*side - 141.732_28).abs() < 1e-3);
    }

    #[test]
    fn points_support_scalar_arithmetic() {
        let size = Pt(12.0);
        assert_eq!(size * 600.0 / 1000.0, Pt(7.2));
        assert_eq!(Pt(10.0) - Pt(2.5), Pt(7.5));
        assert_eq!([Pt(1.0), Pt(2.0)].into_iter().sum::<Pt>(), Pt(3.0));
    }
}
