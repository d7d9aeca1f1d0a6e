/// Fill colour of a highlight or a run of text, written as a DeviceRGB operator in the
/// content stream
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Colour {
    /// Components in 0.0..=1.0
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour { r, g, b }
    }

    /// Components in 0..=255, as AWT and CSS write them
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        let unit = |c: u8| c as f32 / 255.0;
        Colour {
            r: unit(r),
            g: unit(g),
            b: unit(b),
        }
    }
}

/// The pure colours the highlight schemes are made of
pub mod colours {
    use super::Colour;

    pub const RED: Colour = Colour { r: 1.0, g: 0.0, b: 0.0 };
    pub const GREEN: Colour = Colour { r: 0.0, g: 1.0, b: 0.0 };
    pub const BLUE: Colour = Colour { r: 0.0, g: 0.0, b: 1.0 };
    /// Full red plus full green, not the paler "highlighter" yellow
    pub const YELLOW: Colour = Colour { r: 1.0, g: 1.0, b: 0.0 };
}
