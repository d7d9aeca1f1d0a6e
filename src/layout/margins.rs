use crate::units::Pt;

/// Space kept clear around the text column. Nothing stops content from running past
/// them: text that overflows the bottom margin is still drawn, and the corner images
/// sit in the margin on purpose. A [`Page`](crate::Page) uses them for its `ArtBox`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Clockwise from the top, like CSS
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same margin on every side, e.g. the `TextFormat` margin
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }
}
