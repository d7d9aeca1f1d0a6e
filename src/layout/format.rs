use super::TextMeasure;
use crate::pagesize::PageSize;
use crate::{Cm, PDFError, Pt};
use std::num::NonZeroU16;

/// Highlights are this much shorter than a line, leaving a gap between consecutive lines
pub const HIGHLIGHT_GAP: Pt = Pt(2.0);

/// Smallest font size whose highlights still have a height
pub const MIN_FONT_SIZE: u16 = 3;

/// How text is set on the page: the margin around all four edges, the font size, and the font
/// that both measures and renders the text.
///
/// A format is checked when it is created and never changes afterwards, so the layout engine
/// can assume a positive margin and font size.
pub struct TextFormat<F> {
    margin: Cm,
    font_size: NonZeroU16,
    font: F,
}

impl<F: TextMeasure> TextFormat<F> {
    /// Create a new text format. `margin` must be a positive, finite length and `font_size`
    /// (in points) at least [MIN_FONT_SIZE].
    pub fn new(margin: Cm, font_size: u16, font: F) -> Result<TextFormat<F>, PDFError> {
        if !margin.is_finite() || *margin <= 0.0 {
            return Err(PDFError::Configuration(format!(
                "margin must be a positive length, got {margin}cm"
            )));
        }
        let font_size = NonZeroU16::new(font_size)
            .filter(|size| size.get() >= MIN_FONT_SIZE)
            .ok_or_else(|| {
                PDFError::Configuration(format!(
                    "font size must be at least {MIN_FONT_SIZE}pt, got {font_size}pt"
                ))
            })?;

        Ok(TextFormat {
            margin,
            font_size,
            font,
        })
    }

    pub fn margin(&self) -> Cm {
        self.margin
    }

    /// The font size, which is also the line height
    pub fn font_size(&self) -> Pt {
        Pt(self.font_size.get() as f32)
    }

    pub fn font(&self) -> &F {
        &self.font
    }

    /// Give up the format, keeping the font (to embed it once layout is done)
    pub fn into_font(self) -> F {
        self.font
    }

    /// Width left between the left and right margins on a page of the given size. Fails if the
    /// margins leave no room at all.
    pub fn content_width(&self, page_size: PageSize) -> Result<Pt, PDFError> {
        let margin: Pt = self.margin.into();
        let width = page_size.0 - margin * 2.0;
        if width > Pt(0.0) {
            Ok(width)
        } else {
            Err(PDFError::Configuration(format!(
                "a {}cm margin leaves no room on a page {}pt wide",
                self.margin, page_size.0
            )))
        }
    }
}
