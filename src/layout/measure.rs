use crate::{PDFError, Pt};

/// The width-measurement capability text layout is built on.
///
/// Widths are reported in thousandths of an em (the PDF glyph space), so the rendered width
/// of a string at a given font size is `size * string_width / 1000`. [Font](crate::Font)
/// implements this from its glyph advances; anything else that can answer the question
/// (a fixed-pitch metric in tests, for example) can stand in for it.
pub trait TextMeasure {
    /// Width of `text` in 1/1000 em units. Fails if the text can't be represented.
    fn string_width(&self, text: &str) -> Result<f32, PDFError>;

    /// Rendered width of `text` at the given font size
    fn text_width(&self, text: &str, size: Pt) -> Result<Pt, PDFError> {
        Ok(size * self.string_width(text)? / 1000.0)
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn string_width(&self, text: &str) -> Result<f32, PDFError> {
        (**self).string_width(text)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Every character is `units` wide, except characters listed in `missing`, which fail
    pub(crate) struct Monospace {
        pub units: f32,
        pub missing: Vec<char>,
    }

    impl Monospace {
        pub(crate) fn new(units: f32) -> Monospace {
            Monospace {
                units,
                missing: Vec::new(),
            }
        }

        pub(crate) fn without(units: f32, missing: &[char]) -> Monospace {
            Monospace {
                units,
                missing: missing.to_vec(),
            }
        }
    }

    impl TextMeasure for Monospace {
        fn string_width(&self, text: &str) -> Result<f32, PDFError> {
            if let Some(ch) = text.chars().find(|ch| self.missing.contains(ch)) {
                return Err(PDFError::MissingGlyph(ch));
            }
            Ok(text.chars().count() as f32 * self.units)
        }
    }
}
