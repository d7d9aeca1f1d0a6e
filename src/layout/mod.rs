//! Text layout: turning plain text into positioned, highlighted lines on a page.
//!
//! The pieces build on each other:
//!
//! - [`split_paragraphs`](crate::layout::split_paragraphs) breaks text into trimmed, non-empty paragraphs
//! - [`wrap_lines`](crate::layout::wrap_lines) greedily wraps one paragraph to a width using a [`TextMeasure`](crate::layout::TextMeasure)
//! - [`layout_page`](crate::layout::layout_page) indents, wraps, positions and colours every
//!   paragraph, producing [`DrawCommand`](crate::layout::DrawCommand)s and image placements
//!
//! None of these touch the PDF itself, so they can be driven by any width metric.
//!
//! # Example
//!
//! ```no_run
//! use highlight_pdf::layout::{layout_page, TextFormat};
//! use highlight_pdf::{pagesize, Cm, Font};
//!
//! let font = Font::load(std::fs::read("DejaVuSans.ttf")?)?;
//! let format = TextFormat::new(Cm(2.0), 12, font)?;
//! let layout = layout_page("Hello world\nSecond paragraph", &format, pagesize::LETTER)?;
//! assert_eq!(layout.images.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod format;
mod highlight;
mod margins;
pub(crate) mod measure;
mod paragraphs;
mod wrap;

pub use format::*;
pub use highlight::*;
pub use margins::*;
pub use measure::TextMeasure;
pub use paragraphs::*;
pub use wrap::*;
