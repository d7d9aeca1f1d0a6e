//! Renders plain text and an image into a PDF page of alternately highlighted paragraphs.
//!
//! Text is split into paragraphs, each paragraph is indented and greedily wrapped to the
//! width between the margins, and every line is drawn over a translucent highlight whose
//! colours alternate from one paragraph to the next. The image is drawn in both bottom
//! corners of the page. [HighlightPdf] does all of that in one go; the [layout] module
//! exposes the individual steps.

mod builder;
pub use builder::*;

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout text on pages
pub mod layout;
pub use layout::TextFormat;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;
