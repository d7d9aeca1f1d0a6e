use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred while writing the document
    Io(#[from] std::io::Error),

    #[error("failed to read the input {what}")]
    /// One of the input streams could not be read to the end
    InputRead {
        what: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("input text is not valid UTF-8")]
    /// The input text stream did not contain UTF-8
    InvalidText(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode the image
    Image(#[from] image::ImageError),

    #[error("font has no glyph for {0:?}")]
    /// Measuring a string failed because the font can't represent one of its characters
    MissingGlyph(char),

    #[error("invalid configuration: {0}")]
    /// The layout configuration can't produce a sensible page
    Configuration(String),

    #[error("no object reference was generated for {0}")]
    /// A PDF object was referenced before it was written
    MissingReference(String),

    #[error("document references a page that does not exist")]
    PageMissing,
}
