use crate::{
    layout::{layout_page, Margins, TextFormat},
    pagesize::{PageSize, LETTER},
    Document, Font, Image, Info, PDFError, Page, SpanFont,
};
use log::{debug, info};
use std::io::Read;

/// Builds a single-page document of highlighted paragraphs with an image in both bottom
/// corners.
///
/// ```no_run
/// use highlight_pdf::{Cm, Font, HighlightPdf, TextFormat};
/// use std::fs::File;
///
/// let font = Font::load(std::fs::read("DejaVuSans.ttf")?)?;
/// let pdf = HighlightPdf::new()
///     .text_format(TextFormat::new(Cm(2.0), 12, font)?)
///     .sources(File::open("text.txt")?, File::open("picture.png")?)
///     .render()?;
/// std::fs::write("highlighted.pdf", pdf)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct HighlightPdf {
    format: Option<TextFormat<Font>>,
    text: Option<Box<dyn Read>>,
    image: Option<Box<dyn Read>>,
    page_size: PageSize,
    info: Option<Info>,
}

impl Default for HighlightPdf {
    fn default() -> Self {
        HighlightPdf {
            format: None,
            text: None,
            image: None,
            page_size: LETTER,
            info: None,
        }
    }
}

impl HighlightPdf {
    pub fn new() -> HighlightPdf {
        HighlightPdf::default()
    }

    /// Set the margin, font size and font the text is laid out with
    pub fn text_format(mut self, format: TextFormat<Font>) -> Self {
        self.format = Some(format);
        self
    }

    /// Set where the UTF-8 text and the encoded image are read from. Neither is read until
    /// [HighlightPdf::build].
    pub fn sources<T, I>(mut self, text: T, image: I) -> Self
    where
        T: Read + 'static,
        I: Read + 'static,
    {
        self.text = Some(Box::new(text));
        self.image = Some(Box::new(image));
        self
    }

    /// Set the page size, [LETTER] by default
    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the document's metadata
    pub fn info(mut self, info: Info) -> Self {
        self.info = Some(info);
        self
    }

    /// Read the sources, lay the text out and assemble the document.
    ///
    /// The text is read first, then the image is read and decoded, and only then is anything
    /// laid out, so a bad image never leaves a half-built page behind. The margins are checked
    /// against the page size before either source is touched.
    pub fn build(self) -> Result<Document, PDFError> {
        let HighlightPdf {
            format,
            text,
            image,
            page_size,
            info,
        } = self;

        let format = format
            .ok_or_else(|| PDFError::Configuration("no text format was set".to_string()))?;
        let (Some(text), Some(image)) = (text, image) else {
            return Err(PDFError::Configuration(
                "text and image sources are required".to_string(),
            ));
        };
        format.content_width(page_size)?;

        let text = read_text(text)?;
        let image = Image::from_reader(image)?;
        debug!("read {} bytes of text", text.len());

        let layout = layout_page(&text, &format, page_size)?;

        let mut doc = Document::default();
        if let Some(info) = info {
            doc.set_info(info);
        }

        let font_size = format.font_size();
        let mut page = Page::new(page_size, Some(Margins::all(format.margin())));
        let font_id = doc.add_font(format.into_font());
        let image_id = doc.add_image(image);
        layout.apply(
            &mut page,
            SpanFont {
                id: font_id,
                size: font_size,
            },
            image_id,
        );
        info!("laid out page with {} contents", page.contents.len());
        doc.add_page(page);

        Ok(doc)
    }

    /// Build the document and write it out as PDF bytes
    pub fn render(self) -> Result<Vec<u8>, PDFError> {
        let doc = self.build()?;
        let mut bytes = Vec::new();
        doc.write(&mut bytes)?;
        Ok(bytes)
    }
}

fn read_text(mut reader: impl Read) -> Result<String, PDFError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| PDFError::InputRead {
            what: "text",
            source,
        })?;
    Ok(String::from_utf8(bytes)?)
}
