use super::{
    split_paragraphs, wrap_lines, TextFormat, TextMeasure, DEFAULT_PARAGRAPH_DELIMITER,
    HIGHLIGHT_GAP,
};
use crate::colour::{colours, Colour};
use crate::image::Image;
use crate::pagesize::PageSize;
use crate::page::{HighlightLayout, ImageLayout, Page, SpanFont, SpanLayout};
use crate::{Cm, PDFError, Pt, Rect};
use id_arena::Id;
use log::debug;

/// Every paragraph starts with this many spaces
pub const INDENT: &str = "        ";

/// Fill opacity of the highlight rectangles behind each line
pub const HIGHLIGHT_OPACITY: f32 = 0.3;

/// Side of the square the image is drawn into, in each bottom corner of the page
pub const IMAGE_SIZE: Cm = Cm(5.0);

/// The two highlight / text colour pairs paragraphs alternate between
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum HighlightScheme {
    /// Yellow highlight behind blue text, used for the first paragraph
    #[default]
    YellowBlue,
    /// Green highlight behind red text
    GreenRed,
}

impl HighlightScheme {
    /// The scheme used by the paragraph after one using `self`
    pub fn next(self) -> HighlightScheme {
        match self {
            HighlightScheme::YellowBlue => HighlightScheme::GreenRed,
            HighlightScheme::GreenRed => HighlightScheme::YellowBlue,
        }
    }

    pub fn highlight(self) -> Colour {
        match self {
            HighlightScheme::YellowBlue => colours::YELLOW,
            HighlightScheme::GreenRed => colours::GREEN,
        }
    }

    pub fn text(self) -> Colour {
        match self {
            HighlightScheme::YellowBlue => colours::BLUE,
            HighlightScheme::GreenRed => colours::RED,
        }
    }
}

/// A single drawing operation produced by [layout_page]
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    /// A filled highlight rectangle
    FilledRect { rect: Rect, colour: Colour },
    /// A run of text whose baseline starts at `coords`
    TextRun {
        coords: (Pt, Pt),
        text: String,
        colour: Colour,
    },
}

/// Where a copy of the page's image is drawn
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ImagePlacement {
    pub position: Rect,
}

/// Everything [layout_page] decided about a page, in drawing order
#[derive(Clone, PartialEq, Debug)]
pub struct PageLayout {
    pub commands: Vec<DrawCommand>,
    pub images: [ImagePlacement; 2],
}

impl PageLayout {
    /// Add the laid out highlights, text and image placements to `page`. Highlights are drawn at
    /// [HIGHLIGHT_OPACITY]; text and images are opaque.
    pub fn apply(self, page: &mut Page, font: SpanFont, image: Id<Image>) {
        for command in self.commands {
            match command {
                DrawCommand::FilledRect { rect, colour } => page.add_highlight(HighlightLayout {
                    rect,
                    colour,
                    opacity: HIGHLIGHT_OPACITY,
                }),
                DrawCommand::TextRun {
                    coords,
                    text,
                    colour,
                } => page.add_span(SpanLayout {
                    text,
                    font,
                    colour,
                    coords,
                }),
            }
        }

        for placement in self.images {
            page.add_image(ImageLayout {
                image_id: image,
                position: placement.position,
            });
        }
    }
}

/// Where the next line goes and how it is coloured
#[derive(Copy, Clone, Debug)]
struct Cursor {
    x: Pt,
    y: Pt,
    scheme: HighlightScheme,
}

/// Measurements shared by every paragraph on the page
struct Metrics<'f, F> {
    font: &'f F,
    font_size: Pt,
    content_width: Pt,
    indent_width: Pt,
}

/// Lays out `text` on a page of `page_size`, one highlighted paragraph after another.
///
/// Paragraphs are separated by line breaks and start with an [INDENT]. Each one is wrapped to
/// the width between the margins, including the indent, and every line gets a highlight
/// rectangle behind it. The first line's rectangle starts after the indent. Lines are
/// `font_size` apart, with one blank line between paragraphs, and paragraphs alternate between
/// the two [HighlightScheme]s starting with [HighlightScheme::YellowBlue].
///
/// The indent's spaces are break opportunities like any other. When the first word of a
/// paragraph doesn't fit beside the indent, the first line holds only the spaces that do fit,
/// and its highlight is narrower than the indent, so it comes out with a negative width.
///
/// Text that doesn't fit vertically keeps going below the bottom margin; nothing is carried
/// over to another page. Two image placements of [IMAGE_SIZE] are always produced, in the
/// bottom-left and bottom-right corners of the page.
///
/// Fails without producing anything if the margins leave no room or any line can't be
/// measured.
pub fn layout_page<F: TextMeasure>(
    text: &str,
    format: &TextFormat<F>,
    page_size: PageSize,
) -> Result<PageLayout, PDFError> {
    let content_width = format.content_width(page_size)?;
    let margin: Pt = format.margin().into();
    let font_size = format.font_size();
    let metrics = Metrics {
        font: format.font(),
        font_size,
        content_width,
        indent_width: format.font().text_width(INDENT, font_size)?,
    };

    let start = Cursor {
        x: margin,
        y: page_size.1 - margin - font_size,
        scheme: HighlightScheme::default(),
    };

    let paragraphs = split_paragraphs(text, DEFAULT_PARAGRAPH_DELIMITER);
    debug!(
        "laying out {} paragraphs in {}pt wide column",
        paragraphs.len(),
        content_width
    );

    let mut commands: Vec<DrawCommand> = Vec::new();
    let end = paragraphs.iter().try_fold(start, |cursor, paragraph| {
        layout_paragraph(paragraph, cursor, &metrics, &mut commands)
    })?;
    debug!(
        "layout finished at y = {} with {} draw commands",
        end.y,
        commands.len()
    );

    let side: Pt = IMAGE_SIZE.into();
    let images = [
        ImagePlacement {
            position: Rect::from_origin(Pt(0.0), Pt(0.0), side, side),
        },
        ImagePlacement {
            position: Rect::from_origin(page_size.0 - side, Pt(0.0), side, side),
        },
    ];

    Ok(PageLayout { commands, images })
}

fn layout_paragraph<F: TextMeasure>(
    paragraph: &str,
    cursor: Cursor,
    metrics: &Metrics<'_, F>,
    commands: &mut Vec<DrawCommand>,
) -> Result<Cursor, PDFError> {
    let indented = format!("{INDENT}{paragraph}");
    let lines = wrap_lines(
        &indented,
        metrics.font,
        metrics.font_size,
        metrics.content_width,
    )?;

    let highlight_height = metrics.font_size - HIGHLIGHT_GAP;
    let mut y = cursor.y;
    for (i, line) in lines.into_iter().enumerate() {
        let line_width = metrics.font.text_width(&line, metrics.font_size)?;
        let rect = if i == 0 {
            Rect::from_origin(
                cursor.x + metrics.indent_width,
                y,
                line_width - metrics.indent_width,
                highlight_height,
            )
        } else {
            Rect::from_origin(cursor.x, y, line_width, highlight_height)
        };

        commands.push(DrawCommand::FilledRect {
            rect,
            colour: cursor.scheme.highlight(),
        });
        commands.push(DrawCommand::TextRun {
            coords: (cursor.x, y),
            text: line,
            colour: cursor.scheme.text(),
        });

        y -= metrics.font_size;
    }

    Ok(Cursor {
        x: cursor.x,
        y: y - metrics.font_size,
        scheme: cursor.scheme.next(),
    })
}
