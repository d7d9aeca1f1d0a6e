use highlight_pdf::layout::{layout_page, DrawCommand, TextMeasure, HIGHLIGHT_OPACITY};
use highlight_pdf::{colours, pagesize, Cm, Font, HighlightPdf, PDFError, PageContents, TextFormat};
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use std::io::Cursor;
use std::path::PathBuf;

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A TrueType font to test with: `HIGHLIGHT_PDF_TEST_FONT` if set, otherwise a common system font
fn test_font() -> Option<Font> {
    let path = std::env::var_os("HIGHLIGHT_PDF_TEST_FONT")
        .map(PathBuf::from)
        .or_else(|| {
            FONT_CANDIDATES
                .iter()
                .map(PathBuf::from)
                .find(|path| path.is_file())
        })?;
    let bytes = std::fs::read(path).ok()?;
    Font::load(bytes).ok()
}

fn encode(image: DynamicImage, format: ImageOutputFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .expect("can encode test image");
    bytes
}

fn png() -> Vec<u8> {
    encode(
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([0, 128, 255, 200]))),
        ImageOutputFormat::Png,
    )
}

fn jpeg() -> Vec<u8> {
    encode(
        DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([200, 20, 20]))),
        ImageOutputFormat::Jpeg(90),
    )
}

macro_rules! font_or_skip {
    ($name:literal) => {
        match test_font() {
            Some(font) => font,
            None => {
                eprintln!(
                    "Skipping {}: no TrueType font found. Set HIGHLIGHT_PDF_TEST_FONT to a .ttf file.",
                    $name
                );
                return;
            }
        }
    };
}

#[test]
fn renders_a_complete_pdf() {
    let font = font_or_skip!("renders_a_complete_pdf");
    let format = TextFormat::new(Cm(2.0), 12, font).unwrap();

    let bytes = HighlightPdf::new()
        .text_format(format)
        .sources(
            Cursor::new(b"Hello world\nSecond paragraph".to_vec()),
            Cursor::new(png()),
        )
        .render()
        .expect("document renders");

    assert!(bytes.starts_with(b"%PDF-"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.trim_end().ends_with("%%EOF"));
    assert!(text.contains("/Identity-H"));
    assert!(text.contains("/SMask"));
    assert!(text.contains("/FontDescriptor"));
    assert!(text.contains("/ItalicAngle "));
}

#[test]
fn page_holds_highlights_text_and_two_images() {
    let font = font_or_skip!("page_holds_highlights_text_and_two_images");
    let format = TextFormat::new(Cm(2.0), 12, font).unwrap();

    let doc = HighlightPdf::new()
        .text_format(format)
        .sources(
            Cursor::new(b"Hello world\n\n  Second paragraph  \n".to_vec()),
            Cursor::new(jpeg()),
        )
        .build()
        .expect("document builds");

    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.fonts.len(), 1);
    assert_eq!(doc.images.len(), 1);

    let page = doc.pages.iter().next().map(|(_, page)| page).unwrap();
    let highlights: Vec<_> = page
        .contents
        .iter()
        .filter_map(|content| match content {
            PageContents::Highlight(highlight) => Some(highlight),
            _ => None,
        })
        .collect();
    assert_eq!(highlights.len(), 2);
    assert!(highlights.iter().all(|h| h.opacity == HIGHLIGHT_OPACITY));
    assert_eq!(highlights[0].colour, colours::YELLOW);
    assert_eq!(highlights[1].colour, colours::GREEN);

    let spans: Vec<_> = page
        .contents
        .iter()
        .filter_map(|content| match content {
            PageContents::Text(spans) => Some(spans),
            _ => None,
        })
        .flatten()
        .collect();
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].text, "        Hello world");
    assert_eq!(spans[0].colour, colours::BLUE);
    assert_eq!(spans[1].text, "        Second paragraph");
    assert_eq!(spans[1].colour, colours::RED);

    let images: Vec<_> = page
        .contents
        .iter()
        .filter_map(|content| match content {
            PageContents::Image(image) => Some(image),
            _ => None,
        })
        .collect();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].image_id, images[1].image_id);
    let side = 5.0 / 2.54 * 72.0;
    assert!((*images[1].position.x1 - (612.0 - side)).abs() < 1e-3);

    let mut out = Vec::new();
    doc.write(&mut out).expect("document writes");
    assert!(String::from_utf8_lossy(&out).contains("/DCTDecode"));
}

#[test]
fn real_font_lines_fit_the_column() {
    let font = font_or_skip!("real_font_lines_fit_the_column");
    let format = TextFormat::new(Cm(6.0), 14, font).unwrap();
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(12);

    let layout = layout_page(&text, &format, pagesize::A4).unwrap();
    let content_width = format.content_width(pagesize::A4).unwrap();

    let lines: Vec<&str> = layout
        .commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::TextRun { text, .. } => Some(text.as_str()),
            DrawCommand::FilledRect { .. } => None,
        })
        .collect();
    assert!(lines.len() > 1);
    for line in lines.iter() {
        let width = format.font().text_width(line, format.font_size()).unwrap();
        assert!(width <= content_width, "{line:?} overflows");
    }
    assert_eq!(lines.join(" ").trim(), text.trim());
}

#[test]
fn unmapped_characters_fail_the_whole_build() {
    let font = font_or_skip!("unmapped_characters_fail_the_whole_build");
    let format = TextFormat::new(Cm(2.0), 12, font).unwrap();

    let result = HighlightPdf::new()
        .text_format(format)
        .sources(
            Cursor::new("fine\nnot \u{10FFFD} fine".as_bytes().to_vec()),
            Cursor::new(png()),
        )
        .build();

    assert!(matches!(result, Err(PDFError::MissingGlyph('\u{10FFFD}'))));
}

#[test]
fn undecodable_images_fail_before_layout() {
    let font = font_or_skip!("undecodable_images_fail_before_layout");
    let format = TextFormat::new(Cm(2.0), 12, font).unwrap();

    let result = HighlightPdf::new()
        .text_format(format)
        .sources(
            Cursor::new(b"some text".to_vec()),
            Cursor::new(b"GIF? no, just bytes".to_vec()),
        )
        .build();

    assert!(matches!(result, Err(PDFError::Image(_))));
}

#[test]
fn oversized_margins_are_rejected() {
    let font = font_or_skip!("oversized_margins_are_rejected");
    let format = TextFormat::new(Cm(11.0), 12, font).unwrap();

    let result = HighlightPdf::new()
        .text_format(format)
        .sources(Cursor::new(b"text".to_vec()), Cursor::new(png()))
        .build();

    assert!(matches!(result, Err(PDFError::Configuration(_))));
}
