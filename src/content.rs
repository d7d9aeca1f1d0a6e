//! Rendering of page contents into PDF content stream operators.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{HighlightLayout, PageContents, SpanFont, SpanLayout};
use id_arena::Arena;
use std::io::Write;

/// Renders page contents to a PDF content stream. `opacities` lists the graphics states
/// registered on the page, a highlight uses `/GS{n}` where `n` is the index of its opacity.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
    opacities: &[f32],
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Highlight(highlight) => {
                render_highlight(&mut content, highlight, opacities)?;
            }
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans, fonts)?;
            }
            PageContents::Image(image) => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    image.position.width(),
                    image.position.height(),
                    image.position.x1,
                    image.position.y1
                )?;
                write!(&mut content, "/I{} Do\n", image.image_id.index())?;
                write!(&mut content, "Q\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_highlight(
    content: &mut Vec<u8>,
    highlight: &HighlightLayout,
    opacities: &[f32],
) -> Result<(), std::io::Error> {
    let rect = &highlight.rect;
    write!(content, "q\n")?;
    if let Some(gs) = opacities
        .iter()
        .position(|o| o.to_bits() == highlight.opacity.to_bits())
    {
        write!(content, "/GS{gs} gs\n")?;
    }
    write_colour(content, highlight.colour)?;
    write!(
        content,
        "{} {} {} {} re\n",
        rect.x1,
        rect.y1,
        rect.width(),
        rect.height()
    )?;
    write!(content, "f\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size
    )?;
    write_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_colour(content, current_colour)?;
        }

        let font = &fonts[current_font.id];
        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for ch in span.text.chars() {
            write!(content, "{:04x}", font.render_glyph_id(ch))?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    let Colour { r, g, b } = colour;
    write!(content, "{r} {g} {b} rg\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::rect::Rect;
    use crate::units::Pt;
    use pretty_assertions::assert_eq;

    #[test]
    fn highlights_use_their_graphics_state() {
        let contents = vec![PageContents::Highlight(HighlightLayout {
            rect: Rect::from_origin(Pt(10.0), Pt(20.0), Pt(30.0), Pt(10.0)),
            colour: colours::YELLOW,
            opacity: 0.3,
        })];
        let rendered = render_contents(&contents, &Arena::new(), &[1.0, 0.3]).unwrap();
        assert_eq!(
            String::from_utf8(rendered).unwrap(),
            "q\n/GS1 gs\n1 1 0 rg\n10 20 30 10 re\nf\nQ\n"
        );
    }

    #[test]
    fn scheme_colours_are_device_rgb_fills() {
        let mut content = Vec::new();
        for colour in [colours::YELLOW, colours::BLUE, colours::GREEN, colours::RED] {
            write_colour(&mut content, colour).unwrap();
        }
        assert_eq!(
            String::from_utf8(content).unwrap(),
            "1 1 0 rg\n0 0 1 rg\n0 1 0 rg\n1 0 0 rg\n"
        );
    }

    #[test]
    fn nothing_to_render() {
        let rendered = render_contents(&[], &Arena::new(), &[]).unwrap();
        assert!(rendered.is_empty());
    }
}
