use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::Font;
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A run of text in a single font and colour, with its baseline starting at `coords`
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// An image drawn scaled into `position`
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

/// A filled rectangle, painted with a constant fill `opacity` between 0.0 and 1.0
#[derive(Clone, PartialEq, Debug)]
pub struct HighlightLayout {
    pub rect: Rect,
    pub colour: Colour,
    pub opacity: f32,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Highlight(HighlightLayout),
    Text(Vec<SpanLayout>),
    Image(ImageLayout),
}

/// A single page. Contents are drawn in the order they were added, so later
/// contents paint over earlier ones.
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// Everything drawn on the page
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a new page of the given size. Without margins, the content box covers the whole
    /// page.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    /// Add a span of text to the page. Consecutive spans are rendered together.
    pub fn add_span(&mut self, span: SpanLayout) {
        if let Some(PageContents::Text(spans)) = self.contents.last_mut() {
            spans.push(span);
        } else {
            self.contents.push(PageContents::Text(vec![span]));
        }
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    pub fn add_highlight(&mut self, highlight: HighlightLayout) {
        self.contents.push(PageContents::Highlight(highlight));
    }

    /// The distinct highlight opacities on this page, in order of first use. Each one becomes
    /// an `/GS{n}` graphics state resource.
    pub(crate) fn opacities(&self) -> Vec<f32> {
        let mut opacities: Vec<f32> = Vec::new();
        for content in self.contents.iter() {
            if let PageContents::Highlight(highlight) = content {
                if !opacities
                    .iter()
                    .any(|o| o.to_bits() == highlight.opacity.to_bits())
                {
                    opacities.push(highlight.opacity);
                }
            }
        }
        opacities
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let opacities = self.opacities();
        for (i, opacity) in opacities.iter().enumerate() {
            let gs_id = refs.gen(RefType::GraphicsState(page_index, i));
            writer.ext_graphics(gs_id).non_stroking_alpha(*opacity);
        }

        let content_id = refs.gen(RefType::ContentForPage(page_index));
        let id = refs.get(RefType::Page(page_index))?;
        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(refs.get(RefType::PageTree)?);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            resource_fonts.pair(
                Name(format!("F{}", font_id.index()).as_bytes()),
                refs.get(RefType::Font(font_id.index()))?,
            );
        }
        resource_fonts.finish();

        let mut resource_xobjects = resources.x_objects();
        for (image_id, _) in images.iter() {
            resource_xobjects.pair(
                Name(format!("I{}", image_id.index()).as_bytes()),
                refs.get(RefType::Image(image_id.index()))?,
            );
        }
        resource_xobjects.finish();

        let mut resource_states = resources.ext_g_states();
        for i in 0..opacities.len() {
            resource_states.pair(
                Name(format!("GS{i}").as_bytes()),
                refs.get(RefType::GraphicsState(page_index, i))?,
            );
        }
        resource_states.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents, fonts, &opacities)?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            &rendered,
            miniz_oxide::deflate::CompressionLevel::DefaultLevel as u8,
        );
        writer
            .stream(content_id, compressed.as_slice())
            .filter(pdf_writer::Filter::FlateDecode);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::pagesize::LETTER;

    fn highlight(opacity: f32) -> HighlightLayout {
        HighlightLayout {
            rect: Rect::from_origin(Pt(0.0), Pt(0.0), Pt(10.0), Pt(10.0)),
            colour: colours::YELLOW,
            opacity,
        }
    }

    #[test]
    fn margins_shrink_the_content_box() {
        let page = Page::new(LETTER, Some(Margins::all(In(1.0))));
        assert_eq!(page.width(), Pt(612.0));
        assert_eq!(page.content_box.x1, Pt(72.0));
        assert_eq!(page.content_box.x2, Pt(540.0));
        assert_eq!(page.content_box.y2, Pt(720.0));

        let page = Page::new(LETTER, None);
        assert_eq!(page.content_box, page.media_box);
    }

    #[test]
    fn opacities_are_deduplicated_in_order() {
        let mut page = Page::new(LETTER, None);
        page.add_highlight(highlight(0.3));
        page.add_highlight(highlight(1.0));
        page.add_highlight(highlight(0.3));
        assert_eq!(page.opacities(), vec![0.3, 1.0]);
    }
}
