use crate::{
    layout::TextMeasure,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::{BTreeMap, HashMap};

/// A parsed font object. Fonts can be TTF or OTF fonts, and will be embedded in their
/// entirety in the generated PDF, so large fonts may dramatically increase the size of
/// the generated PDF.
///
/// Fonts do double duty: they are the [TextMeasure] the layout engine wraps lines with,
/// and the resource that gets embedded so the laid out text renders with the same metrics.
pub struct Font {
    pub face: OwnedFace,
}

/// Advance width and height of a glyph, in font units
#[derive(Copy, Clone)]
struct GlyphSizing {
    advance: u16,
    height: i16,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn find_name(&self, name_id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.find_name(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.find_name(owned_ttf_parser::name_id::FAMILY)
    }

    /// Number of font units per em, used to scale advances into the 1000-unit glyph space
    pub fn units_per_em(&self) -> f32 {
        self.face().units_per_em() as f32
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.glyph_id('\u{FFFD}')
    }

    /// The glyph to render for `ch`, falling back to the replacement character, then `?`,
    /// then `.notdef`
    pub(crate) fn render_glyph_id(&self, ch: char) -> u16 {
        self.glyph_id(ch)
            .or_else(|| self.replacement_glyph_id())
            .or_else(|| self.glyph_id('?'))
            .unwrap_or(0)
    }

    /// Every unicode-mapped glyph in the font, keyed by glyph id
    fn glyph_chars(&self) -> BTreeMap<u16, char> {
        let mut map: BTreeMap<u16, char> = BTreeMap::new();

        let Some(cmap) = self.face().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                if let Ok(ch) = char::try_from(codepoint) {
                    if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0)
                    {
                        map.entry(index.0).or_insert(ch);
                    }
                }
            });
        }

        map
    }

    fn glyph_sizing(&self, glyphs: &BTreeMap<u16, char>) -> BTreeMap<u16, GlyphSizing> {
        let face = self.face();
        glyphs
            .keys()
            .filter_map(|&gid| {
                let advance = face.glyph_hor_advance(GlyphId(gid))?;
                let height = face
                    .glyph_bounding_box(GlyphId(gid))
                    .map(|bbox| bbox.y_max - bbox.y_min - face.descender())
                    .unwrap_or(1000);
                Some((gid, GlyphSizing { advance, height }))
            })
            .collect()
    }

    fn write_cid(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        sizing: &BTreeMap<u16, GlyphSizing>,
        writer: &mut Pdf,
    ) -> Ref {
        let font_descriptor_id = self.write_descriptor(refs, font_index, sizing, writer);

        let id = refs.gen(RefType::CidFont(font_index));
        let scaling = 1000.0 / self.units_per_em();

        // the most popular width becomes the default so the widths array stays short
        let mut widths_counts: HashMap<u16, usize> = HashMap::new();
        for glyph in sizing.values() {
            *widths_counts.entry(glyph.advance).or_insert(0) += 1;
        }
        let most_common_width = widths_counts
            .iter()
            .max_by_key(|&(&width, &count)| (count, width))
            .map(|(&width, _)| width as f32 * scaling)
            .unwrap_or(1000.0);

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(font_descriptor_id);
        cid_font.default_width(most_common_width);

        // group glyph ids into runs of consecutive ids
        let mut widths = cid_font.widths();
        let mut run: Option<(u16, Vec<f32>)> = None;
        for (&cid, glyph) in sizing.iter() {
            let width = glyph.advance as f32 * scaling;
            match run.as_mut() {
                Some((start, run_widths)) if *start as usize + run_widths.len() == cid as usize => {
                    run_widths.push(width);
                }
                _ => {
                    if let Some((start, run_widths)) = run.take() {
                        widths.consecutive(start, run_widths);
                    }
                    run = Some((cid, vec![width]));
                }
            }
        }
        if let Some((start, run_widths)) = run {
            widths.consecutive(start, run_widths);
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        cid_font.finish();

        id
    }

    fn write_font_data(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::FontData(font_index));

        writer
            .stream(id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        sizing: &BTreeMap<u16, GlyphSizing>,
        writer: &mut Pdf,
    ) -> Ref {
        let font_data_stream_id = self.write_font_data(refs, font_index, writer);
        let face = self.face();
        let scaling = 1000.0 / self.units_per_em();

        let max_width = sizing.values().map(|g| g.advance).max().unwrap_or_default() as f32;
        let max_height = sizing.values().map(|g| g.height).max().unwrap_or_default() as f32;
        let sum_width: f32 = sizing.values().map(|g| g.advance as f32).sum();
        let avg_width = if sizing.is_empty() {
            0.0
        } else {
            sum_width / sizing.len() as f32
        };

        let name = self.name().unwrap_or_else(|| format!("F{font_index}"));
        let family = self.family().unwrap_or_else(|| name.clone());

        let mut flags: FontFlags = FontFlags::empty();
        flags.set(FontFlags::NON_SYMBOLIC, true);
        if face.is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if face.is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(name.replace(' ', "").as_bytes()));
        descriptor.family(Str(family.as_bytes()));
        descriptor.weight(face.weight().to_number());
        descriptor.flags(flags);
        descriptor.bbox(pdf_writer::Rect {
            x1: 0.0,
            y1: 0.0,
            x2: max_width * scaling,
            y2: max_height * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        let cap_height = face.capital_height().map(|h| h as f32 * scaling);
        descriptor.cap_height(cap_height.unwrap_or(1000.0));
        descriptor.x_height(
            face.x_height()
                .map(|h| h as f32 * scaling)
                .or(cap_height)
                .unwrap_or_default(),
        );
        // TODO: derive the stem width from the OS/2 weight class instead of a fixed guess
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width * scaling);
        descriptor.max_width(max_width * scaling);
        descriptor.missing_width(max_width * scaling);
        descriptor.font_file2(font_data_stream_id);
        descriptor.finish();

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo\n\
             << /Registry (Adobe)\n\
             /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries and share a common high byte
        let mut blocks: Vec<Vec<(u16, char)>> = Vec::new();
        for (&gid, &ch) in glyphs.iter() {
            match blocks.last_mut() {
                Some(block) if block.len() < 100 && block[0].0 >> 8 == gid >> 8 => {
                    block.push((gid, ch))
                }
                _ => blocks.push(vec![(gid, ch)]),
            }
        }

        for block in blocks.into_iter() {
            map.push_str(&format!("{} beginbfchar\n", block.len()));
            for (gid, ch) in block.into_iter() {
                let mut utf16 = [0u16; 2];
                let units: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                map.push_str(&format!("<{gid:04x}> <{units}>\n"));
            }
            map.push_str("endbfchar\n");
        }

        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultLevel as u8,
        );
        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);

        id
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));

        let glyphs = self.glyph_chars();
        let sizing = self.glyph_sizing(&glyphs);
        let cid_font_id = self.write_cid(refs, font_index, &sizing, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, &glyphs, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{font_index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }
}

impl TextMeasure for Font {
    /// Sums the horizontal advances of each character's glyph, scaled to the 1000-unit PDF
    /// glyph space. A character the font can't map fails the measurement rather than being
    /// silently dropped, since the rendered width would no longer match.
    fn string_width(&self, text: &str) -> Result<f32, PDFError> {
        let face = self.face();
        let mut advance: u32 = 0;
        for ch in text.chars() {
            let gid = face.glyph_index(ch).ok_or(PDFError::MissingGlyph(ch))?;
            advance += face.glyph_hor_advance(gid).unwrap_or_default() as u32;
        }
        Ok(advance as f32 * 1000.0 / self.units_per_em())
    }
}
