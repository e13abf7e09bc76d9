use crate::{
    afm::{self, HELVETICA_BOLD_WIDTHS, HELVETICA_WIDTHS},
    refs::{ObjectReferences, RefType},
    Pt,
};
use id_arena::Id;
use pdf_writer::{Name, Pdf};

/// Anything that can report how wide a run of text is, in thousandths of an em.
///
/// The layout engine only ever needs horizontal advances: it scales the
/// returned value by `size / 1000` to obtain a physical width in points.
pub trait WidthMetrics {
    /// Width of `text` in thousandths of an em
    fn string_width(&self, text: &str) -> f32;

    /// Width of `text` in points when set at `size`
    fn width_of(&self, text: &str, size: Pt) -> Pt {
        Pt(size.0 * self.string_width(text) / 1000.0)
    }
}

/// The three faces a review is typeset with. They are standard Type 1 fonts that
/// every PDF reader provides, so nothing is embedded in the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl Font {
    /// PostScript name of the font, as written to the `BaseFont` entry
    pub fn base_font(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    fn widths(&self) -> &'static [u16; 224] {
        match self {
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
            Font::Helvetica | Font::HelveticaOblique => &HELVETICA_WIDTHS,
        }
    }

    /// Width of a single character in thousandths of an em. Characters outside of
    /// WinAnsiEncoding are measured as the `?` they will be drawn as.
    pub fn char_width(&self, ch: char) -> u16 {
        let code = afm::win_ansi_code(ch).unwrap_or(afm::REPLACEMENT_CODE);
        afm::code_width(self.widths(), code)
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(id.index()));
        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.base_font().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

impl WidthMetrics for Font {
    fn string_width(&self, text: &str) -> f32 {
        text.chars().map(|ch| self.char_width(ch) as f32).sum()
    }
}
