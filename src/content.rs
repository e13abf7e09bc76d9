//! Page content stream generation.

use crate::afm::encode_win_ansi;
use crate::page::{PageContents, SpanLayout};
use pdf_writer::{Content, Name, Str};

/// Renders page contents to a PDF content stream.
///
/// Every span becomes its own text object that sets the font, the character
/// spacing and the baseline origin before showing the WinAnsi-encoded text.
/// Character spacing is part of the text state and would otherwise leak from
/// one line to the next, so it is written for every span, including zero.
pub(crate) fn render_contents(contents: &[PageContents]) -> Vec<u8> {
    let mut content = Content::new();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans),
        }
    }

    content.finish()
}

fn render_text_spans(content: &mut Content, spans: &[SpanLayout]) {
    for span in spans.iter() {
        let font_name = format!("F{}", span.font.id.index());
        let text = encode_win_ansi(&span.text);

        content.begin_text();
        content.set_font(Name(font_name.as_bytes()), span.font.size.0);
        content.set_char_spacing(span.char_spacing.0);
        content.next_line(span.coords.0 .0, span.coords.1 .0);
        content.show(Str(&text));
        content.end_text();
    }
}
