use crate::font::WidthMetrics;
use crate::units::Pt;

/// One wrapped row of text, free of any line breaks
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// The text drawn on this row
    pub text: String,
    /// Position of the line within the field it was wrapped from
    pub index: usize,
    /// Length of the line in characters
    pub len: usize,
}

impl Line {
    fn new(text: &str, index: usize) -> Line {
        Line {
            text: text.to_string(),
            index,
            len: text.chars().count(),
        }
    }
}

/// Everything needed to wrap a single field of a record
pub struct WrapContext<'a, M: WidthMetrics + ?Sized> {
    /// The raw text, possibly containing hard line breaks
    pub text: &'a str,
    /// The widest a line may be, in points
    pub max_width: Pt,
    /// Metrics of the font the text will be set in
    pub font: &'a M,
    /// Font size the text will be set at
    pub size: Pt,
}

impl<'a, M: WidthMetrics + ?Sized> WrapContext<'a, M> {
    pub fn new(text: &'a str, max_width: Pt, font: &'a M, size: Pt) -> Self {
        WrapContext {
            text,
            max_width,
            font,
            size,
        }
    }

    /// Wrap the text into lines. See [wrap_text].
    pub fn wrap(&self) -> Vec<Line> {
        wrap_text(self.text, self.max_width, self.font, self.size)
    }
}

/// Greedily wraps text so that every line fits within `max_width` when set in
/// `font` at `size`.
///
/// Hard line breaks always end a line. Within each segment between hard breaks,
/// words are added to the current line until the next one would overflow, at
/// which point the line is broken at the last space that fit. A single word
/// that is wider than `max_width` on its own is placed alone on its line rather
/// than split. Empty segments produce no lines.
///
/// Line indices run across the whole text, not per segment.
pub fn wrap_text<M: WidthMetrics + ?Sized>(
    text: &str,
    max_width: Pt,
    font: &M,
    size: Pt,
) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();

    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    for segment in text.split('\n') {
        let mut current: &str = segment;
        // byte offset of the last space known to fit on the current line
        let mut last_space: Option<usize> = None;

        while !current.is_empty() {
            let search_from = last_space.map(|s| s + 1).unwrap_or(0);
            let candidate = current[search_from..]
                .find(' ')
                .map(|i| i + search_from)
                .unwrap_or(current.len());

            let width = font.width_of(&current[..candidate], size);
            if width > max_width {
                // nothing fit before this word: let it overflow on its own line
                let brk = last_space.unwrap_or(candidate);
                lines.push(Line::new(&current[..brk], lines.len()));
                current = current[brk..].trim();
                last_space = None;
            } else if candidate == current.len() {
                lines.push(Line::new(current, lines.len()));
                current = "";
            } else {
                last_space = Some(candidate);
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Font;
    use crate::layout::test_metrics::Monospace;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn breaks_at_the_last_space_that_fits() {
        // 5pt per character, "The quick brown" is 75pt, "... fox" would be 95pt
        let lines = wrap_text("The quick brown fox jumps", Pt(80.0), &Monospace, Pt(10.0));
        assert_eq!(texts(&lines), vec!["The quick brown", "fox jumps"]);
        assert_eq!(lines[0].index, 0);
        assert_eq!(lines[1].index, 1);
        assert_eq!(lines[0].len, 15);
    }

    #[test]
    fn context_wraps_like_the_free_function() {
        let ctx = WrapContext::new("The quick brown fox jumps", Pt(80.0), &Monospace, Pt(10.0));
        assert_eq!(ctx.wrap(), wrap_text(ctx.text, ctx.max_width, ctx.font, ctx.size));
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_text("", Pt(100.0), &Monospace, Pt(10.0)).is_empty());
    }

    #[test]
    fn unbroken_text_that_fits_is_one_line() {
        let lines = wrap_text("Reproducibility", Pt(100.0), &Monospace, Pt(10.0));
        assert_eq!(texts(&lines), vec!["Reproducibility"]);
    }

    #[test]
    fn overlong_words_get_their_own_line() {
        let lines = wrap_text(
            "a Pneumonoultramicroscopic b",
            Pt(50.0),
            &Monospace,
            Pt(10.0),
        );
        assert_eq!(texts(&lines), vec!["a", "Pneumonoultramicroscopic", "b"]);

        let lines = wrap_text("Pneumonoultramicroscopic", Pt(10.0), &Monospace, Pt(10.0));
        assert_eq!(texts(&lines), vec!["Pneumonoultramicroscopic"]);
    }

    #[test]
    fn hard_breaks_always_end_a_line() {
        let lines = wrap_text("one\ntwo three\r\nfour", Pt(500.0), &Monospace, Pt(10.0));
        assert_eq!(texts(&lines), vec!["one", "two three", "four"]);
        assert_eq!(lines[2].index, 2);
    }

    #[test]
    fn blank_segments_are_dropped() {
        let lines = wrap_text("first\n\nsecond\n", Pt(500.0), &Monospace, Pt(10.0));
        assert_eq!(texts(&lines), vec!["first", "second"]);
    }

    #[test]
    fn line_lengths_count_characters_not_bytes() {
        let lines = wrap_text("Élève façade", Pt(500.0), &Monospace, Pt(10.0));
        assert_eq!(lines[0].len, 12);
    }

    #[test]
    fn lines_fit_and_rejoin_to_the_input() {
        let text = lipsum::lipsum(300);
        let width = Pt(432.0);
        let size = Pt(11.0);
        let lines = wrap_text(&text, width, &Font::Helvetica, size);

        assert!(lines.len() > 1);
        for line in lines.iter() {
            let single_word = !line.text.contains(' ');
            assert!(single_word || Font::Helvetica.width_of(&line.text, size) <= width);
        }

        let rejoined: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(rejoined.join(" "), text);
    }
}
