//! Turning one record into the ordered lines of its page.

use crate::config::ThresholdScope;
use crate::font::WidthMetrics;
use crate::layout::{Justifier, Line, RunningMax, WrapContext};
use crate::record::{is_blank, sanitize_keywords, BibliographicRecord};
use crate::units::Pt;

pub const AUTHORS_PREFIX: &str = "Author(s): ";
pub const PUBLISHER_PREFIX: &str = "Publisher: ";
pub const KEYWORDS_PREFIX: &str = "Keywords: ";

/// The typographic role of a line, which decides its font and size
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontRole {
    /// The article title
    Title,
    /// Authors, publisher and keywords
    Details,
    /// The abstract and comments
    Summary,
}

/// A line ready to be placed on the page
#[derive(Debug, Clone, PartialEq)]
pub enum LineInstruction {
    Text {
        text: String,
        role: FontRole,
        char_spacing: Pt,
    },
    /// An empty line
    Gap,
}

impl LineInstruction {
    pub fn text(&self) -> Option<&str> {
        match self {
            LineInstruction::Text { text, .. } => Some(text.as_str()),
            LineInstruction::Gap => None,
        }
    }

    pub fn role(&self) -> Option<FontRole> {
        match self {
            LineInstruction::Text { role, .. } => Some(*role),
            LineInstruction::Gap => None,
        }
    }
}

/// The metrics and size a role is measured with
pub struct RoleStyle<'a, M: WidthMetrics + ?Sized> {
    pub metrics: &'a M,
    pub size: Pt,
}

impl<'a, M: WidthMetrics + ?Sized> RoleStyle<'a, M> {
    pub fn new(metrics: &'a M, size: Pt) -> Self {
        RoleStyle { metrics, size }
    }
}

/// Formats records one after another, carrying the justification threshold
/// from record to record unless the scope says otherwise.
pub struct RecordFormatter<'a, M: WidthMetrics + ?Sized> {
    title: RoleStyle<'a, M>,
    details: RoleStyle<'a, M>,
    summary: RoleStyle<'a, M>,
    justifier: Justifier,
    running: RunningMax,
    scope: ThresholdScope,
}

impl<'a, M: WidthMetrics + ?Sized> RecordFormatter<'a, M> {
    /// Every line is wrapped to the justifier's column width
    pub fn new(
        title: RoleStyle<'a, M>,
        details: RoleStyle<'a, M>,
        summary: RoleStyle<'a, M>,
        justifier: Justifier,
        scope: ThresholdScope,
    ) -> Self {
        RecordFormatter {
            title,
            details,
            summary,
            justifier,
            running: RunningMax::new(),
            scope,
        }
    }

    /// The current justification threshold
    pub fn running_max(&self) -> RunningMax {
        self.running
    }

    /// Lay out the lines of a record's page, top to bottom. Records without an
    /// abstract, and excluded records, get no page and yield `None`.
    pub fn format(&mut self, record: &BibliographicRecord) -> Option<Vec<LineInstruction>> {
        if !record.is_renderable() {
            return None;
        }
        if self.scope == ThresholdScope::Record {
            self.running.reset();
        }

        let mut out = self.ragged(&record.title, FontRole::Title);

        let mut authors = self.ragged(&record.authors, FontRole::Details);
        if let Some(LineInstruction::Text { text, .. }) = authors.first_mut() {
            if !is_blank(text) {
                text.insert_str(0, AUTHORS_PREFIX);
            }
        }
        out.append(&mut authors);

        let publisher = record.publisher_line();
        if !publisher.is_empty() {
            out.extend(self.ragged(&format!("{PUBLISHER_PREFIX}{publisher}"), FontRole::Details));
        }

        if !is_blank(&record.keywords) {
            let keywords = sanitize_keywords(&record.keywords);
            log::debug!("keywords for `{}`: {keywords}", record.title);
            out.extend(self.ragged(&format!("{KEYWORDS_PREFIX}{keywords}"), FontRole::Details));
        }

        out.push(LineInstruction::Gap);
        out.extend(self.justified(&record.summary));

        if !is_blank(&record.comments) {
            out.extend(self.justified(&record.comments));
        }

        Some(out)
    }

    fn style(&self, role: FontRole) -> &RoleStyle<'a, M> {
        match role {
            FontRole::Title => &self.title,
            FontRole::Details => &self.details,
            FontRole::Summary => &self.summary,
        }
    }

    fn wrap(&self, text: &str, role: FontRole) -> Vec<Line> {
        let style = self.style(role);
        WrapContext::new(text, self.justifier.column_width, style.metrics, style.size).wrap()
    }

    fn ragged(&self, text: &str, role: FontRole) -> Vec<LineInstruction> {
        self.wrap(text, role)
            .into_iter()
            .map(|line| LineInstruction::Text {
                text: line.text,
                role,
                char_spacing: Pt(0.0),
            })
            .collect()
    }

    fn justified(&mut self, text: &str) -> Vec<LineInstruction> {
        let lines = self.wrap(text, FontRole::Summary);
        let decisions = self.justifier.decide(
            &lines,
            self.summary.metrics,
            self.summary.size,
            &mut self.running,
        );

        lines
            .into_iter()
            .zip(decisions)
            .map(|(line, decision)| LineInstruction::Text {
                text: line.text,
                role: FontRole::Summary,
                char_spacing: decision.spacing(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_metrics::Monospace;
    use crate::record::ExcludeFlag;

    fn formatter(width: f32, scope: ThresholdScope) -> RecordFormatter<'static, Monospace> {
        static METRICS: Monospace = Monospace;
        RecordFormatter::new(
            RoleStyle::new(&METRICS, Pt(10.0)),
            RoleStyle::new(&METRICS, Pt(10.0)),
            RoleStyle::new(&METRICS, Pt(10.0)),
            Justifier::new(Pt(width)),
            scope,
        )
    }

    fn article(summary: &str) -> BibliographicRecord {
        BibliographicRecord {
            authors: "Doe, J.".into(),
            title: "A Title".into(),
            summary: summary.into(),
            ..Default::default()
        }
    }

    fn text(text: &str, role: FontRole) -> LineInstruction {
        LineInstruction::Text {
            text: text.to_string(),
            role,
            char_spacing: Pt(0.0),
        }
    }

    fn spacing_of(lines: &[LineInstruction], wanted: &str) -> Pt {
        lines
            .iter()
            .find_map(|l| match l {
                LineInstruction::Text {
                    text, char_spacing, ..
                } if text == wanted => Some(*char_spacing),
                _ => None,
            })
            .expect("line is present")
    }

    #[test]
    fn fields_come_out_in_page_order() {
        let record = BibliographicRecord {
            publisher: "ACME".into(),
            publication: "J. Sys".into(),
            year: "2020".into(),
            keywords: "foo, BAR\t;baz".into(),
            comments: "Read twice".into(),
            ..article("An abstract.")
        };

        let lines = formatter(1000.0, ThresholdScope::Run)
            .format(&record)
            .expect("renders");
        assert_eq!(
            lines,
            vec![
                text("A Title", FontRole::Title),
                text("Author(s): Doe, J.", FontRole::Details),
                text("Publisher: ACME; J. Sys; 2020", FontRole::Details),
                text("Keywords: Foo; Bar; Baz", FontRole::Details),
                LineInstruction::Gap,
                text("An abstract.", FontRole::Summary),
                text("Read twice", FontRole::Summary),
            ]
        );
    }

    #[test]
    fn optional_lines_are_skipped_when_empty() {
        let record = BibliographicRecord {
            publisher: "ACME".into(),
            keywords: " \t ".into(),
            ..article("An abstract.")
        };
        let lines = formatter(1000.0, ThresholdScope::Run)
            .format(&record)
            .expect("renders");
        let texts: Vec<&str> = lines.iter().filter_map(LineInstruction::text).collect();
        assert_eq!(texts, vec!["A Title", "Author(s): Doe, J.", "An abstract."]);
    }

    #[test]
    fn only_the_first_author_line_is_prefixed() {
        let record = BibliographicRecord {
            authors: "Alpha, A.; Beta, B.; Gamma, G.".into(),
            ..article("An abstract.")
        };
        // 20 characters per line
        let lines = formatter(100.0, ThresholdScope::Run)
            .format(&record)
            .expect("renders");
        let authors: Vec<&str> = lines
            .iter()
            .filter(|l| l.role() == Some(FontRole::Details))
            .filter_map(LineInstruction::text)
            .collect();
        assert!(authors.len() > 1);
        assert!(authors[0].starts_with(AUTHORS_PREFIX));
        assert!(authors[1..].iter().all(|l| !l.starts_with(AUTHORS_PREFIX)));
    }

    #[test]
    fn unrenderable_records_produce_nothing() {
        let mut f = formatter(1000.0, ThresholdScope::Run);
        assert!(f.format(&article("  ")).is_none());

        let excluded = BibliographicRecord {
            exclude: ExcludeFlag::Excluded,
            ..article("An abstract.")
        };
        assert!(f.format(&excluded).is_none());
        assert_eq!(f.running_max().get(), 0);
    }

    #[test]
    fn abstract_is_justified_but_its_last_line_is_not() {
        // "cccccccccc" fits, adding the next word would not
        let lines = formatter(100.0, ThresholdScope::Run)
            .format(&article("cccccccccc dddddddddddd"))
            .expect("renders");
        let spacing = spacing_of(&lines, "cccccccccc");
        assert!((spacing.0 - 50.0 / 9.0).abs() < 1e-5);
        assert_eq!(spacing_of(&lines, "dddddddddddd"), Pt(0.0));
    }

    #[test]
    fn threshold_carries_across_records_by_default() {
        let mut f = formatter(100.0, ThresholdScope::Run);
        f.format(&article("aaaaaaaaaaaaaaaaaaa bbb")).expect("renders");
        assert_eq!(f.running_max().get(), 19);

        // 10 is not above 70% of 19
        let lines = f.format(&article("cccccccccc dddddddddddd")).expect("renders");
        assert_eq!(spacing_of(&lines, "cccccccccc"), Pt(0.0));
    }

    #[test]
    fn record_scope_starts_every_record_afresh() {
        let mut f = formatter(100.0, ThresholdScope::Record);
        f.format(&article("aaaaaaaaaaaaaaaaaaa bbb")).expect("renders");

        let lines = f.format(&article("cccccccccc dddddddddddd")).expect("renders");
        assert!(spacing_of(&lines, "cccccccccc") > Pt(0.0));
        assert_eq!(f.running_max().get(), 12);
    }

    #[test]
    fn comments_share_the_abstract_threshold() {
        let record = BibliographicRecord {
            comments: "cccccccccc dddddddddddd".into(),
            ..article("aaaaaaaaaaaaaaaaaaa bbb")
        };
        let lines = formatter(100.0, ThresholdScope::Record)
            .format(&record)
            .expect("renders");
        assert_eq!(spacing_of(&lines, "cccccccccc"), Pt(0.0));
        assert!(spacing_of(&lines, "aaaaaaaaaaaaaaaaaaa") > Pt(0.0));
    }
}
