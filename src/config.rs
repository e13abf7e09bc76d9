use crate::layout::{Margins, DEFAULT_RAGGED_RATIO};
use crate::pagesize::PageSizeName;
use crate::units::Pt;

/// How long the justification threshold lives before it starts over
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ThresholdScope {
    /// One threshold for the whole run. A record with very long lines raises
    /// the bar for every record after it.
    #[default]
    Run,
    /// Every record starts with a fresh threshold
    Record,
}

/// Everything that controls how a review is laid out and how strictly the
/// source is read
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub page_size: PageSizeName,
    pub margins: Margins,
    /// Distance from the top margin down to the first baseline
    pub top_offset: Pt,
    pub title_size: Pt,
    /// Size of the authors, publisher and keywords lines
    pub details_size: Pt,
    /// Size of the abstract and comments
    pub summary_size: Pt,
    /// Baseline to baseline distance, as a multiple of `summary_size`
    pub leading_factor: f32,
    /// Lines shorter than this fraction below the running maximum stay ragged
    pub justify_ratio: f32,
    pub threshold_scope: ThresholdScope,
    /// Fail on `ToExclude` values other than yes, no or blank
    pub strict_exclude: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            page_size: PageSizeName::Letter,
            margins: Margins::all(Pt(90.0)),
            top_offset: Pt(20.0),
            title_size: Pt(14.0),
            details_size: Pt(11.0),
            summary_size: Pt(11.0),
            leading_factor: 1.5,
            justify_ratio: DEFAULT_RAGGED_RATIO,
            threshold_scope: ThresholdScope::Run,
            strict_exclude: false,
        }
    }
}

impl GeneratorConfig {
    pub fn leading(&self) -> Pt {
        self.summary_size * self.leading_factor
    }
}
