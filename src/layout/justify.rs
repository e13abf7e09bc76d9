use crate::font::WidthMetrics;
use crate::layout::Line;
use crate::units::Pt;

/// Lines shorter than this fraction below the longest line seen so far are left
/// ragged
pub const DEFAULT_RAGGED_RATIO: f32 = 0.3;

/// The longest line, in characters, seen so far in a justified flow.
///
/// The threshold only ever grows. Each line is judged against the longest line
/// seen up to and including itself, so early lines may be held to a lower bar
/// than later ones.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RunningMax(usize);

impl RunningMax {
    pub fn new() -> RunningMax {
        RunningMax(0)
    }

    /// Fold a line length into the running maximum, returning the new maximum
    pub fn observe(&mut self, len: usize) -> usize {
        self.0 = self.0.max(len);
        self.0
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Whether (and by how much) a single line is stretched to the column width
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct JustificationDecision {
    pub justify: bool,
    /// Extra space between consecutive characters that would fill the column
    pub char_spacing: Pt,
}

impl JustificationDecision {
    /// The character spacing to actually draw the line with
    pub fn spacing(&self) -> Pt {
        if self.justify {
            self.char_spacing
        } else {
            Pt(0.0)
        }
    }
}

/// Decides, line by line, which lines of a paragraph get stretched to fill the
/// column by spreading extra space evenly between their characters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Justifier {
    pub column_width: Pt,
    pub ragged_ratio: f32,
}

impl Justifier {
    pub fn new(column_width: Pt) -> Justifier {
        Justifier {
            column_width,
            ragged_ratio: DEFAULT_RAGGED_RATIO,
        }
    }

    pub fn with_ragged_ratio(mut self, ratio: f32) -> Justifier {
        self.ragged_ratio = ratio;
        self
    }

    /// Character spacing that stretches `line` to exactly the column width, or
    /// zero if the line is already at least as wide as the column
    pub fn char_spacing<M: WidthMetrics + ?Sized>(&self, line: &Line, font: &M, size: Pt) -> Pt {
        if line.len <= 1 {
            return Pt(0.0);
        }

        let free = self.column_width - font.width_of(&line.text, size);
        if free > Pt(0.0) {
            free / (line.len - 1) as f32
        } else {
            Pt(0.0)
        }
    }

    /// Decide every line of a paragraph in reading order. `running` is updated
    /// with each line before that line is judged, and carries over to whatever
    /// paragraph is decided next.
    ///
    /// The last line of the paragraph is never justified, nor is any line that
    /// is a single character long.
    pub fn decide<M: WidthMetrics + ?Sized>(
        &self,
        lines: &[Line],
        font: &M,
        size: Pt,
        running: &mut RunningMax,
    ) -> Vec<JustificationDecision> {
        let last = lines.len().saturating_sub(1);
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let threshold = running.observe(line.len);
                let char_spacing = self.char_spacing(line, font, size);
                let long_enough = line.len as f32 > threshold as f32 * (1.0 - self.ragged_ratio);
                JustificationDecision {
                    justify: i < last && line.len > 1 && long_enough,
                    char_spacing,
                }
            })
            .collect()
    }
}
