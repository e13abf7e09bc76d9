//! Measuring, wrapping and justifying text, and placing it on pages.
//!
//! Text goes through three steps before it is drawn:
//!
//! - [`wrap_text`](crate::layout::wrap_text) breaks a field into lines that fit a column,
//!   using a font's [`WidthMetrics`](crate::WidthMetrics)
//! - [`Justifier::decide`](crate::layout::Justifier::decide) picks the lines that get
//!   stretched to the column width and by how much
//! - [`layout_rows`](crate::layout::layout_rows) places the resulting rows on a page
//!
//! # Example
//!
//! ```
//! use lit_review_pdf::{Font, Pt};
//! use lit_review_pdf::layout::{wrap_text, Justifier, RunningMax};
//!
//! let text = "Greedy wrapping keeps adding words to a line until the next one would overflow.";
//! let lines = wrap_text(text, Pt(150.0), &Font::Helvetica, Pt(11.0));
//! assert!(lines.len() > 1);
//!
//! let mut running = RunningMax::new();
//! let decisions = Justifier::new(Pt(150.0)).decide(&lines, &Font::Helvetica, Pt(11.0), &mut running);
//! assert!(!decisions.last().unwrap().justify);
//! ```

mod justify;
mod margins;
mod text;
mod wrap;

pub use justify::*;
pub use margins::*;
pub use text::*;
pub use wrap::*;
