//! Pre-defined page sizes for the paper formats a review can be printed on.
//!
//! All sizes are (width, height) in portrait orientation.
//!
//! # Example
//!
//! ```
//! use lit_review_pdf::pagesize::{self, PageSizeName};
//!
//! let size = pagesize::size_of(PageSizeName::A4);
//! assert!(size.0 < size.1);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));

/// Named page sizes selectable from the command line
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum PageSizeName {
    #[default]
    Letter,
    Legal,
    A4,
}

/// Look up the dimensions of a named page size
pub fn size_of(name: PageSizeName) -> PageSize {
    match name {
        PageSizeName::Letter => LETTER,
        PageSizeName::Legal => LEGAL,
        PageSizeName::A4 => A4,
    }
}
