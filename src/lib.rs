//! Turns a literature review kept as a `;`-delimited spreadsheet into a PDF
//! with one page per article, and sorts the articles into follow-up lists.

mod afm;
pub use afm::{encode_win_ansi, win_ansi_code, REPLACEMENT_CODE};

mod classify;
pub use classify::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod format;
pub use format::*;

mod generator;
pub use generator::*;

mod info;
pub use info::*;

/// Utility functions and structures to lay text out on pages
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod record;
pub use record::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod report;
pub use report::*;

mod source;
pub use source::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
