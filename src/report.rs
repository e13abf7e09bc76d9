//! The plain-text follow-up report printed after a run.

use crate::classify::Classification;
use crate::record::{is_blank, BibliographicRecord};
use std::io::{self, Write};

/// Write the three follow-up lists: articles without an abstract that can
/// still be read, articles without a link to the full text, and excluded
/// articles.
pub fn write_report<W: Write>(w: &mut W, classification: &Classification) -> io::Result<()> {
    let to_read: Vec<&BibliographicRecord> = classification.to_read_without_summary().collect();
    write_block(w, "Articles without abstract but to read", &to_read)?;

    let no_access: Vec<&BibliographicRecord> = classification.missing_links.values().collect();
    write_block(w, "Articles to read without full access", &no_access)?;

    let excluded: Vec<&BibliographicRecord> = classification.excluded.values().collect();
    write_block(w, "Articles to exclude from the list", &excluded)?;

    w.flush()
}

fn write_block<W: Write>(w: &mut W, label: &str, records: &[&BibliographicRecord]) -> io::Result<()> {
    writeln!(w, "# {} {label} #", records.len())?;
    for record in records {
        write_record(w, record)?;
    }
    Ok(())
}

fn write_record<W: Write>(w: &mut W, record: &BibliographicRecord) -> io::Result<()> {
    writeln!(w, "Title: {}", record.title)?;
    writeln!(w, "Author(s): {}", record.authors)?;

    let publisher = record.publisher_line();
    if !publisher.is_empty() {
        writeln!(w, "Publisher: {publisher}")?;
    }
    if !is_blank(&record.comments) {
        writeln!(w, "Comments: {}", record.comments)?;
    }
    writeln!(w)
}
