use crate::record::{BibliographicRecord, RecordKey};
use indexmap::IndexMap;

/// Records keyed by identity, in the order they were first seen
pub type RecordSet = IndexMap<RecordKey, BibliographicRecord>;

/// Sorts records into the follow-up lists of a review.
///
/// A record seen again under the same key replaces the earlier one without
/// moving it.
#[derive(Debug, Default, Clone)]
pub struct Classification {
    /// Records with a blank abstract
    pub missing_summary: RecordSet,
    /// Records with no link to the full text
    pub missing_links: RecordSet,
    /// Records flagged for exclusion
    pub excluded: RecordSet,
}

impl Classification {
    pub fn new() -> Classification {
        Classification::default()
    }

    /// Classify a single record. Every record is observed, whether or not it
    /// gets a page.
    pub fn observe(&mut self, record: &BibliographicRecord) {
        if !record.has_summary() {
            self.missing_summary.insert(record.key(), record.clone());
        }
        if !record.has_links() {
            self.missing_links.insert(record.key(), record.clone());
        }
        if record.exclude.is_excluded() {
            self.excluded.insert(record.key(), record.clone());
        }
    }

    /// Records that have no abstract but are still worth reading: not excluded,
    /// and with a link to the full text
    pub fn to_read_without_summary(&self) -> impl Iterator<Item = &BibliographicRecord> {
        self.missing_summary.iter().filter_map(move |(key, record)| {
            let wanted = !self.excluded.contains_key(key) && !self.missing_links.contains_key(key);
            wanted.then_some(record)
        })
    }
}

impl<'a> Extend<&'a BibliographicRecord> for Classification {
    fn extend<I: IntoIterator<Item = &'a BibliographicRecord>>(&mut self, iter: I) {
        for record in iter {
            self.observe(record);
        }
    }
}
