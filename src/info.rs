use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, Local, Offset, TimeZone, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// Metadata written to the document information dictionary
#[derive(Default, Debug, Clone)]
pub struct Info {
    pub title: Option<String>,
    pub subject: Option<String>,
}

impl Info {
    /// Metadata describing a review generated from `source_name` with
    /// `articles` pages in it
    pub fn for_review(source_name: &str, articles: usize) -> Info {
        Info {
            title: Some(format!("Literature review: {source_name}")),
            subject: Some(format!("{articles} articles with abstracts")),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        info.creation_date(pdf_date(&Local::now()));
    }
}

/// Convert a timestamp into a PDF date, keeping its UTC offset
fn pdf_date<Tz: TimeZone>(when: &DateTime<Tz>) -> PDate {
    let (offset_hours, offset_minutes) = split_utc_offset(when.offset().fix().local_minus_utc());

    PDate::new(when.year() as u16)
        .month(when.month() as u8)
        .day(when.day() as u8)
        .hour(when.hour() as u8)
        .minute(when.minute() as u8)
        .second(when.second() as u8)
        .utc_offset_hour(offset_hours)
        .utc_offset_minute(offset_minutes)
}

/// Split an offset in seconds into signed hours and unsigned minutes, the way
/// PDF dates express it
fn split_utc_offset(seconds: i32) -> (i8, u8) {
    let hours = seconds / 3600;
    let minutes = ((seconds % 3600) / 60).abs();
    (hours as i8, minutes as u8)
}
