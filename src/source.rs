//! Reading bibliographic records from a `;`-delimited CSV export.

use crate::record::{is_blank, BibliographicRecord, ExcludeFlag};
use crate::{Result, ReviewError};
use csv::StringRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const AUTHORS_COLUMN: &str = "Authors";
pub const TITLE_COLUMN: &str = "Title";

/// Every column a row is read from, spelled the way [RawRow] expects them
const COLUMNS: [&str; 13] = [
    AUTHORS_COLUMN,
    TITLE_COLUMN,
    "Publication",
    "Volume",
    "Number",
    "Pages",
    "Year",
    "Publisher",
    "Abstract",
    "Keywords",
    "Links",
    "Comments",
    "ToExclude",
];

/// A row exactly as it appears in the file. Every column is optional here;
/// the required ones are checked when the row is turned into a record.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Authors", default)]
    authors: Option<String>,
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "Publication", default)]
    publication: Option<String>,
    #[serde(rename = "Volume", default)]
    volume: Option<String>,
    #[serde(rename = "Number", default)]
    number: Option<String>,
    #[serde(rename = "Pages", default)]
    pages: Option<String>,
    #[serde(rename = "Year", default)]
    year: Option<String>,
    #[serde(rename = "Publisher", default)]
    publisher: Option<String>,
    #[serde(rename = "Abstract", default)]
    summary: Option<String>,
    #[serde(rename = "Keywords", default)]
    keywords: Option<String>,
    #[serde(rename = "Links", default)]
    links: Option<String>,
    #[serde(rename = "Comments", default)]
    comments: Option<String>,
    #[serde(rename = "ToExclude", default)]
    to_exclude: Option<String>,
}

/// Read every record from the CSV file at `path`.
///
/// All rows are parsed before anything is returned, so a bad row anywhere in
/// the file means no records at all. With `strict_exclude` an unrecognized
/// `ToExclude` value is an error; otherwise it is logged and treated as not
/// excluded.
pub fn read_records<P: AsRef<Path>>(path: P, strict_exclude: bool) -> Result<Vec<BibliographicRecord>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ReviewError::ResourceNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    parse_records(file, strict_exclude)
}

/// Parse records from any CSV source, see [read_records]
pub fn parse_records<R: Read>(source: R, strict_exclude: bool) -> Result<Vec<BibliographicRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = canonical_headers(reader.headers()?);
    for column in [AUTHORS_COLUMN, TITLE_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(ReviewError::MissingRequiredField { line: 1, column });
        }
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawRow = row.deserialize(Some(&headers))?;
        records.push(into_record(raw, line, strict_exclude)?);
    }

    log::debug!("read {} record(s)", records.len());
    Ok(records)
}

/// Column names are matched without regard to case. Known columns are
/// respelled in their canonical form, anything else is kept as is.
fn canonical_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|header| {
            let canonical: Option<&str> = COLUMNS
                .iter()
                .find(|column| column.eq_ignore_ascii_case(header))
                .copied();
            canonical.unwrap_or(header)
        })
        .collect()
}

fn required(value: Option<String>, line: u64, column: &'static str) -> Result<String> {
    match value {
        Some(value) if !is_blank(&value) => Ok(value),
        _ => Err(ReviewError::MissingRequiredField { line, column }),
    }
}

fn decode_exclude(raw: Option<String>, line: u64, strict: bool) -> Result<ExcludeFlag> {
    let raw = raw.unwrap_or_default();
    match ExcludeFlag::decode(&raw) {
        Ok(flag) => Ok(flag),
        Err(value) if strict => Err(ReviewError::UnrecognizedExcludeFlag {
            line,
            value: value.to_string(),
        }),
        Err(value) => {
            log::warn!("line {line}: unrecognized ToExclude value `{value}`, treating as not excluded");
            Ok(ExcludeFlag::NotExcluded)
        }
    }
}

fn into_record(raw: RawRow, line: u64, strict_exclude: bool) -> Result<BibliographicRecord> {
    Ok(BibliographicRecord {
        authors: required(raw.authors, line, AUTHORS_COLUMN)?,
        title: required(raw.title, line, TITLE_COLUMN)?,
        publication: raw.publication.unwrap_or_default(),
        volume: raw.volume.unwrap_or_default(),
        number: raw.number.unwrap_or_default(),
        pages: raw.pages.unwrap_or_default(),
        year: raw.year.unwrap_or_default(),
        publisher: raw.publisher.unwrap_or_default(),
        summary: raw.summary.unwrap_or_default(),
        keywords: raw.keywords.unwrap_or_default(),
        links: raw.links.unwrap_or_default(),
        comments: raw.comments.unwrap_or_default(),
        exclude: decode_exclude(raw.to_exclude, line, strict_exclude)?,
    })
}
