/// Whether an article has been ruled out of the review
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ExcludeFlag {
    Excluded,
    #[default]
    NotExcluded,
}

impl ExcludeFlag {
    /// Decode the raw `ToExclude` column. Surrounding whitespace is ignored;
    /// blank and `no` mean not excluded, `yes` means excluded. Both words are
    /// matched exactly, so `YES` is handed back as the error like any other
    /// unrecognized value.
    pub fn decode(raw: &str) -> Result<ExcludeFlag, &str> {
        match raw.trim() {
            "" | "no" => Ok(ExcludeFlag::NotExcluded),
            "yes" => Ok(ExcludeFlag::Excluded),
            other => Err(other),
        }
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, ExcludeFlag::Excluded)
    }
}

/// The fields that identify an article. Two records with the same key are the
/// same article, whatever else differs between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub authors: String,
    pub title: String,
    pub publisher: String,
}

/// One article of the review, as read from a row of the source spreadsheet.
/// Optional columns that were absent or empty hold empty strings.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BibliographicRecord {
    pub authors: String,
    pub title: String,
    pub publication: String,
    pub volume: String,
    pub number: String,
    pub pages: String,
    pub year: String,
    pub publisher: String,
    /// The abstract
    pub summary: String,
    /// Keywords as typed, separated by any mix of `,` and `;`
    pub keywords: String,
    pub links: String,
    pub comments: String,
    pub exclude: ExcludeFlag,
}

/// True when the text is empty or only whitespace
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl BibliographicRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            authors: self.authors.clone(),
            title: self.title.clone(),
            publisher: self.publisher.clone(),
        }
    }

    pub fn has_summary(&self) -> bool {
        !is_blank(&self.summary)
    }

    pub fn has_links(&self) -> bool {
        !is_blank(&self.links)
    }

    /// Only articles with an abstract that have not been excluded get a page
    pub fn is_renderable(&self) -> bool {
        self.has_summary() && !self.exclude.is_excluded()
    }

    /// Publisher, publication and year joined with `"; "`, using the first
    /// combination that is fully present:
    ///
    /// 1. publisher, publication and year
    /// 2. publisher and year
    /// 3. publication and year
    /// 4. publisher and publication
    ///
    /// Returns an empty string when none of them are.
    pub fn publisher_line(&self) -> String {
        let publisher = (!is_blank(&self.publisher)).then_some(self.publisher.as_str());
        let publication = (!is_blank(&self.publication)).then_some(self.publication.as_str());
        let year = (!is_blank(&self.year)).then_some(self.year.as_str());

        let parts: Vec<&str> = match (publisher, publication, year) {
            (Some(p), Some(j), Some(y)) => vec![p, j, y],
            (Some(p), _, Some(y)) => vec![p, y],
            (_, Some(j), Some(y)) => vec![j, y],
            (Some(p), Some(j), _) => vec![p, j],
            _ => Vec::new(),
        };
        parts.join("; ")
    }
}

/// Normalize a free-form keyword list: commas become semicolons, tabs and
/// newlines are dropped, and every keyword is trimmed, lowercased and then
/// given a leading capital. Empty keywords are skipped.
pub fn sanitize_keywords(keywords: &str) -> String {
    keywords
        .replace(',', ";")
        .replace(['\t', '\n', '\r'], "")
        .split(';')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(capitalize)
        .collect::<Vec<String>>()
        .join("; ")
}

fn capitalize(keyword: &str) -> String {
    let lower = keyword.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
