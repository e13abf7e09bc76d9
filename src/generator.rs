//! Producing a review PDF from a CSV export, start to finish.

use crate::classify::Classification;
use crate::config::GeneratorConfig;
use crate::document::Document;
use crate::font::Font;
use crate::format::{FontRole, LineInstruction, RecordFormatter, RoleStyle};
use crate::info::Info;
use crate::layout::{baseline_start, layout_rows, Justifier, TextRow};
use crate::page::{Page, SpanFont};
use crate::pagesize;
use crate::record::BibliographicRecord;
use crate::source::read_records;
use crate::Result;
use std::fs;
use std::path::Path;

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Number of records read from the source
    pub records: usize,
    /// Number of pages written, one per rendered record
    pub pages: usize,
    pub classification: Classification,
}

/// Read every record from `source`, write one page per article that has an
/// abstract and is not excluded to `output`, and classify all of them.
///
/// Nothing is written unless every record was read and laid out.
pub fn generate<S: AsRef<Path>, O: AsRef<Path>>(
    source: S,
    output: O,
    config: &GeneratorConfig,
) -> Result<GenerationSummary> {
    let source = source.as_ref();
    let output = output.as_ref();

    let records = read_records(source, config.strict_exclude)?;
    log::info!("read {} record(s) from {}", records.len(), source.display());

    let source_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());

    let (pdf, summary) = render(&records, &source_name, config)?;
    fs::write(output, pdf)?;

    log::info!("wrote {} page(s) to {}", summary.pages, output.display());
    Ok(summary)
}

/// Lay out and serialize `records` entirely in memory
pub fn render(
    records: &[BibliographicRecord],
    source_name: &str,
    config: &GeneratorConfig,
) -> Result<(Vec<u8>, GenerationSummary)> {
    let title_font = Font::HelveticaBold;
    let details_font = Font::HelveticaOblique;
    let summary_font = Font::Helvetica;

    let mut doc = Document::default();
    let title_span = SpanFont {
        id: doc.add_font(title_font),
        size: config.title_size,
    };
    let details_span = SpanFont {
        id: doc.add_font(details_font),
        size: config.details_size,
    };
    let summary_span = SpanFont {
        id: doc.add_font(summary_font),
        size: config.summary_size,
    };
    let span_for = |role: FontRole| match role {
        FontRole::Title => title_span,
        FontRole::Details => details_span,
        FontRole::Summary => summary_span,
    };

    let page_size = pagesize::size_of(config.page_size);
    let column_width = Page::new(page_size, Some(config.margins.clone()))
        .content_box
        .width();
    let justifier = Justifier::new(column_width).with_ragged_ratio(config.justify_ratio);

    let mut formatter = RecordFormatter::new(
        RoleStyle::new(&title_font, config.title_size),
        RoleStyle::new(&details_font, config.details_size),
        RoleStyle::new(&summary_font, config.summary_size),
        justifier,
        config.threshold_scope,
    );
    let mut classification = Classification::new();

    for record in records.iter() {
        classification.observe(record);

        let Some(lines) = formatter.format(record) else {
            log::debug!("no page for `{}`", record.title);
            continue;
        };
        log::debug!(
            "page {} for `{}`: {} line(s), running max {}",
            doc.page_count() + 1,
            record.title,
            lines.len(),
            formatter.running_max().get()
        );

        let rows: Vec<TextRow> = lines
            .into_iter()
            .map(|line| match line {
                LineInstruction::Text {
                    text,
                    role,
                    char_spacing,
                } => TextRow::Text {
                    text,
                    font: span_for(role),
                    char_spacing,
                },
                LineInstruction::Gap => TextRow::Gap,
            })
            .collect();

        let mut page = Page::new(page_size, Some(config.margins.clone()));
        let start = baseline_start(&page, config.top_offset);
        layout_rows(&mut page, start, rows, config.leading());
        doc.add_page(page);
    }

    let pages = doc.page_count();
    doc.set_info(Info::for_review(source_name, pages));

    let mut pdf: Vec<u8> = Vec::new();
    doc.write(&mut pdf)?;

    Ok((
        pdf,
        GenerationSummary {
            records: records.len(),
            pages,
            classification,
        },
    ))
}
