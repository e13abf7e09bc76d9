//! End to end runs of the generator against CSV files on disk.

use lit_review_pdf::{generate, write_report, GeneratorConfig, ReviewError, ThresholdScope};
use std::fs;
use tempfile::tempdir;

const SOURCE: &str = "\
Authors;Title;Publication;Volume;Number;Pages;Year;Publisher;Abstract;Keywords;Links;Comments;ToExclude
Doe, J.;Greedy Wrapping;J. Sys;4;2;10-20;2020;ACME;\"Greedy wrapping adds words to a line until the next one would overflow the column, then starts a new line.\nA second paragraph follows a hard break.\";wrapping, TYPESETTING;https://example.org/1;Core reference;no
Roe, R.;No Abstract Yet;;;;;2021;ACME;;;https://example.org/2;Ask the authors;
Poe, E.;Not Relevant;;;;;;;Something unrelated.;;;;yes
Moe, M.;Unreachable;Proc. Conf;;;;2019;;;;;;
";

#[test]
fn writes_one_page_per_article_with_an_abstract() {
    let dir = tempdir().expect("temp dir");
    let source = dir.path().join("review.csv");
    let output = dir.path().join("review.pdf");
    fs::write(&source, SOURCE).expect("write source");

    let summary = generate(&source, &output, &GeneratorConfig::default()).expect("generates");
    assert_eq!(summary.records, 4);
    assert_eq!(summary.pages, 1);

    let pdf = fs::read(&output).expect("output exists");
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(String::from_utf8_lossy(&pdf).contains("/Count 1"));

    let c = &summary.classification;
    let titles = |set: &lit_review_pdf::RecordSet| -> Vec<String> {
        set.values().map(|r| r.title.clone()).collect()
    };
    assert_eq!(titles(&c.missing_summary), vec!["No Abstract Yet", "Unreachable"]);
    assert_eq!(titles(&c.missing_links), vec!["Not Relevant", "Unreachable"]);
    assert_eq!(titles(&c.excluded), vec!["Not Relevant"]);

    let to_read: Vec<&str> = c.to_read_without_summary().map(|r| r.title.as_str()).collect();
    assert_eq!(to_read, vec!["No Abstract Yet"]);
}

#[test]
fn report_lists_follow_ups() {
    let dir = tempdir().expect("temp dir");
    let source = dir.path().join("review.csv");
    fs::write(&source, SOURCE).expect("write source");

    let config = GeneratorConfig {
        threshold_scope: ThresholdScope::Record,
        ..GeneratorConfig::default()
    };
    let summary = generate(&source, dir.path().join("out.pdf"), &config).expect("generates");

    let mut out = Vec::new();
    write_report(&mut out, &summary.classification).expect("report");
    let report = String::from_utf8(out).expect("utf-8");

    assert!(report.starts_with("# 1 Articles without abstract but to read #\nTitle: No Abstract Yet\n"));
    assert!(report.contains("Publisher: ACME; 2021\nComments: Ask the authors\n\n"));
    assert!(report.contains("# 2 Articles to read without full access #\n"));
    assert!(report.contains("Title: Unreachable\nAuthor(s): Moe, M.\nPublisher: Proc. Conf; 2019\n\n"));
    assert!(report.contains("# 1 Articles to exclude from the list #\nTitle: Not Relevant\n"));
}

#[test]
fn missing_required_field_leaves_no_output() {
    let dir = tempdir().expect("temp dir");
    let source = dir.path().join("review.csv");
    let output = dir.path().join("review.pdf");
    fs::write(
        &source,
        "Authors;Title;Abstract\nDoe;Fine;Text\nRoe;;Text\n",
    )
    .expect("write source");

    let err = generate(&source, &output, &GeneratorConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ReviewError::MissingRequiredField {
            line: 3,
            column: "Title"
        }
    ));
    assert!(!output.exists());
}

#[test]
fn strict_mode_rejects_unknown_exclude_flags() {
    let dir = tempdir().expect("temp dir");
    let source = dir.path().join("review.csv");
    let output = dir.path().join("review.pdf");
    fs::write(&source, "Authors;Title;Abstract;ToExclude\nDoe;T;Text;perhaps\n").expect("write source");

    let lenient = generate(&source, &output, &GeneratorConfig::default()).expect("lenient run");
    assert_eq!(lenient.pages, 1);
    fs::remove_file(&output).expect("clean up");

    let strict = GeneratorConfig {
        strict_exclude: true,
        ..GeneratorConfig::default()
    };
    let err = generate(&source, &output, &strict).unwrap_err();
    assert!(matches!(err, ReviewError::UnrecognizedExcludeFlag { line: 2, .. }));
    assert!(!output.exists());
}

#[test]
fn capitalized_exclude_flag_is_not_an_exclusion() {
    let dir = tempdir().expect("temp dir");
    let source = dir.path().join("review.csv");
    let output = dir.path().join("review.pdf");
    fs::write(&source, "Authors;Title;Abstract;ToExclude\nDoe;T;Text;YES\n").expect("write source");

    let lenient = generate(&source, &output, &GeneratorConfig::default()).expect("lenient run");
    assert_eq!(lenient.pages, 1);
    assert!(lenient.classification.excluded.is_empty());
    fs::remove_file(&output).expect("clean up");

    let strict = GeneratorConfig {
        strict_exclude: true,
        ..GeneratorConfig::default()
    };
    let err = generate(&source, &output, &strict).unwrap_err();
    assert!(matches!(
        err,
        ReviewError::UnrecognizedExcludeFlag { line: 2, ref value } if value == "YES"
    ));
    assert!(!output.exists());
}

#[test]
fn missing_source_is_reported() {
    let dir = tempdir().expect("temp dir");
    let err = generate(
        dir.path().join("absent.csv"),
        dir.path().join("out.pdf"),
        &GeneratorConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReviewError::ResourceNotFound(_)));
}
