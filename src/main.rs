use clap::Parser;
use lit_review_pdf::pagesize::PageSizeName;
use lit_review_pdf::{generate, write_report, GeneratorConfig, ThresholdScope};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum PageSizeArg {
    Letter,
    A4,
    Legal,
}

impl From<PageSizeArg> for PageSizeName {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::Letter => PageSizeName::Letter,
            PageSizeArg::A4 => PageSizeName::A4,
            PageSizeArg::Legal => PageSizeName::Legal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ScopeArg {
    /// Keep one justification threshold for the whole file
    Run,
    /// Start every article with a fresh threshold
    Record,
}

impl From<ScopeArg> for ThresholdScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Run => ThresholdScope::Run,
            ScopeArg::Record => ThresholdScope::Record,
        }
    }
}

/// Typeset a literature review spreadsheet as a PDF, one page per article
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// `;`-delimited CSV export of the review
    source: PathBuf,

    /// Where to write the PDF
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = PageSizeArg::Letter)]
    page_size: PageSizeArg,

    #[arg(long, value_enum, default_value_t = ScopeArg::Run)]
    threshold_scope: ScopeArg,

    /// Lines shorter than this fraction below the longest line stay ragged,
    /// at least 0 and below 1
    #[arg(long, default_value_t = 0.3, value_parser = parse_ratio)]
    justify_ratio: f32,

    /// Fail on ToExclude values other than yes, no or blank
    #[arg(long)]
    strict_exclude: bool,
}

fn parse_ratio(value: &str) -> Result<f32, String> {
    let ratio: f32 = value.parse().map_err(|e| format!("`{value}` is not a number: {e}"))?;
    if (0.0..1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("`{value}` is outside 0.0..1.0"))
    }
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            page_size: self.page_size.into(),
            justify_ratio: self.justify_ratio,
            threshold_scope: self.threshold_scope.into(),
            strict_exclude: self.strict_exclude,
            ..GeneratorConfig::default()
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let summary = match generate(&args.source, &args.output, &args.config()) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_report(&mut io::stdout().lock(), &summary.classification) {
        eprintln!("error: failed to print report: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
