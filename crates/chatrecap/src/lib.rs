//! # chatrecap
//!
//! **Tier 5 (Binary)**
//!
//! Resolves settings, loads the archive, runs the analysis passes, and
//! writes the report. The binary entry point only calls [`run`] and renders
//! failures with [`format_error`].

mod error_hints;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chatrecap_analysis::{AnalysisContext, Pass, analyze_with_observer};
use chatrecap_analysis_util::Clock;
use chatrecap_archive::load_archive;
use chatrecap_config::{Cli, Settings, TomlConfig, Verbosity};
use chatrecap_keywords::{KeywordBackends, KeywordEngine};
use chatrecap_lang::LanguageDetector;
use chatrecap_progress::Progress;
use chatrecap_report_types::Report;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Render an error chain plus any matching hints for the terminal.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to determine the working directory")?;
    let file = TomlConfig::discover(cli.config.as_deref(), &cwd)?;
    let settings = Settings::resolve(&cli, file.as_ref());
    init_logging(settings.verbosity);

    let ctx = AnalysisContext {
        clock: resolve_clock(settings.utc_offset.as_deref())?,
        keywords: KeywordEngine::new(KeywordBackends {
            tfidf: settings.backends.tfidf,
            tokenizer: settings.backends.tokenizer,
        }),
        language: LanguageDetector::new(settings.backends.langdetect),
    };
    tracing::debug!(?ctx, "analysis context ready");

    tracing::info!(path = %settings.input.display(), "reading archive");
    let archive = load_archive(&settings.input)?;
    tracing::info!(conversations = archive.len(), "archive loaded");

    let progress = Progress::new(settings.progress);
    let report_progress = |pass: Pass| {
        progress.set_message(format!("[{}/{}] {}", pass.step(), Pass::ALL.len(), pass.label()));
    };
    let report = analyze_with_observer(&archive, &ctx, &report_progress)?;
    progress.finish_and_clear();

    let json = render_report(&report, settings.pretty)?;
    if settings.to_stdout {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}").context("failed to write report to stdout")?;
    } else {
        write_report(&settings.output, &json)?;
        tracing::info!(path = %settings.output.display(), "report written");
    }

    if settings.verbosity != Verbosity::Quiet {
        eprintln!("{}", summary_lines(&report));
    }
    Ok(())
}

fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
    // A second initialisation (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// `None` and `UTC` mean UTC; `local` asks the host and falls back to UTC.
pub fn resolve_clock(offset: Option<&str>) -> Result<Clock> {
    match offset.map(str::trim) {
        None => Ok(Clock::utc()),
        Some(raw) if raw.eq_ignore_ascii_case("local") => match Clock::host_local() {
            Ok(clock) => Ok(clock),
            Err(err) => {
                tracing::warn!(error = %err, "falling back to UTC");
                Ok(Clock::utc())
            }
        },
        Some(raw) => {
            let offset = Clock::parse_offset(raw)?;
            Ok(Clock::with_offset(offset))
        }
    }
}

/// Serialize with two-space indentation (or compactly); non-ASCII stays verbatim.
pub fn render_report(report: &Report, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.context("failed to serialize report")
}

fn write_report(path: &Path, json: &str) -> Result<()> {
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))
}

/// Short human-readable recap printed after a successful run.
pub fn summary_lines(report: &Report) -> String {
    let stats = &report.summary_stats;
    [
        "Summary:".to_string(),
        format!("  conversations:        {}", stats.total_conversations),
        format!("  user messages:        {}", stats.total_messages),
        format!("  user characters:      {}", stats.total_user_characters),
        format!("  assistant characters: {}", stats.total_assistant_characters),
        format!("  input/output ratio:   {}", report.directors_ratio.ratio_display),
    ]
    .join("\n")
}
