//! Command implementations for `tms`.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, bail};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use tms_export::{CsvStyle, write_csv};
use tms_ingest::{decode_text, parse_csv, parse_sheet};
use tms_model::ValidationConfig;
use tms_pipeline::{FileKind, ingest_files};

use crate::cli::{CheckArgs, ConvertArgs, CsvStyleArg};
use crate::types::{CheckOutcome, FileReport};

/// Run the full read-parse-validate pipeline over the given files.
pub async fn run_check(args: &CheckArgs) -> anyhow::Result<CheckOutcome> {
    let config = load_schema(&args.schema)?;
    let progress = batch_progress(args.files.len(), args.json);

    let results = ingest_files(&args.files, &config).await;

    if let Some(progress) = progress {
        progress.finish_and_clear();
    }
    let files = args
        .files
        .iter()
        .cloned()
        .zip(results)
        .map(|(path, result)| FileReport { path, result })
        .collect();
    Ok(CheckOutcome { files })
}

/// Parse a file and re-serialize it as normalized CSV.
pub async fn run_convert(args: &ConvertArgs) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(&args.input)
        .await
        .with_context(|| format!("could not read {}", args.input.display()))?;
    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let Some(kind) = FileKind::from_name(&file_name) else {
        bail!("unsupported file format: {file_name} (expected .csv, .xlsx or .xls)");
    };

    let rows = match kind {
        FileKind::Csv => parse_csv(&decode_text(&bytes)),
        FileKind::Sheet => parse_sheet(&bytes)
            .with_context(|| format!("could not parse {}", args.input.display()))?,
    };
    let Some((headers, data)) = rows.split_first() else {
        bail!("{} is empty", args.input.display());
    };

    let style = match args.style {
        CsvStyleArg::Quoted => CsvStyle::Quoted,
        CsvStyleArg::Minimal => CsvStyle::Minimal,
    };
    let csv = write_csv(headers, data, style)?;
    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &csv)
                .await
                .with_context(|| format!("could not write {}", path.display()))?;
            info!(
                rows = data.len(),
                output = %path.display(),
                "wrote normalized csv"
            );
        }
        None => std::io::stdout()
            .write_all(&csv)
            .context("could not write to stdout")?,
    }
    Ok(())
}

/// Load a `ValidationConfig` from a JSON schema file.
fn load_schema(path: &std::path::Path) -> anyhow::Result<ValidationConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read schema {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid schema {}", path.display()))
}

/// A spinner for multi-file batches; suppressed for single files and
/// machine-readable output.
fn batch_progress(file_count: usize, json: bool) -> Option<ProgressBar> {
    if json || file_count < 2 {
        return None;
    }
    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        progress.set_style(style);
    }
    progress.set_message(format!("checking {file_count} files"));
    progress.enable_steady_tick(Duration::from_millis(100));
    Some(progress)
}
