//! Batch command: parse every line of a file.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use tweet_weight_core::config::Config;
use tweet_weight_core::{ParsedResult, Preset, parse_tweet};

use super::parse::invalid_reason;
use super::read_input_file;

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File with one text per line.
    pub file: Utf8PathBuf,

    /// Weighting preset (overrides configuration).
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Parse blank lines too (they are always invalid).
    #[arg(long)]
    pub include_blank: bool,
}

/// One parsed line, as emitted in JSON Lines mode.
#[derive(Serialize)]
struct LineResult {
    line: usize,
    #[serde(flatten)]
    result: ParsedResult,
}

/// Parse each line of a file independently.
#[instrument(name = "cmd_batch", skip_all, fields(file = %args.file))]
pub fn cmd_batch(
    args: BatchArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, preset = ?args.preset, "executing batch command");

    let weighting = config
        .resolve_weighting(args.preset)
        .context("failed to resolve weighting configuration")?;
    let content = read_input_file(&args.file, max_input_bytes)?;

    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| args.include_blank || !line.trim().is_empty())
        .collect();

    let progress = if global_json || quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(lines.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} texts")
                .context("invalid progress template")?,
        );
        bar
    };

    let mut invalid = Vec::new();
    for &(line, text) in &lines {
        let result = parse_tweet(text, &weighting);
        if global_json {
            println!("{}", serde_json::to_string(&LineResult { line, result })?);
        } else if !result.valid {
            invalid.push((line, result));
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if global_json {
        return Ok(());
    }

    for (line, result) in &invalid {
        println!(
            "{} line {line}: {}",
            "FAIL:".red(),
            invalid_reason(result, &weighting)
        );
    }

    let total = lines.len();
    if invalid.is_empty() {
        println!("{} {total} texts valid", "PASS:".green());
        Ok(())
    } else {
        bail!("{} of {total} texts in {} are invalid", invalid.len(), args.file);
    }
}
