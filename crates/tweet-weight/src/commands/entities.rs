//! Entities command: list the URLs and emoji the scanner sees.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use tweet_weight_core::{Span, extract_emojis_with_indices, extract_urls_with_indices, normalize};

use super::read_text_input;

/// Arguments for the `entities` subcommand.
#[derive(Args, Debug)]
pub struct EntitiesArgs {
    /// Text to inspect (reads stdin when neither TEXT nor --file is given).
    pub text: Option<String>,

    /// Read the text from a file.
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct EntityReport {
    urls: Vec<Span>,
    emojis: Vec<Span>,
}

/// Print URL and emoji spans with their code-point indices.
///
/// Indices refer to the NFC form of the text, which is what the scanner
/// walks.
#[instrument(name = "cmd_entities", skip_all, fields(file = ?args.file))]
pub fn cmd_entities(
    args: EntitiesArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing entities command");

    let text = normalize(&read_text_input(args.text, args.file.as_ref(), max_input_bytes)?);
    let report = EntityReport {
        urls: extract_urls_with_indices(&text),
        emojis: extract_emojis_with_indices(&text),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.urls.is_empty() && report.emojis.is_empty() {
        println!("{}", "no entities".dimmed());
    }
    for span in &report.urls {
        println!("{} {}..{} {}", "url".cyan(), span.start, span.end, span.text);
    }
    for span in &report.emojis {
        println!("{} {}..{} {}", "emoji".yellow(), span.start, span.end, span.text);
    }

    Ok(())
}
