//! Parse command: weighted length and validity of one text.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use tweet_weight_core::config::Config;
use tweet_weight_core::{ParsedResult, Preset, WeightingConfig, parse_tweet};

use super::read_text_input;

/// Arguments for the `parse` subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Text to parse (reads stdin when neither TEXT nor --file is given).
    pub text: Option<String>,

    /// Read the text from a file.
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Weighting preset (overrides configuration).
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,
}

/// Parse a text and report its weighted length.
#[instrument(name = "cmd_parse", skip_all, fields(file = ?args.file, preset = ?args.preset))]
pub fn cmd_parse(
    args: ParseArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing parse command");

    let weighting = config
        .resolve_weighting(args.preset)
        .context("failed to resolve weighting configuration")?;
    let text = read_text_input(args.text, args.file.as_ref(), max_input_bytes)?;

    let result = parse_tweet(&text, &weighting);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.valid {
        println!(
            "{} weighted length {}/{} ({}‰)",
            "PASS:".green(),
            result.weighted_length,
            weighting.max_weighted_tweet_length,
            result.permillage,
        );
        print_ranges(&result);
    } else {
        print_ranges(&result);
        bail!("{}", invalid_reason(&result, &weighting));
    }

    Ok(())
}

fn print_ranges(result: &ParsedResult) {
    println!(
        "{}: {}..={}",
        "Valid range".dimmed(),
        result.valid_range_start,
        result.valid_range_end
    );
    println!(
        "{}: {}..={}",
        "Display range".dimmed(),
        result.display_range_start,
        result.display_range_end
    );
}

/// Explain why a result is invalid.
pub(crate) fn invalid_reason(result: &ParsedResult, weighting: &WeightingConfig) -> String {
    let max = u64::from(weighting.max_weighted_tweet_length);
    if result.weighted_length == 0 {
        "text is empty".to_string()
    } else if result.weighted_length > max {
        format!(
            "text is too long: weighted length {} (max: {max})",
            result.weighted_length.red()
        )
    } else {
        format!(
            "text contains a disallowed character after UTF-16 offset {}",
            result.valid_range_end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_for_empty_text() {
        let weighting = WeightingConfig::v3();
        let result = parse_tweet("", &weighting);
        assert_eq!(invalid_reason(&result, &weighting), "text is empty");
    }

    #[test]
    fn reason_for_long_text() {
        owo_colors::set_override(false);
        let weighting = WeightingConfig::v3();
        let result = parse_tweet(&"a".repeat(300), &weighting);
        assert!(invalid_reason(&result, &weighting).contains("too long"));
    }

    #[test]
    fn reason_for_disallowed_character() {
        let weighting = WeightingConfig::v3();
        let result = parse_tweet("ab\u{FEFF}", &weighting);
        assert!(invalid_reason(&result, &weighting).contains("disallowed character"));
    }

    #[test]
    fn cmd_parse_json_succeeds_for_invalid_text() {
        let args = ParseArgs {
            text: Some(String::new()),
            file: None,
            preset: None,
        };
        assert!(cmd_parse(args, true, &Config::default(), None).is_ok());
    }

    #[test]
    fn cmd_parse_text_fails_for_invalid_text() {
        let args = ParseArgs {
            text: Some("a".repeat(281)),
            file: None,
            preset: Some(Preset::V3),
        };
        assert!(cmd_parse(args, false, &Config::default(), None).is_err());
    }
}
