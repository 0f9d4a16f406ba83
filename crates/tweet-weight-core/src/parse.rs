//! Tweet parsing: weighted length, validity, and valid range.
//!
//! [`parse_tweet`] normalizes the text to NFC, finds URLs and emoji, scans
//! the text once to sum weights, and reports ranges in UTF-16 code units of
//! the caller's original string.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::emoji::extract_emojis_with_indices;
use crate::offsets::to_external_ranges;
use crate::scan::scan;
use crate::span::SpanIndex;
use crate::urls::extract_urls_with_indices;
use crate::weighting::WeightingConfig;

/// Result of parsing a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResult {
    /// Within budget, non-empty, and free of disallowed characters.
    pub valid: bool,
    /// Descaled weighted length.
    pub weighted_length: u64,
    /// Weighted length in thousandths of the maximum.
    pub permillage: u64,
    /// Start of the valid prefix (always 0).
    pub valid_range_start: usize,
    /// Inclusive UTF-16 end of the valid prefix.
    pub valid_range_end: usize,
    /// Start of the displayed text (always 0).
    pub display_range_start: usize,
    /// Inclusive UTF-16 end of the displayed text.
    pub display_range_end: usize,
}

/// Parse `text` under `config`.
///
/// `config` is expected to satisfy [`WeightingConfig::validate`]; a zero
/// `scale` or maximum length is a programmer error and panics.
///
/// ```
/// use tweet_weight_core::{WeightingConfig, parse_tweet};
///
/// let result = parse_tweet("english text 日本語 😷 https://example.com", &WeightingConfig::v3());
/// assert!(result.valid);
/// assert_eq!(result.weighted_length, 46);
/// assert_eq!(result.permillage, 164);
/// assert_eq!(result.valid_range_end, 38);
/// assert_eq!(result.display_range_end, 38);
/// ```
#[tracing::instrument(skip(text, config), fields(text_len = text.len(), version = config.version))]
pub fn parse_tweet(text: &str, config: &WeightingConfig) -> ParsedResult {
    let normalized = normalize(text);

    let urls = SpanIndex::new(extract_urls_with_indices(&normalized));
    let emojis = SpanIndex::new(extract_emojis_with_indices(&normalized));

    let outcome = scan(&normalized, &urls, &emojis, config);
    let weighted_length = outcome.weighted_length / u64::from(config.scale);
    let ranges = to_external_ranges(text, &normalized, outcome.valid_boundary_index);

    let max = u64::from(config.max_weighted_tweet_length);
    let valid = outcome.valid && 0 < weighted_length && weighted_length <= max;
    let permillage = weighted_length * 1000 / max;

    tracing::debug!(
        urls = urls.len(),
        emojis = emojis.len(),
        weighted_length,
        valid,
        drift = ranges.normalization_drift,
        "text parsed"
    );

    ParsedResult {
        valid,
        weighted_length,
        permillage,
        valid_range_start: 0,
        valid_range_end: ranges.valid_range_end,
        display_range_start: 0,
        display_range_end: ranges.display_range_end,
    }
}

/// Canonical composition (NFC) of `text`.
pub fn normalize(text: &str) -> String {
    text.nfc().collect()
}
