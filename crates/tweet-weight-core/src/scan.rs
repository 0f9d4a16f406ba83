//! Weighted-length scanner.
//!
//! One left-to-right pass over the code points of normalized text. URLs and
//! emoji clusters are consumed whole; every other code point is weighed on
//! its own. Everything here is in code-point space; UTF-16 conversion happens
//! in [`crate::offsets`].

use crate::span::{Span, SpanIndex};
use crate::validity::is_invalid_character;
use crate::weighting::{WeightingConfig, character_weight};

/// Raw result of a scan, before descaling and offset conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Sum of weights in scaled units.
    pub weighted_length: u64,
    /// `false` once a disallowed character has been seen.
    pub valid: bool,
    /// Last code-point index that was still valid and within budget.
    pub valid_boundary_index: usize,
}

/// What occupies a position in the text. URLs take priority over emoji.
enum Position<'a> {
    PlainChar(char),
    UrlStart(&'a Span),
    EmojiStart(&'a Span),
}

impl<'a> Position<'a> {
    fn classify(
        index: usize,
        ch: char,
        urls: &'a SpanIndex,
        emojis: &'a SpanIndex,
        config: &WeightingConfig,
    ) -> Self {
        if let Some(span) = urls.starting_at(index) {
            Self::UrlStart(span)
        } else if let Some(span) = emojis
            .starting_at(index)
            .filter(|_| config.emoji_parsing_enabled)
        {
            Self::EmojiStart(span)
        } else {
            Self::PlainChar(ch)
        }
    }
}

/// Scan `normalized` and accumulate its weighted length.
///
/// The boundary index is overwritten on every position that is still valid
/// and within budget, so it ends on the last such position. The disallowed
/// character check looks at the position the scan lands on after skipping
/// an entity, which is the entity's last code point.
pub fn scan(
    normalized: &str,
    urls: &SpanIndex,
    emojis: &SpanIndex,
    config: &WeightingConfig,
) -> ScanOutcome {
    let chars: Vec<char> = normalized.chars().collect();
    let budget = config.scaled_max();

    let mut weighted_length: u64 = 0;
    let mut valid = true;
    let mut valid_boundary_index = 0;
    let mut char_index = 0;

    while char_index < chars.len() {
        let ch = chars[char_index];
        match Position::classify(char_index, ch, urls, emojis, config) {
            Position::UrlStart(span) => {
                weighted_length += config.scaled_url_weight();
                char_index += span.len().saturating_sub(1);
            }
            Position::EmojiStart(span) => {
                let base = span.first_char().unwrap_or(ch);
                weighted_length += u64::from(character_weight(base, config));
                char_index += span.len().saturating_sub(1);
            }
            Position::PlainChar(ch) => {
                weighted_length += u64::from(character_weight(ch, config));
            }
        }

        if valid {
            valid = !chars
                .get(char_index)
                .is_some_and(|&c| is_invalid_character(c));
        }

        if valid && weighted_length <= budget {
            valid_boundary_index = char_index;
        }

        char_index += 1;
    }

    ScanOutcome {
        weighted_length,
        valid,
        valid_boundary_index,
    }
}
