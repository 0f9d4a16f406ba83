//! Emoji extraction.
//!
//! Segments text into extended grapheme clusters and keeps the clusters the
//! emoji database recognizes, so a skin-tone sequence, a ZWJ family or a
//! flag is reported as one span covering all of its code points. When a
//! cluster carries extra marks after an emoji, only the emoji prefix is
//! reported.

use unicode_segmentation::UnicodeSegmentation;

use crate::span::{CodePointMap, Span};

const VARIATION_SELECTOR_16: char = '\u{FE0F}';

/// Longest emoji sequence, in code points, tried as a cluster prefix.
const MAX_EMOJI_CODE_POINTS: usize = 10;

/// Extract emoji clusters from `text` with their code-point indices.
///
/// ```
/// use tweet_weight_core::emoji::extract_emojis_with_indices;
///
/// let spans = extract_emojis_with_indices("text 😷");
/// assert_eq!((spans[0].start, spans[0].end), (5, 6));
/// ```
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn extract_emojis_with_indices(text: &str) -> Vec<Span> {
    let map = CodePointMap::new(text);
    let spans: Vec<Span> = text
        .grapheme_indices(true)
        .filter_map(|(start, cluster)| {
            emoji_prefix_len(cluster).map(|len| map.span(text, start, start + len))
        })
        .collect();
    tracing::trace!(count = spans.len(), "emojis extracted");
    spans
}

/// Byte length of the longest emoji at the start of `cluster`.
fn emoji_prefix_len(cluster: &str) -> Option<usize> {
    if is_emoji(cluster) {
        return Some(cluster.len());
    }
    let ends: Vec<usize> = cluster
        .char_indices()
        .map(|(idx, c)| idx + c.len_utf8())
        .take(MAX_EMOJI_CODE_POINTS)
        .filter(|&end| end < cluster.len())
        .collect();
    ends.into_iter()
        .rev()
        .find(|&end| is_emoji(&cluster[..end]))
}

/// Whether a grapheme cluster is an emoji.
///
/// Tries the cluster as written, then with its presentation selector added
/// or removed, then with skin-tone modifiers stripped.
pub fn is_emoji(cluster: &str) -> bool {
    if cluster.is_empty() || cluster.chars().all(|c| c.is_ascii()) {
        return false;
    }
    if emojis::get(cluster).is_some() {
        return true;
    }
    let without_selector: String = cluster
        .chars()
        .filter(|&c| c != VARIATION_SELECTOR_16)
        .collect();
    if without_selector != cluster && emojis::get(&without_selector).is_some() {
        return true;
    }
    if cluster.chars().count() == 1 {
        let with_selector = format!("{cluster}{VARIATION_SELECTOR_16}");
        if emojis::get(&with_selector).is_some() {
            return true;
        }
    }
    let without_tone: String = cluster.chars().filter(|&c| !is_skin_tone(c)).collect();
    without_tone != cluster && is_emoji(&without_tone)
}

const fn is_skin_tone(c: char) -> bool {
    matches!(c, '\u{1F3FB}'..='\u{1F3FF}')
}
