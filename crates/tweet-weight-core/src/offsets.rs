//! Code-point to UTF-16 offset conversion.
//!
//! Client widgets index text in UTF-16 code units, and they index the text
//! they were given, not its NFC form. All code-unit arithmetic lives here.

/// Externally reported range ends, in UTF-16 code units of the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalRanges {
    /// Inclusive end of the valid prefix.
    pub valid_range_end: usize,
    /// Inclusive end of the whole text (0 for empty text).
    pub display_range_end: usize,
    /// UTF-16 length of the original text minus that of the normalized text.
    pub normalization_drift: isize,
}

/// Number of UTF-16 code units needed to encode `text`.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Convert a code-point boundary in `normalized` into UTF-16 range ends
/// against `original`.
///
/// `valid_boundary_index` is inclusive. The valid range end is shifted by the
/// normalization drift and never goes below zero; for empty text both ends
/// are zero.
pub fn to_external_ranges(
    original: &str,
    normalized: &str,
    valid_boundary_index: usize,
) -> ExternalRanges {
    let original_units = utf16_len(original);
    let normalized_units = utf16_len(normalized);
    let normalization_drift = original_units as isize - normalized_units as isize;

    let prefix_units: usize = normalized
        .chars()
        .take(valid_boundary_index + 1)
        .map(char::len_utf16)
        .sum();
    let valid_range_end = (prefix_units as isize - 1 + normalization_drift).max(0) as usize;

    ExternalRanges {
        valid_range_end,
        display_range_end: original_units.saturating_sub(1),
        normalization_drift,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf16_lengths() {
        assert_eq!(utf16_len(""), 0);
        assert_eq!(utf16_len("abc"), 3);
        assert_eq!(utf16_len("日本"), 2);
        assert_eq!(utf16_len("😷"), 2);
        assert_eq!(utf16_len("a😷b"), 4);
    }

    #[test]
    fn ascii_ranges() {
        let ranges = to_external_ranges("hello", "hello", 4);
        assert_eq!(ranges.valid_range_end, 4);
        assert_eq!(ranges.display_range_end, 4);
        assert_eq!(ranges.normalization_drift, 0);
    }

    #[test]
    fn astral_characters_take_two_units() {
        // Boundary on the emoji (code point 1) ends on its low surrogate.
        let ranges = to_external_ranges("a😷b", "a😷b", 1);
        assert_eq!(ranges.valid_range_end, 2);
        assert_eq!(ranges.display_range_end, 3);
    }

    #[test]
    fn partial_prefix() {
        let ranges = to_external_ranges("abcdef", "abcdef", 2);
        assert_eq!(ranges.valid_range_end, 2);
        assert_eq!(ranges.display_range_end, 5);
    }

    #[test]
    fn drift_from_composition() {
        // "e" + combining acute composes to one code unit.
        let original = "cafe\u{0301}";
        let normalized = "caf\u{00E9}";
        let ranges = to_external_ranges(original, normalized, 3);
        assert_eq!(ranges.normalization_drift, 1);
        assert_eq!(ranges.valid_range_end, 4);
        assert_eq!(ranges.display_range_end, 4);
    }

    #[test]
    fn empty_text_clamps_to_zero() {
        let ranges = to_external_ranges("", "", 0);
        assert_eq!(ranges.valid_range_end, 0);
        assert_eq!(ranges.display_range_end, 0);
    }
}
