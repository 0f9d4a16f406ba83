//! Disallowed characters.
//!
//! A text containing any of these is never valid, whatever its length.

/// Byte-order marks and noncharacters that may not appear in a post.
pub const INVALID_CHARACTERS: &[char] = &['\u{FFFE}', '\u{FEFF}', '\u{FFFF}'];

/// Whether `ch` is disallowed.
pub fn is_invalid_character(ch: char) -> bool {
    INVALID_CHARACTERS.contains(&ch)
}

/// Whether `text` contains any disallowed character.
pub fn has_invalid_characters(text: &str) -> bool {
    text.chars().any(is_invalid_character)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_bom_and_noncharacters() {
        assert!(is_invalid_character('\u{FEFF}'));
        assert!(is_invalid_character('\u{FFFE}'));
        assert!(is_invalid_character('\u{FFFF}'));
    }

    #[test]
    fn ordinary_characters_allowed() {
        for ch in ['a', ' ', '日', '😷', '\u{200D}', '\u{FFFD}'] {
            assert!(!is_invalid_character(ch), "{ch:?} should be allowed");
        }
    }

    #[test]
    fn text_scan() {
        assert!(has_invalid_characters("abc\u{FEFF}def"));
        assert!(!has_invalid_characters("abc def"));
        assert!(!has_invalid_characters(""));
    }
}
