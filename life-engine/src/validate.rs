// validate.rs - Per-keystroke validation for the board-size entry box

use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Outcome of an accepted keystroke in the board-size entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeEntry {
    /// Text box emptied (backspace). Allowed, but the board keeps its size.
    Empty,
    /// A complete in-range size; the caller applies it as a square resize.
    Size(u32),
}

/// Validate the candidate text the entry box would hold after a keystroke.
/// `None` means the keystroke is rejected and the previous text stands.
pub fn validate_size_entry(text: &str) -> Option<SizeEntry> {
    if text.is_empty() {
        return Some(SizeEntry::Empty);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = text.parse().ok()?;
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&value) {
        Some(SizeEntry::Size(value))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_accepted_without_a_size() {
        assert_eq!(validate_size_entry(""), Some(SizeEntry::Empty));
    }

    #[test]
    fn in_range_sizes_are_accepted() {
        assert_eq!(validate_size_entry("1"), Some(SizeEntry::Size(1)));
        assert_eq!(validate_size_entry("20"), Some(SizeEntry::Size(20)));
        assert_eq!(validate_size_entry("100"), Some(SizeEntry::Size(100)));
    }

    #[test]
    fn non_digits_are_rejected() {
        assert_eq!(validate_size_entry("12a"), None);
        assert_eq!(validate_size_entry("-5"), None);
        assert_eq!(validate_size_entry("+5"), None);
        assert_eq!(validate_size_entry(" 5"), None);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(validate_size_entry("0"), None);
        assert_eq!(validate_size_entry("101"), None);
        assert_eq!(validate_size_entry("999999999999"), None);
    }
}
