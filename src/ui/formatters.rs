//! Shared formatting utilities for UI components.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` terminal columns, ending with `…`
/// when shortened.
pub(crate) fn fit_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        // Keep one column for the ellipsis
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Rating with a star prefix.
pub(crate) fn format_rating(label: &str) -> String {
    format!("★ {}", label)
}

/// Format a count with thousand separators.
pub(crate) fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(fit_width("Hades", 10), "Hades");
        assert_eq!(fit_width("Hades", 5), "Hades");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(fit_width("Hollow Knight", 8), "Hollow …");
        assert_eq!(fit_width("Hollow Knight", 0), "");
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(fit_width("日本語のゲーム", 5), "日本…");
    }

    #[test]
    fn counts_get_separators() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
