use unicode_width::UnicodeWidthStr;

/// Truncate string to a max length, adding an ellipsis when truncated.
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    if s.chars().count() <= max_len {
        return s.to_string();
    }

    if max_len <= 3 {
        return ".".repeat(max_len);
    }

    let take = max_len - 3;
    let mut truncated: String = s.chars().take(take).collect();
    truncated.push_str("...");
    truncated
}

/// Spaces needed to push `right` flush against the edge after `left`
pub fn gap_between(left: &str, right: &str, width: u16) -> String {
    let used = left.width() + right.width();
    " ".repeat((width as usize).saturating_sub(used).max(1))
}

/// Replace every character with a mask glyph
pub fn mask(value: &str) -> String {
    "\u{2022}".repeat(value.chars().count())
}
