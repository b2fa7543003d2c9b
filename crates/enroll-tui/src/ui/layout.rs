// Centralized layout constants and helpers

use ratatui::layout::Rect;

/// Horizontal padding for main content areas
pub const CONTENT_PADDING_H: u16 = 2;

/// Header height (title line)
pub const HEADER_HEIGHT: u16 = 1;

/// Footer height (key hints)
pub const FOOTER_HEIGHT: u16 = 1;

/// Status bar height (single line at very bottom of app)
pub const STATUSBAR_HEIGHT: u16 = 1;

/// Width of the centered auth forms (register, sign in)
pub const FORM_WIDTH: u16 = 56;

/// Minimum width of a course card column
pub const CARD_MIN_WIDTH: u16 = 44;

/// Apply horizontal padding to a Rect (reduces width and shifts x)
#[inline]
pub fn with_horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

#[inline]
pub fn with_content_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, CONTENT_PADDING_H)
}

/// Horizontally center a column of `width` inside `area`
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Number of card columns that fit in `width`
pub fn card_columns(width: u16) -> usize {
    (width / CARD_MIN_WIDTH).max(1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_column() {
        let area = Rect::new(0, 0, 100, 20);
        let col = centered_column(area, 56);
        assert_eq!(col.x, 22);
        assert_eq!(col.width, 56);

        let narrow = centered_column(Rect::new(5, 0, 40, 20), 56);
        assert_eq!(narrow.x, 5);
        assert_eq!(narrow.width, 40);
    }

    #[test]
    fn test_card_columns() {
        assert_eq!(card_columns(30), 1);
        assert_eq!(card_columns(88), 2);
        assert_eq!(card_columns(140), 3);
    }
}
