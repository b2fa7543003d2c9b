// Labelled single-line inputs used by the auth forms
// Each field takes two rows: label, then "│ value"

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::mask;
use crate::ui::theme;

/// Rows a field occupies (label + input)
pub const FIELD_HEIGHT: u16 = 2;

pub struct TextField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub masked: bool,
    /// Right-aligned hint on the label row (e.g. the visibility toggle)
    pub hint: Option<&'a str>,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            focused: false,
            masked: false,
            hint: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }
}

fn label_line(label: &str, hint: Option<&str>, focused: bool, width: u16) -> Line<'static> {
    let label_style = if focused {
        theme::label_focused()
    } else {
        theme::text_muted()
    };

    let mut spans = vec![Span::styled(label.to_string(), label_style)];
    if let Some(hint) = hint {
        let gap = (width as usize).saturating_sub(label.width() + hint.width());
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(hint.to_string(), theme::text_dim()));
    }
    Line::from(spans)
}

fn bar_style(focused: bool) -> Style {
    if focused {
        theme::border_focused()
    } else {
        theme::border_inactive()
    }
}

pub fn render_text_field(f: &mut Frame, area: Rect, field: &TextField<'_>) {
    if area.height < FIELD_HEIGHT {
        return;
    }

    f.render_widget(
        Paragraph::new(label_line(field.label, field.hint, field.focused, area.width)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let shown = if field.masked {
        mask(field.value)
    } else {
        field.value.to_string()
    };

    let (display_text, text_style) = if shown.is_empty() {
        (field.placeholder.to_string(), theme::text_dim())
    } else {
        (shown.clone(), theme::text_primary())
    };

    let input = Paragraph::new(Line::from(vec![
        Span::styled("│ ", bar_style(field.focused)),
        Span::styled(display_text, text_style),
    ]));
    f.render_widget(input, Rect::new(area.x, area.y + 1, area.width, 1));

    if field.focused {
        let offset = (2 + shown.width() as u16).min(area.width.saturating_sub(1));
        f.set_cursor_position((area.x + offset, area.y + 1));
    }
}

/// Drop-down stand-in: the current option between arrows
pub fn render_select_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    if area.height < FIELD_HEIGHT {
        return;
    }

    f.render_widget(
        Paragraph::new(label_line(label, None, focused, area.width)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let arrow_style = if focused {
        theme::border_focused()
    } else {
        theme::text_dim()
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("│ ", bar_style(focused)),
        Span::styled("◀ ", arrow_style),
        Span::styled(value.to_string(), theme::text_primary()),
        Span::styled(" ▶", arrow_style),
    ]));
    f.render_widget(input, Rect::new(area.x, area.y + 1, area.width, 1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let mut terminal = Terminal::new(TestBackend::new(30, 2)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                let field = TextField::new("Full Name", "").placeholder("Enter your full name");
                render_text_field(f, area, &field);
            })
            .unwrap();

        assert!(row(&terminal, 0).starts_with("Full Name"));
        assert!(row(&terminal, 1).starts_with("│ Enter your full name"));
    }

    #[test]
    fn test_masked_value_hides_text() {
        let mut terminal = Terminal::new(TestBackend::new(30, 2)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                let field = TextField::new("Password", "secret")
                    .masked(true)
                    .hint("Ctrl+T show");
                render_text_field(f, area, &field);
            })
            .unwrap();

        let input = row(&terminal, 1);
        assert!(!input.contains("secret"));
        assert!(input.contains("••••••"));
        assert!(row(&terminal, 0).trim_end().ends_with("Ctrl+T show"));
    }

    #[test]
    fn test_select_field_shows_arrows() {
        let mut terminal = Terminal::new(TestBackend::new(30, 2)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_select_field(f, area, "Semester", "3", true);
            })
            .unwrap();

        assert!(row(&terminal, 1).starts_with("│ ◀ 3 ▶"));
    }
}
