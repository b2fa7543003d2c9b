use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::card::{percentage_label, CardActionKind, CourseCard, EnrollmentLevel};
use crate::ui::format::{gap_between, truncate_with_ellipsis};
use crate::ui::theme;
use unicode_width::UnicodeWidthStr;

/// Rows a card needs, borders included
pub const CARD_HEIGHT: u16 = 16;

fn level_color(level: EnrollmentLevel) -> ratatui::style::Color {
    match level {
        EnrollmentLevel::Ok => theme::ENROLLMENT_OK,
        EnrollmentLevel::Warning => theme::ENROLLMENT_WARNING,
        EnrollmentLevel::Danger => theme::ENROLLMENT_DANGER,
    }
}

/// Build the card body, one entry per row
pub fn card_lines(card: &CourseCard<'_>, width: u16) -> Vec<Line<'static>> {
    let course = card.course();
    let text_width = width as usize;
    let mut lines = Vec::with_capacity(CARD_HEIGHT as usize);

    // Header: name + fee, code + credits
    let fee = course.formatted_fee();
    let name = truncate_with_ellipsis(&course.name, text_width.saturating_sub(fee.width() + 1));
    lines.push(Line::from(vec![
        Span::styled(name.clone(), theme::text_bold()),
        Span::raw(gap_between(&name, &fee, width)),
        Span::styled(
            fee,
            Style::default()
                .fg(theme::ACCENT_SUCCESS)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    let credits = format!("{} Credits", course.credits);
    lines.push(Line::from(vec![
        Span::styled(
            course.code.clone(),
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(gap_between(&course.code, &credits, width)),
        Span::styled(credits, theme::text_muted()),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        truncate_with_ellipsis(&course.description, text_width),
        theme::text_muted(),
    )));
    lines.push(Line::from(""));

    // Details
    let detail = |glyph: &'static str, color, text: String| {
        Line::from(vec![
            Span::styled(glyph, Style::default().fg(color)),
            Span::styled(
                truncate_with_ellipsis(&text, text_width.saturating_sub(2)),
                theme::text_primary(),
            ),
        ])
    };
    lines.push(detail("\u{25cf} ", theme::ACCENT_WARNING, course.professor.clone()));
    lines.push(detail(
        "\u{25a0} ",
        theme::ACCENT_PRIMARY,
        format!("{} - Semester {}", course.branch, course.semester),
    ));
    lines.push(detail(
        "\u{25b2} ",
        theme::ACCENT_SPECIAL,
        format!(
            "{}/{} students enrolled",
            course.enrolled_students, course.max_students
        ),
    ));
    lines.push(detail(
        "\u{25f7} ",
        theme::ACCENT_SUCCESS,
        format!("{} sessions per week", course.sessions_per_week()),
    ));
    lines.push(Line::from(""));

    // Enrollment bar
    let percentage = card.percentage();
    let label = percentage_label(percentage);
    lines.push(Line::from(vec![
        Span::styled("Enrollment", theme::text_dim()),
        Span::raw(gap_between("Enrollment", &label, width)),
        Span::styled(label, theme::text_dim()),
    ]));
    let ratio = percentage.map(|p| (p / 100.0).clamp(0.0, 1.0)).unwrap_or(1.0);
    let filled = (ratio * text_width as f64).round() as usize;
    let empty = text_width.saturating_sub(filled);
    lines.push(Line::from(vec![
        Span::styled(
            "\u{2501}".repeat(filled),
            Style::default().fg(level_color(card.level())),
        ),
        Span::styled(
            "\u{2501}".repeat(empty),
            Style::default().fg(theme::PROGRESS_EMPTY),
        ),
    ]));
    lines.push(Line::from(""));

    // Action button, padded to full width
    let button = card.button();
    let button_style = match (button.enabled, button.action) {
        (false, _) => theme::button_disabled(),
        (true, Some(CardActionKind::Unregister)) => theme::button_danger(),
        (true, _) => theme::button_primary(),
    };
    let pad = text_width.saturating_sub(button.label.len());
    let left = pad / 2;
    lines.push(Line::from(Span::styled(
        format!(
            "{}{}{}",
            " ".repeat(left),
            button.label,
            " ".repeat(pad - left)
        ),
        button_style,
    )));

    lines
}

/// Render a course card into `area`
pub fn render_course_card(f: &mut Frame, area: Rect, card: &CourseCard<'_>, selected: bool) {
    let (border_style, bg) = if selected {
        (theme::border_focused(), theme::card_bg_selected())
    } else {
        (theme::border_inactive(), theme::card_bg())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(bg);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    let paragraph = Paragraph::new(card_lines(card, inner.width)).alignment(Alignment::Left);
    f.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use enroll_core::models::{Course, TimeSlot};
    use ratatui::{backend::TestBackend, Terminal};

    fn course(enrolled: u32, max: u32) -> Course {
        Course {
            id: "db".to_string(),
            name: "Database Systems".to_string(),
            code: "IT2004".to_string(),
            description: "Relational modelling and SQL".to_string(),
            professor: "Dr. Meera Nair".to_string(),
            branch: "IT".to_string(),
            semester: 4,
            fee: 43500.0,
            credits: 4,
            enrolled_students: enrolled,
            max_students: max,
            time_slots: vec![
                TimeSlot::new("Tuesday", "10:00", "11:00"),
                TimeSlot::new("Friday", "10:00", "11:00"),
            ],
        }
    }

    fn rendered_text(course: &Course, registered: bool) -> String {
        let backend = TestBackend::new(48, CARD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let card = CourseCard::new(course).registered(registered);
        terminal
            .draw(|f| {
                let area = f.area();
                render_course_card(f, area, &card, false);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_course_details() {
        let text = rendered_text(&course(20, 60), false);
        assert!(text.contains("Database Systems"));
        assert!(text.contains("₹43,500"));
        assert!(text.contains("4 Credits"));
        assert!(text.contains("IT - Semester 4"));
        assert!(text.contains("20/60 students enrolled"));
        assert!(text.contains("2 sessions per week"));
        assert!(text.contains("33%"));
        assert!(text.contains("Register Course"));
    }

    #[test]
    fn test_renders_button_variants() {
        assert!(rendered_text(&course(60, 60), false).contains("Course Full"));
        assert!(rendered_text(&course(60, 60), true).contains("Unregister Course"));
    }

    #[test]
    fn test_bar_is_clamped_when_overbooked() {
        let course = course(70, 60);
        let card = CourseCard::new(&course);
        let lines = card_lines(&card, 30);
        let bar = &lines[11];
        assert_eq!(bar.spans[0].content.chars().count(), 30);
        assert_eq!(bar.spans[1].content.chars().count(), 0);
    }

    #[test]
    fn test_name_uses_all_columns_left_of_fee() {
        let course = course(20, 60);
        let card = CourseCard::new(&course);
        // "Database Systems" + one space + "₹43,500", with no slack
        let width = ("Database Systems".len() + 1 + "₹43,500".chars().count()) as u16;
        let lines = card_lines(&card, width);
        assert_eq!(lines[0].spans[0].content, "Database Systems");
        assert_eq!(lines[0].spans[1].content, " ");
    }
}
