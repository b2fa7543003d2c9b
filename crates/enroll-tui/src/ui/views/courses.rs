use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::course_card::{render_course_card, CourseCard, CARD_HEIGHT};
use crate::ui::layout::{card_columns, with_content_padding};
use crate::ui::{theme, App};

/// First grid row to draw so that `selected_row` stays visible
fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return selected_row;
    }
    (selected_row + 1).saturating_sub(visible_rows)
}

pub fn render_courses(f: &mut Frame, app: &mut App, area: Rect) {
    let area = with_content_padding(area);
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);

    let registered = app
        .courses
        .iter()
        .filter(|c| app.is_registered(&c.id))
        .count();
    let name = app
        .user
        .as_ref()
        .map(|u| u.full_name.as_str())
        .unwrap_or("student");
    let header = Line::from(vec![
        Span::styled(format!("Welcome, {}", name), theme::text_bold()),
        Span::styled(
            format!("  ·  {} courses  ·  {} registered", app.courses.len(), registered),
            theme::text_muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    let grid = chunks[1];
    if app.courses.is_empty() {
        f.render_widget(
            Paragraph::new("No courses available").style(theme::text_muted()),
            grid,
        );
        return;
    }

    let columns = card_columns(grid.width);
    app.course_columns = columns;
    let visible_rows = (grid.height / CARD_HEIGHT) as usize;
    let first_row = first_visible_row(app.selected_course / columns, visible_rows);
    let card_width = grid.width / columns as u16;

    for (index, course) in app.courses.iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let col = index % columns;
        let card_area = Rect {
            x: grid.x + col as u16 * card_width,
            y: grid.y + row as u16 * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT,
        };
        let card = CourseCard::new(course).registered(app.is_registered(&course.id));
        render_course_card(f, card_area, &card, index == app.selected_course);
    }
}
