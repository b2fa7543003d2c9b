use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui;
use crate::ui::components::render_statusbar;
use crate::ui::layout;
use crate::ui::{App, View};

fn footer_hints(view: View) -> &'static str {
    match view {
        View::Register => {
            "Tab/↑↓ move · ←→ select · Ctrl+T show password · Enter create · Ctrl+L sign in"
        }
        View::SignIn => "Tab move · Enter sign in · Ctrl+R create account",
        View::Courses => "←↑↓→ select · Enter register/unregister · o sign out · q quit",
    }
}

pub fn render(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::vertical([
        Constraint::Length(layout::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(layout::FOOTER_HEIGHT),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(f.area());

    let chrome_color = if app.pending_quit {
        ui::theme::ACCENT_ERROR
    } else {
        ui::theme::ACCENT_PRIMARY
    };

    let title = match app.view {
        View::Register => "Course Registration - Create Account",
        View::SignIn => "Course Registration - Sign In",
        View::Courses => "Course Registration - Courses",
    };
    let padding = " ".repeat(layout::CONTENT_PADDING_H as usize);
    let header = Paragraph::new(format!("{}{}", padding, title))
        .style(Style::default().fg(chrome_color).add_modifier(Modifier::BOLD));
    f.render_widget(header, chunks[0]);

    match app.view {
        View::Register => ui::views::render_register(f, app, chunks[1]),
        View::SignIn => ui::views::render_sign_in(f, app, chunks[1]),
        View::Courses => ui::views::render_courses(f, app, chunks[1]),
    }

    let (footer_text, footer_style) = if app.pending_quit {
        (
            "⚠ Press Ctrl+C again to quit",
            Style::default().fg(ui::theme::ACCENT_ERROR),
        )
    } else {
        (footer_hints(app.view), ui::theme::text_dim())
    };
    f.render_widget(
        Paragraph::new(format!("{}{}", padding, footer_text)).style(footer_style),
        chunks[2],
    );

    let account = app.user.as_ref().map(|u| u.email.clone());
    render_statusbar(
        f,
        chunks[3],
        app.current_notification(),
        account.as_deref(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use enroll_core::auth::InMemoryAuth;
    use enroll_core::catalog::InMemoryCatalog;
    use enroll_core::runtime::CoreRuntime;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_chrome_follows_view_and_quit_state() {
        let runtime =
            CoreRuntime::with_parts(Arc::new(InMemoryAuth::new()), InMemoryCatalog::default());
        let mut app = App::new(runtime.catalog(), runtime.handle());

        let text = screen(&mut app);
        assert!(text.contains("Course Registration - Create Account"));
        assert!(text.contains("Not signed in"));

        app.pending_quit = true;
        assert!(screen(&mut app).contains("Press Ctrl+C again to quit"));

        app.pending_quit = false;
        app.show_sign_in();
        assert!(screen(&mut app).contains("Welcome Back"));
    }
}
