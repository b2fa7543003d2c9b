// Global status bar displayed at the very bottom of the app
// Shows the current notification on the left and the signed-in account on the right

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::truncate_with_ellipsis;
use crate::ui::notifications::{Notification, NotificationLevel};
use crate::ui::theme;

const SIGNED_OUT_LABEL: &str = "Not signed in ";

fn level_color(level: NotificationLevel) -> ratatui::style::Color {
    match level {
        NotificationLevel::Info => theme::ACCENT_PRIMARY,
        NotificationLevel::Success => theme::ACCENT_SUCCESS,
        NotificationLevel::Warning => theme::ACCENT_WARNING,
        NotificationLevel::Error => theme::ACCENT_ERROR,
    }
}

/// Render the status bar. `account` is the signed-in email, if any.
pub fn render_statusbar(
    f: &mut Frame,
    area: Rect,
    current_notification: Option<&Notification>,
    account: Option<&str>,
) {
    let account_label = account
        .map(|email| format!("{} ", email))
        .unwrap_or_else(|| SIGNED_OUT_LABEL.to_string());
    // Account column never takes more than half the bar
    let account_width = ((account_label.width() + 1) as u16).min(area.width / 2);

    let chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(account_width),
    ])
    .split(area);

    let bar_style = Style::default().bg(theme::BG_STATUSBAR);

    let notification_paragraph = if let Some(notification) = current_notification {
        let color = level_color(notification.level);
        let icon = notification.level.icon();
        let available = (chunks[0].width as usize).saturating_sub(icon.width() + 2);
        let message = truncate_with_ellipsis(&notification.message, available);

        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color)),
            Span::styled(message, Style::default().fg(color)),
        ]))
        .style(bar_style)
    } else {
        Paragraph::new("").style(bar_style)
    };
    f.render_widget(notification_paragraph, chunks[0]);

    let account_color = if account.is_some() {
        theme::ACCENT_SUCCESS
    } else {
        theme::TEXT_MUTED
    };
    let label = truncate_with_ellipsis(&account_label, chunks[1].width as usize);
    let padding = (chunks[1].width as usize).saturating_sub(label.width());
    let account_paragraph = Paragraph::new(format!("{}{}", " ".repeat(padding), label))
        .style(bar_style.fg(account_color));
    f.render_widget(account_paragraph, chunks[1]);
}
