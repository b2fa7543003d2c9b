use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::text_field::{render_text_field, TextField, FIELD_HEIGHT};
use crate::ui::layout::{centered_column, FORM_WIDTH};
use crate::ui::{theme, App};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInField {
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInState {
    pub email: String,
    pub password: String,
    pub focus: SignInField,
    pub error: String,
    pub loading: bool,
}

impl SignInState {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focus: SignInField::Email,
            error: String::new(),
            loading: false,
        }
    }

    fn focused_value(&mut self) -> &mut String {
        match self.focus {
            SignInField::Email => &mut self.email,
            SignInField::Password => &mut self.password,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_value().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_value().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SignInField::Email => SignInField::Password,
            SignInField::Password => SignInField::Email,
        };
    }

    pub fn first_missing_field(&self) -> Option<SignInField> {
        if self.email.trim().is_empty() {
            Some(SignInField::Email)
        } else if self.password.is_empty() {
            Some(SignInField::Password)
        } else {
            None
        }
    }
}

impl Default for SignInState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render_sign_in(f: &mut Frame, app: &App, area: Rect) {
    let state = &app.sign_in;
    let column = centered_column(area, FORM_WIDTH);
    let error_height = if state.error.is_empty() { 0 } else { 2 };

    let rows = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1), // subtitle
        Constraint::Length(1),
        Constraint::Length(error_height),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1), // submit
        Constraint::Length(1),
        Constraint::Length(1), // toggle
        Constraint::Min(0),
    ])
    .split(column);

    f.render_widget(
        Paragraph::new("Welcome Back")
            .style(theme::text_bold())
            .alignment(Alignment::Center),
        rows[0],
    );
    f.render_widget(
        Paragraph::new("Sign in to manage your courses")
            .style(theme::text_muted())
            .alignment(Alignment::Center),
        rows[1],
    );

    if !state.error.is_empty() {
        f.render_widget(
            Paragraph::new(format!(" {}", state.error))
                .style(theme::status_error().bg(theme::BG_ERROR)),
            rows[3],
        );
    }

    let email = TextField::new("Email Address", &state.email)
        .placeholder("Enter your email")
        .focused(state.focus == SignInField::Email);
    render_text_field(f, rows[4], &email);

    let password = TextField::new("Password", &state.password)
        .placeholder("Enter your password")
        .masked(true)
        .focused(state.focus == SignInField::Password);
    render_text_field(f, rows[6], &password);

    let (label, style) = if state.loading {
        (format!("{} Signing In...", app.spinner_char()), theme::button_disabled())
    } else {
        ("Sign In".to_string(), theme::button_submit())
    };
    f.render_widget(
        Paragraph::new(format!(" {} ", label))
            .style(style)
            .alignment(Alignment::Center),
        rows[8],
    );

    let toggle = Line::from(vec![
        Span::styled("Don't have an account? ", theme::text_muted()),
        Span::styled("Sign Up", Style::default().fg(theme::ACCENT_PRIMARY)),
        Span::styled(" (Ctrl+R)", theme::text_dim()),
    ]);
    f.render_widget(Paragraph::new(toggle).alignment(Alignment::Center), rows[10]);
}
