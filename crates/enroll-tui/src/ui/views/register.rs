use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::text_field::{
    render_select_field, render_text_field, TextField, FIELD_HEIGHT,
};
use crate::ui::layout::{centered_column, FORM_WIDTH};
use crate::ui::register_form::{FormField, RegisterFormState};
use crate::ui::{theme, App};

pub const SUBMIT_LABEL: &str = "Create Account";
pub const SUBMIT_LABEL_BUSY: &str = "Creating Account...";

/// Label of the submit button for the current form state
pub fn submit_label(form: &RegisterFormState, spinner: char) -> String {
    if form.loading {
        format!("{} {}", spinner, SUBMIT_LABEL_BUSY)
    } else {
        SUBMIT_LABEL.to_string()
    }
}

fn text_field<'a>(form: &RegisterFormState, field: FormField, value: &'a str) -> TextField<'a> {
    TextField::new(field.label(), value)
        .placeholder(field.placeholder())
        .focused(form.focus == field)
        .masked(form.is_masked(field))
}

pub fn render_register(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.register_form;
    let column = centered_column(area, FORM_WIDTH);
    let error_height = if form.error.is_empty() { 0 } else { 2 };

    let rows = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1), // subtitle
        Constraint::Length(1),
        Constraint::Length(error_height),
        Constraint::Length(FIELD_HEIGHT), // full name
        Constraint::Length(1),
        Constraint::Length(FIELD_HEIGHT), // email
        Constraint::Length(1),
        Constraint::Length(FIELD_HEIGHT), // registration number
        Constraint::Length(1),
        Constraint::Length(FIELD_HEIGHT), // branch | semester
        Constraint::Length(1),
        Constraint::Length(FIELD_HEIGHT), // password
        Constraint::Length(1),
        Constraint::Length(FIELD_HEIGHT), // confirm password
        Constraint::Length(1),
        Constraint::Length(1), // submit
        Constraint::Length(1),
        Constraint::Length(1), // toggle
        Constraint::Min(0),
    ])
    .split(column);

    f.render_widget(
        Paragraph::new("Create Account")
            .style(theme::text_bold())
            .alignment(Alignment::Center),
        rows[0],
    );
    f.render_widget(
        Paragraph::new("Join VIT Bhopal community")
            .style(theme::text_muted())
            .alignment(Alignment::Center),
        rows[1],
    );

    if !form.error.is_empty() {
        f.render_widget(
            Paragraph::new(format!(" {}", form.error))
                .style(theme::status_error().bg(theme::BG_ERROR)),
            rows[3],
        );
    }

    render_text_field(f, rows[4], &text_field(form, FormField::FullName, &form.full_name));
    render_text_field(f, rows[6], &text_field(form, FormField::Email, &form.email));
    render_text_field(
        f,
        rows[8],
        &text_field(form, FormField::RegistrationNumber, &form.registration_number),
    );

    let selects = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(2)
        .split(rows[10]);
    let branch = if form.branch.is_empty() {
        FormField::Branch.placeholder()
    } else {
        form.branch.as_str()
    };
    render_select_field(
        f,
        selects[0],
        FormField::Branch.label(),
        branch,
        form.focus == FormField::Branch,
    );
    render_select_field(
        f,
        selects[1],
        FormField::Semester.label(),
        &form.semester.to_string(),
        form.focus == FormField::Semester,
    );

    let visibility_hint = if form.show_password {
        "Ctrl+T hide"
    } else {
        "Ctrl+T show"
    };
    render_text_field(
        f,
        rows[12],
        &text_field(form, FormField::Password, &form.password).hint(visibility_hint),
    );
    render_text_field(
        f,
        rows[14],
        &text_field(form, FormField::ConfirmPassword, &form.confirm_password),
    );

    let style = if form.loading {
        theme::button_disabled()
    } else {
        theme::button_submit()
    };
    f.render_widget(
        Paragraph::new(format!(" {} ", submit_label(form, app.spinner_char())))
            .style(style)
            .alignment(Alignment::Center),
        rows[16],
    );

    let toggle = Line::from(vec![
        Span::styled("Already have an account? ", theme::text_muted()),
        Span::styled("Sign In", Style::default().fg(theme::ACCENT_PRIMARY)),
        Span::styled(" (Ctrl+L)", theme::text_dim()),
    ]);
    f.render_widget(Paragraph::new(toggle).alignment(Alignment::Center), rows[18]);
}
