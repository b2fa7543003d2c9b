//! Per-view keyboard handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::App;

// =============================================================================
// REGISTER VIEW
// =============================================================================

pub(super) fn handle_register_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('t') if ctrl => app.register_form.toggle_password_visibility(),
        KeyCode::Char('l') if ctrl => app.on_toggle_form(),
        KeyCode::Tab | KeyCode::Down => app.register_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.register_form.focus_prev(),
        KeyCode::Left => app.register_form.cycle_option(false),
        KeyCode::Right => app.register_form.cycle_option(true),
        KeyCode::Backspace => app.register_form.backspace(),
        KeyCode::Enter => app.submit_register_form(),
        KeyCode::Char(c) if !ctrl => app.register_form.insert_char(c),
        _ => {}
    }
}

// =============================================================================
// SIGN IN VIEW
// =============================================================================

pub(super) fn handle_sign_in_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('r') if ctrl => app.on_toggle_form(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => app.sign_in.toggle_focus(),
        KeyCode::Backspace => app.sign_in.backspace(),
        KeyCode::Enter => app.submit_sign_in(),
        KeyCode::Char(c) if !ctrl => app.sign_in.insert_char(c),
        _ => {}
    }
}

// =============================================================================
// COURSES VIEW
// =============================================================================

pub(super) fn handle_courses_key(app: &mut App, key: KeyEvent) {
    let columns = app.course_columns.max(1) as isize;

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.select_course_offset(-1),
        KeyCode::Right | KeyCode::Char('l') => app.select_course_offset(1),
        KeyCode::Up | KeyCode::Char('k') => app.select_course_offset(-columns),
        KeyCode::Down | KeyCode::Char('j') => app.select_course_offset(columns),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected_course(),
        KeyCode::Char('o') => app.sign_out(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}
