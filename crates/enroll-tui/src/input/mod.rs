//! Keyboard event processing.
//!
//! `view_handlers` holds one handler per view; this module routes to them
//! and handles keys shared by every view.

mod view_handlers;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::{App, View};

use view_handlers::*;

/// Route a key press to the active view. Ctrl+C is handled by the runtime.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Esc first dismisses a toast, if one is showing
    if key.code == KeyCode::Esc && app.current_notification().is_some() {
        app.dismiss_notification();
        return Ok(());
    }

    match app.view {
        View::Register => handle_register_key(app, key),
        View::SignIn => handle_sign_in_key(app, key),
        View::Courses => handle_courses_key(app, key),
    }
    Ok(())
}

/// Paste into whichever text input is focused
pub fn handle_paste(app: &mut App, text: &str) {
    let chars = text.chars().filter(|c| !c.is_control());
    match app.view {
        View::Register => {
            for c in chars {
                app.register_form.insert_char(c);
            }
        }
        View::SignIn if !app.sign_in.loading => {
            for c in chars {
                app.sign_in.insert_char(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use enroll_core::auth::InMemoryAuth;
    use enroll_core::catalog::InMemoryCatalog;
    use enroll_core::runtime::CoreRuntime;
    use std::sync::Arc;

    use crate::ui::register_form::FormField;

    fn test_app() -> (App, CoreRuntime) {
        let runtime =
            CoreRuntime::with_parts(Arc::new(InMemoryAuth::new()), InMemoryCatalog::default());
        let app = App::new(runtime.catalog(), runtime.handle());
        (app, runtime)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)).unwrap();
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_focus_movement() {
        let (mut app, _runtime) = test_app();
        type_str(&mut app, "Asha");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "asha@example.com");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.register_form.full_name, "Asha");
        assert_eq!(app.register_form.email, "asha@example.co");

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.register_form.focus, FormField::FullName);
    }

    #[test]
    fn test_selects_cycle_with_arrows() {
        let (mut app, _runtime) = test_app();
        app.register_form.focus = FormField::Semester;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.register_form.semester, 2);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.register_form.semester, 8);

        app.register_form.focus = FormField::Branch;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.register_form.branch, "CSE");
    }

    #[test]
    fn test_ctrl_t_toggles_password_visibility() {
        let (mut app, _runtime) = test_app();
        ctrl(&mut app, 't');
        assert!(app.register_form.show_password);
        ctrl(&mut app, 't');
        assert!(!app.register_form.show_password);
    }

    #[test]
    fn test_form_toggle_round_trip() {
        let (mut app, _runtime) = test_app();
        type_str(&mut app, "Asha");
        ctrl(&mut app, 'l');
        assert_eq!(app.view, View::SignIn);
        ctrl(&mut app, 'r');
        assert_eq!(app.view, View::Register);
        assert!(app.register_form.full_name.is_empty());
    }

    #[test]
    fn test_enter_while_submitting_is_ignored() {
        let (mut app, _runtime) = test_app();
        app.register_form.loading = true;
        app.register_form.error = "kept".to_string();
        type_str(&mut app, "x");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.register_form.full_name, "x");
        assert_eq!(app.register_form.error, "kept");
        assert!(app.register_form.loading);
    }

    #[test]
    fn test_paste_drops_control_characters() {
        let (mut app, _runtime) = test_app();
        handle_paste(&mut app, "Asha\nVerma");
        assert_eq!(app.register_form.full_name, "AshaVerma");
    }

    #[test]
    fn test_courses_navigation_and_quit() {
        let (mut app, _runtime) = test_app();
        app.view = View::Courses;
        app.course_columns = 2;
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_course, 2);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_course, 1);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
