pub mod app;
pub mod components;
pub mod course_card;
pub mod format;
pub mod layout;
pub mod notifications;
pub mod register_form;
pub mod services;
pub mod terminal;
pub mod theme;
pub mod views;

pub use app::{App, View};
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
