pub mod statusbar;
pub mod text_field;

pub use statusbar::render_statusbar;
pub use text_field::{render_select_field, render_text_field, TextField};
