//! Course card component
//!
//! - `card`: enrollment figures, colour bracket and the action button
//! - `view`: ratatui rendering

pub mod card;
pub mod view;

pub use card::{
    card_button, enrollment_percentage, percentage_label, CardAction, CardActionKind, CardButton,
    CourseCard, EnrollmentLevel,
};
pub use view::{render_course_card, CARD_HEIGHT};
