pub mod course;
pub mod user;

pub use course::{format_grouped, Course, TimeSlot};
pub use user::{Branch, NewUser, UserProfile, SEMESTER_RANGE};
