pub mod courses;
pub mod register;
pub mod sign_in;

pub use courses::render_courses;
pub use register::render_register;
pub use sign_in::{render_sign_in, SignInState};
