//! Account registration form
//!
//! This module provides:
//! - RegisterFormState: field values, visibility toggle, error and busy flags
//! - The submit protocol (password checks, then the `register` call)
//! - Field constraints (required fields, email shape, branch and semester)

pub mod form_state;
pub mod validation;

pub use form_state::{
    FormField, PendingSubmission, RegisterFormState, SubmitStart, MSG_REGISTER_FAILED,
    MSG_REGISTER_REJECTED,
};
pub use validation::{RegisterValidationError, MIN_PASSWORD_LEN};
