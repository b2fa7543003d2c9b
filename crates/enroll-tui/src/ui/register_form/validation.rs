//! Registration form validation
//!
//! Two layers:
//! - field constraints checked before the submit handler runs (required
//!   fields, email shape, allowed branch and semester values)
//! - submit-time checks on the password pair

use enroll_core::models::{Branch, SEMESTER_RANGE};

/// Minimum password length, in UTF-16 code units (as browsers count it)
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterValidationError {
    /// A required field is empty
    MissingField,
    /// Email is not of the form `local@domain`
    InvalidEmail,
    /// Branch is not one of the offered options
    UnknownBranch(String),
    /// Semester is outside 1-8
    SemesterOutOfRange(u32),
    /// Password and confirmation differ
    PasswordMismatch,
    /// Password shorter than [`MIN_PASSWORD_LEN`]
    PasswordTooShort { min: usize },
}

impl std::fmt::Display for RegisterValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterValidationError::MissingField => write!(f, "Please fill out this field."),
            RegisterValidationError::InvalidEmail => {
                write!(f, "Please enter a valid email address.")
            }
            RegisterValidationError::UnknownBranch(branch) => {
                write!(f, "Please select a branch from the list (got '{}').", branch)
            }
            RegisterValidationError::SemesterOutOfRange(sem) => {
                write!(f, "Semester must be between 1 and 8 (got {}).", sem)
            }
            RegisterValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
            RegisterValidationError::PasswordTooShort { min } => {
                write!(f, "Password must be at least {} characters", min)
            }
        }
    }
}

pub fn validate_required(value: &str) -> Result<(), RegisterValidationError> {
    if value.is_empty() {
        return Err(RegisterValidationError::MissingField);
    }
    Ok(())
}

/// Email shape check: one `@` with text on both sides and no whitespace
pub fn validate_email(email: &str) -> Result<(), RegisterValidationError> {
    validate_required(email)?;

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(RegisterValidationError::InvalidEmail),
    };

    if local.is_empty() || domain.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(RegisterValidationError::InvalidEmail);
    }

    Ok(())
}

pub fn validate_branch(branch: &str) -> Result<(), RegisterValidationError> {
    validate_required(branch)?;
    branch
        .parse::<Branch>()
        .map(|_| ())
        .map_err(|_| RegisterValidationError::UnknownBranch(branch.to_string()))
}

pub fn validate_semester(semester: u32) -> Result<(), RegisterValidationError> {
    if SEMESTER_RANGE.contains(&semester) {
        Ok(())
    } else {
        Err(RegisterValidationError::SemesterOutOfRange(semester))
    }
}

/// Submit-time password rules, checked in order: match first, then length
pub fn validate_passwords(password: &str, confirm: &str) -> Result<(), RegisterValidationError> {
    if password != confirm {
        return Err(RegisterValidationError::PasswordMismatch);
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(RegisterValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("asha@vitbhopal.ac.in").is_ok());
        assert!(validate_email("a@b").is_ok());
        assert_eq!(validate_email(""), Err(RegisterValidationError::MissingField));
        assert_eq!(validate_email("asha"), Err(RegisterValidationError::InvalidEmail));
        assert_eq!(validate_email("@b.com"), Err(RegisterValidationError::InvalidEmail));
        assert_eq!(validate_email("a@"), Err(RegisterValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b@c"), Err(RegisterValidationError::InvalidEmail));
        assert_eq!(validate_email("a b@c"), Err(RegisterValidationError::InvalidEmail));
    }

    #[test]
    fn test_validate_branch() {
        assert!(validate_branch("CIVIL").is_ok());
        assert_eq!(validate_branch(""), Err(RegisterValidationError::MissingField));
        assert!(matches!(
            validate_branch("BIO"),
            Err(RegisterValidationError::UnknownBranch(_))
        ));
    }

    #[test]
    fn test_validate_semester() {
        assert!(validate_semester(1).is_ok());
        assert!(validate_semester(8).is_ok());
        assert!(validate_semester(0).is_err());
        assert!(validate_semester(9).is_err());
    }

    #[test]
    fn test_password_rules_order() {
        // Mismatch is reported even when both are also too short
        assert_eq!(
            validate_passwords("ab1", "ab2"),
            Err(RegisterValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_passwords("ab1", "ab1"),
            Err(RegisterValidationError::PasswordTooShort { min: 6 })
        );
        assert!(validate_passwords("abcdef", "abcdef").is_ok());
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // Each emoji is a surrogate pair: three of them make six units
        assert!(validate_passwords("😀😀😀", "😀😀😀").is_ok());
        assert_eq!(
            validate_passwords("😀😀", "😀😀"),
            Err(RegisterValidationError::PasswordTooShort { min: 6 })
        );
        // Accented letters are single units
        assert_eq!(
            validate_passwords("héllo", "héllo"),
            Err(RegisterValidationError::PasswordTooShort { min: 6 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RegisterValidationError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
        assert_eq!(
            RegisterValidationError::PasswordTooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters"
        );
    }
}
