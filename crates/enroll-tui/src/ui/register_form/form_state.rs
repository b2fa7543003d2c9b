//! Registration form state
//!
//! Holds field values and the transient flags (password visibility, error,
//! in-flight submission). Submission is split in two halves so the UI loop
//! can run the `register` call on a background task:
//! [`RegisterFormState::begin_submit`] validates and hands back the payload,
//! [`RegisterFormState::finish_submit`] applies the outcome.

use std::panic::AssertUnwindSafe;
use std::str::FromStr;

use enroll_core::auth::AuthProvider;
use enroll_core::events::RegisterOutcome;
use enroll_core::models::{Branch, NewUser, SEMESTER_RANGE};
use futures::FutureExt;

use super::validation::{self, RegisterValidationError};

pub const MSG_REGISTER_REJECTED: &str = "Registration failed. Email might already exist.";
pub const MSG_REGISTER_FAILED: &str = "Registration failed. Please try again.";

/// Form inputs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FullName,
    Email,
    RegistrationNumber,
    Branch,
    Semester,
    Password,
    ConfirmPassword,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::FullName,
        FormField::Email,
        FormField::RegistrationNumber,
        FormField::Branch,
        FormField::Semester,
        FormField::Password,
        FormField::ConfirmPassword,
    ];

    /// Input name, matching the web form
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::RegistrationNumber => "registrationNumber",
            FormField::Branch => "branch",
            FormField::Semester => "semester",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Email => "Email Address",
            FormField::RegistrationNumber => "Registration Number",
            FormField::Branch => "Branch",
            FormField::Semester => "Semester",
            FormField::Password => "Password",
            FormField::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::FullName => "Enter your full name",
            FormField::Email => "Enter your email",
            FormField::RegistrationNumber => "e.g., 21BCE1234",
            FormField::Branch => "Select Branch",
            FormField::Semester => "",
            FormField::Password => "Create password",
            FormField::ConfirmPassword => "Confirm password",
        }
    }

    /// Drop-down style fields, changed by cycling through options
    pub fn is_select(&self) -> bool {
        matches!(self, FormField::Branch | FormField::Semester)
    }

    fn index(&self) -> usize {
        FormField::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> FormField {
        FormField::ALL[(self.index() + 1) % FormField::ALL.len()]
    }

    pub fn prev(&self) -> FormField {
        let len = FormField::ALL.len();
        FormField::ALL[(self.index() + len - 1) % len]
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("unknown form field: {}", s))
    }
}

/// Result of asking the form to start a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation passed; `loading` is now set. Send this payload to `register`.
    Ready(NewUser),
    /// Validation failed; `error` holds the message
    Invalid(RegisterValidationError),
    /// A submission is already in flight; nothing changed
    Busy,
}

/// A `register` call started by this form, waiting for its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub id: u64,
    /// Credentials as submitted; later edits to the fields don't change them
    pub email: String,
    pub password: String,
}

/// State for the account creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFormState {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub registration_number: String,
    pub branch: String,
    pub semester: u32,
    /// Unmask the password input (the confirmation stays masked)
    pub show_password: bool,
    /// Message shown above the form; empty when there is none
    pub error: String,
    /// True only while a `register` call is in flight
    pub loading: bool,
    pub focus: FormField,
    /// Call in flight for this form instance, if any
    pub submission: Option<PendingSubmission>,
}

impl RegisterFormState {
    pub fn new() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            registration_number: String::new(),
            branch: String::new(),
            semester: 1,
            show_password: false,
            error: String::new(),
            loading: false,
            focus: FormField::FullName,
            submission: None,
        }
    }

    /// Current text of a field (semester rendered as a number)
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::FullName => self.full_name.clone(),
            FormField::Email => self.email.clone(),
            FormField::RegistrationNumber => self.registration_number.clone(),
            FormField::Branch => self.branch.clone(),
            FormField::Semester => self.semester.to_string(),
            FormField::Password => self.password.clone(),
            FormField::ConfirmPassword => self.confirm_password.clone(),
        }
    }

    /// Whether the field's text should be masked when displayed
    pub fn is_masked(&self, field: FormField) -> bool {
        match field {
            FormField::Password => !self.show_password,
            FormField::ConfirmPassword => true,
            _ => false,
        }
    }

    /// Apply an input change by field name.
    ///
    /// Text is stored exactly as entered. `semester` is parsed as an integer;
    /// values that don't parse or fall outside 1-8 are ignored. Returns
    /// whether the state changed.
    pub fn handle_input_change(&mut self, name: &str, value: &str) -> bool {
        let field = match name.parse::<FormField>() {
            Ok(field) => field,
            Err(e) => {
                tracing::warn!("{}", e);
                return false;
            }
        };

        match field {
            FormField::FullName => self.full_name = value.to_string(),
            FormField::Email => self.email = value.to_string(),
            FormField::RegistrationNumber => self.registration_number = value.to_string(),
            FormField::Branch => self.branch = value.to_string(),
            FormField::Password => self.password = value.to_string(),
            FormField::ConfirmPassword => self.confirm_password = value.to_string(),
            FormField::Semester => match value.trim().parse::<u32>() {
                Ok(semester) if SEMESTER_RANGE.contains(&semester) => self.semester = semester,
                _ => {
                    tracing::warn!("ignoring semester value {:?}", value);
                    return false;
                }
            },
        }
        true
    }

    /// Append a typed character to the focused text field
    pub fn insert_char(&mut self, c: char) {
        if self.focus.is_select() {
            return;
        }
        let mut value = self.value(self.focus);
        value.push(c);
        self.handle_input_change(self.focus.name(), &value);
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        if self.focus.is_select() {
            return;
        }
        let mut value = self.value(self.focus);
        value.pop();
        self.handle_input_change(self.focus.name(), &value);
    }

    /// Move the focused select to its next/previous option.
    ///
    /// Branch options are "Select Branch" (empty) followed by every branch.
    pub fn cycle_option(&mut self, forward: bool) {
        match self.focus {
            FormField::Branch => {
                let options: Vec<&str> = std::iter::once("")
                    .chain(Branch::ALL.iter().map(|b| b.as_str()))
                    .collect();
                let current = options.iter().position(|o| *o == self.branch).unwrap_or(0);
                let next = step(current, options.len(), forward);
                self.handle_input_change(FormField::Branch.name(), options[next]);
            }
            FormField::Semester => {
                let options: Vec<u32> = SEMESTER_RANGE.collect();
                let current = options.iter().position(|s| *s == self.semester).unwrap_or(0);
                let next = step(current, options.len(), forward);
                self.handle_input_change(FormField::Semester.name(), &options[next].to_string());
            }
            _ => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// First field failing its input constraint, in display order.
    ///
    /// A failing field keeps the submit handler from running at all; the
    /// error message is left untouched.
    pub fn first_invalid_field(&self) -> Option<(FormField, RegisterValidationError)> {
        FormField::ALL.iter().find_map(|&field| {
            let check = match field {
                FormField::Email => validation::validate_email(&self.email),
                FormField::Branch => validation::validate_branch(&self.branch),
                FormField::Semester => validation::validate_semester(self.semester),
                other => validation::validate_required(&self.value(other)),
            };
            check.err().map(|e| (field, e))
        })
    }

    /// Registration payload: every field except the confirmation
    pub fn payload(&self) -> NewUser {
        NewUser {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            registration_number: self.registration_number.clone(),
            branch: self.branch.clone(),
            semester: self.semester,
        }
    }

    /// Start a submission: clear the error, check the passwords, then mark
    /// the form busy and return the payload.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.loading {
            return SubmitStart::Busy;
        }

        self.error.clear();

        if let Err(e) = validation::validate_passwords(&self.password, &self.confirm_password) {
            self.error = e.to_string();
            return SubmitStart::Invalid(e);
        }

        self.loading = true;
        SubmitStart::Ready(self.payload())
    }

    /// Apply the result of the `register` call. Always clears `loading`.
    pub fn finish_submit(&mut self, outcome: &RegisterOutcome) {
        match outcome {
            RegisterOutcome::Created { .. } => {}
            RegisterOutcome::Rejected => self.error = MSG_REGISTER_REJECTED.to_string(),
            RegisterOutcome::Failed(_) => self.error = MSG_REGISTER_FAILED.to_string(),
        }
        self.loading = false;
    }

    /// Remember which background call answers for this form
    pub fn track_submission(&mut self, id: u64, payload: &NewUser) {
        self.submission = Some(PendingSubmission {
            id,
            email: payload.email.clone(),
            password: payload.password.clone(),
        });
    }

    /// Claim the pending submission if `id` is the one this form started.
    /// Outcomes for any other id belong to an earlier form and are ignored.
    pub fn take_submission(&mut self, id: u64) -> Option<PendingSubmission> {
        if self.submission.as_ref().is_some_and(|pending| pending.id == id) {
            self.submission.take()
        } else {
            None
        }
    }

    /// Run the whole submit protocol against `auth` in place.
    ///
    /// Returns `None` if the call was never made (validation failed or a
    /// submission was already running). A panicking provider is reported as
    /// a failure and still leaves the form idle.
    pub async fn submit(&mut self, auth: &dyn AuthProvider) -> Option<RegisterOutcome> {
        let payload = match self.begin_submit() {
            SubmitStart::Ready(payload) => payload,
            SubmitStart::Invalid(_) | SubmitStart::Busy => return None,
        };
        let email = payload.email.clone();

        let outcome = match AssertUnwindSafe(auth.register(payload)).catch_unwind().await {
            Ok(Ok(true)) => RegisterOutcome::Created { email },
            Ok(Ok(false)) => RegisterOutcome::Rejected,
            Ok(Err(e)) => RegisterOutcome::Failed(e.to_string()),
            Err(_) => RegisterOutcome::Failed("register panicked".to_string()),
        };

        self.finish_submit(&outcome);
        Some(outcome)
    }
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self::new()
    }
}

fn step(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}
