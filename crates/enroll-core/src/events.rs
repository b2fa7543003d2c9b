use crate::models::UserProfile;

/// How a `register` attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Account created
    Created { email: String },
    /// Backend declined the account (e.g. email already taken)
    Rejected,
    /// The call failed outright, or the task running it died
    Failed(String),
}

/// Results delivered back to the UI loop from background tasks
#[derive(Debug)]
pub enum CoreEvent {
    /// `submission` echoes the id passed to `CoreHandle::spawn_register`
    RegisterFinished {
        submission: u64,
        outcome: RegisterOutcome,
    },
    LoginFinished(Result<Option<UserProfile>, String>),
}
