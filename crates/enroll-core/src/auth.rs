//! Account creation and sign-in collaborator
//!
//! The UI only talks to [`AuthProvider`]. [`InMemoryAuth`] is the provider the
//! terminal app ships with: accounts live for the lifetime of the process.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;

use crate::models::{NewUser, UserProfile};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Auth backend unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid account data: {0}")]
    InvalidData(String),
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Create an account. `Ok(false)` means the backend rejected it (for
    /// example the email is taken); `Err` means the attempt itself failed.
    async fn register(&self, user: NewUser) -> Result<bool, AuthError>;

    /// Check credentials, returning the profile on success
    async fn login(&self, email: &str, password: &str) -> Result<Option<UserProfile>, AuthError>;
}

struct Account {
    profile: UserProfile,
    password: String,
}

/// Process-local account store
pub struct InMemoryAuth {
    accounts: Mutex<HashMap<String, Account>>,
    register_delay: Duration,
}

impl InMemoryAuth {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            register_delay: Duration::ZERO,
        }
    }

    /// Simulated round-trip latency applied to every `register` call
    pub fn with_register_delay(mut self, delay: Duration) -> Self {
        self.register_delay = delay;
        self
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().len()
    }

    fn email_key(email: &str) -> String {
        email.trim().to_lowercase()
    }
}

impl Default for InMemoryAuth {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuth {
    async fn register(&self, user: NewUser) -> Result<bool, AuthError> {
        if !self.register_delay.is_zero() {
            tokio::time::sleep(self.register_delay).await;
        }

        if user.email.trim().is_empty() {
            return Err(AuthError::InvalidData("email is empty".to_string()));
        }

        let key = Self::email_key(&user.email);
        let mut accounts = self.accounts.lock();
        if accounts.contains_key(&key) {
            tracing::info!(email = %key, "registration rejected: email already exists");
            return Ok(false);
        }

        let profile = UserProfile {
            id: Uuid::new_v4().to_string(),
            full_name: user.full_name,
            email: user.email,
            registration_number: user.registration_number,
            branch: user.branch,
            semester: user.semester,
        };
        tracing::info!(user_id = %profile.id, email = %key, "account created");
        accounts.insert(
            key,
            Account {
                profile,
                password: user.password,
            },
        );
        Ok(true)
    }

    async fn login(&self, email: &str, password: &str) -> Result<Option<UserProfile>, AuthError> {
        let accounts = self.accounts.lock();
        let profile = accounts
            .get(&Self::email_key(email))
            .filter(|account| account.password == password)
            .map(|account| account.profile.clone());
        if profile.is_none() {
            tracing::debug!("login rejected for {}", email);
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            full_name: "Asha Verma".to_string(),
            email: email.to_string(),
            password: "hunter22".to_string(),
            registration_number: "21BCE1234".to_string(),
            branch: "CSE".to_string(),
            semester: 3,
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let auth = InMemoryAuth::new();
        assert!(auth.register(new_user("asha@example.com")).await.unwrap());
        assert_eq!(auth.account_count(), 1);

        let profile = auth
            .login("asha@example.com", "hunter22")
            .await
            .unwrap()
            .expect("profile");
        assert_eq!(profile.full_name, "Asha Verma");
        assert_eq!(profile.semester, 3);

        assert!(auth.login("asha@example.com", "wrong").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let auth = InMemoryAuth::new();
        assert!(auth.register(new_user("asha@example.com")).await.unwrap());
        assert!(!auth.register(new_user("ASHA@example.com")).await.unwrap());
        assert_eq!(auth.account_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_email_is_an_error() {
        let auth = InMemoryAuth::new();
        assert!(matches!(
            auth.register(new_user("  ")).await,
            Err(AuthError::InvalidData(_))
        ));
    }
}
