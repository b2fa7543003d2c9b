use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::auth::{AuthProvider, InMemoryAuth};
use crate::catalog::InMemoryCatalog;
use crate::config::CoreConfig;
use crate::events::{CoreEvent, RegisterOutcome};
use crate::models::NewUser;

/// Cloneable handle for starting background work from the UI
#[derive(Clone)]
pub struct CoreHandle {
    auth: Arc<dyn AuthProvider>,
    event_tx: UnboundedSender<CoreEvent>,
}

impl CoreHandle {
    /// Run `register` on a separate task and post the outcome as
    /// [`CoreEvent::RegisterFinished`] tagged with `submission`. Exactly one
    /// event is sent per call, even if the provider panics.
    pub fn spawn_register(&self, submission: u64, user: NewUser) {
        let auth = Arc::clone(&self.auth);
        let tx = self.event_tx.clone();
        let email = user.email.clone();

        tokio::spawn(async move {
            let attempt = tokio::spawn(async move { auth.register(user).await });
            let outcome = match attempt.await {
                Ok(Ok(true)) => RegisterOutcome::Created { email },
                Ok(Ok(false)) => RegisterOutcome::Rejected,
                Ok(Err(e)) => {
                    tracing::warn!("register failed: {}", e);
                    RegisterOutcome::Failed(e.to_string())
                }
                Err(join_err) => {
                    tracing::error!("register task aborted: {}", join_err);
                    RegisterOutcome::Failed(join_err.to_string())
                }
            };
            if tx
                .send(CoreEvent::RegisterFinished {
                    submission,
                    outcome,
                })
                .is_err()
            {
                tracing::debug!("register outcome dropped: UI loop has exited");
            }
        });
    }

    pub fn spawn_login(&self, email: String, password: String) {
        let auth = Arc::clone(&self.auth);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let result = auth
                .login(&email, &password)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(CoreEvent::LoginFinished(result));
        });
    }
}

/// Owns the collaborators the UI talks to
pub struct CoreRuntime {
    catalog: Arc<InMemoryCatalog>,
    handle: CoreHandle,
    event_rx: UnboundedReceiver<CoreEvent>,
}

impl CoreRuntime {
    pub fn new(config: CoreConfig) -> Result<Self> {
        let catalog = config.load_catalog()?;
        let auth = InMemoryAuth::new().with_register_delay(config.register_delay);
        Ok(Self::with_parts(Arc::new(auth), catalog))
    }

    pub fn with_parts(auth: Arc<dyn AuthProvider>, catalog: InMemoryCatalog) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            catalog: Arc::new(catalog),
            handle: CoreHandle { auth, event_tx },
            event_rx,
        }
    }

    pub fn handle(&self) -> CoreHandle {
        self.handle.clone()
    }

    pub fn catalog(&self) -> Arc<InMemoryCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Wait for the next background result
    pub async fn next_event(&mut self) -> Option<CoreEvent> {
        self.event_rx.recv().await
    }
}
