use async_trait::async_trait;
use permitdesk_application::{CredentialStore, Credentials};
use permitdesk_core::AppResult;
use tokio::sync::RwLock;
use tracing::debug;

/// Process-local credential store.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    credentials: RwLock<Option<Credentials>>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding an existing session.
    #[must_use]
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            credentials: RwLock::new(Some(credentials)),
        }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn load(&self) -> AppResult<Option<Credentials>> {
        Ok(self.credentials.read().await.clone())
    }

    async fn commit(&self, credentials: Credentials) -> AppResult<()> {
        let user_id = credentials.user.id;
        *self.credentials.write().await = Some(credentials);
        debug!(user_id, "stored credentials in memory");

        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.credentials.write().await = None;
        debug!("cleared in-memory credentials");

        Ok(())
    }
}
