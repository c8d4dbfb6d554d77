use async_trait::async_trait;
use permitdesk_core::{AppResult, AuthToken};
use permitdesk_domain::{Domain, User};
use serde::{Deserialize, Serialize};

/// Session record written at sign-in and cleared on sign-out or 401.
///
/// The three parts always change together; stores commit and clear the
/// whole record in one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Bearer token sent on authenticated requests.
    pub token: AuthToken,
    /// User snapshot cached at sign-in.
    pub user: User,
    /// Domain the session is scoped to, when the user has one.
    pub domain: Option<Domain>,
}

/// Durable holder of the current session.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the stored session, if any.
    async fn load(&self) -> AppResult<Option<Credentials>>;

    /// Replaces the stored session.
    async fn commit(&self, credentials: Credentials) -> AppResult<()>;

    /// Removes the stored session.
    async fn clear(&self) -> AppResult<()>;

    /// Returns the stored bearer token, if any.
    async fn token(&self) -> AppResult<Option<AuthToken>> {
        Ok(self.load().await?.map(|credentials| credentials.token))
    }
}
