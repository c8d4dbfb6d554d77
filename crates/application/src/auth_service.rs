use std::sync::Arc;

use permitdesk_core::{AppError, AppResult, NonEmptyString};
use permitdesk_domain::{
    Domain, LoginData, LoginInput, SwitchDomainData, SwitchDomainInput, UpdateProfileInput, User,
};
use serde_json::Value;
use tracing::info;

use crate::credential_ports::{CredentialStore, Credentials};
use crate::envelope::{ApiResponse, decode_envelope};
use crate::request_client::{RequestClient, RequestOptions};

#[cfg(test)]
mod tests;

/// Session lifecycle on top of the request client and credential store.
#[derive(Clone)]
pub struct AuthService {
    client: RequestClient,
    credential_store: Arc<dyn CredentialStore>,
}

impl AuthService {
    /// Creates an auth service sharing the client's credential store.
    #[must_use]
    pub fn new(client: RequestClient) -> Self {
        let credential_store = client.credential_store().clone();

        Self {
            client,
            credential_store,
        }
    }

    /// Signs in and stores the returned session.
    pub async fn login(&self, input: LoginInput) -> AppResult<LoginData> {
        NonEmptyString::new("username", input.username.as_str())?;
        NonEmptyString::new("password", input.password.as_str())?;

        let body = self
            .client
            .request_json(
                http::Method::POST,
                "/auth/login",
                Some(&input),
                RequestOptions::public(),
            )
            .await?;
        let login = decode_envelope::<LoginData>(body)?.into_data();

        self.credential_store
            .commit(Credentials {
                token: login.token.clone(),
                user: login.user.clone(),
                domain: login.default_domain.clone(),
            })
            .await?;

        info!(
            username = %login.user.username,
            domain_id = ?login.default_domain.as_ref().map(|domain| domain.id),
            "signed in"
        );

        Ok(login)
    }

    /// Forgets the stored session.
    pub async fn logout(&self) -> AppResult<()> {
        self.credential_store.clear().await?;
        info!("signed out");

        Ok(())
    }

    /// Fetches the signed-in user's profile from the server.
    pub async fn profile(&self) -> AppResult<User> {
        let body: Value = self.client.get("/auth/profile").await?;

        decode_envelope(body).map(ApiResponse::into_data)
    }

    /// Updates the signed-in user's own profile.
    pub async fn update_profile(&self, input: &UpdateProfileInput) -> AppResult<User> {
        let body: Value = self.client.put("/auth/profile", input).await?;

        decode_envelope(body).map(ApiResponse::into_data)
    }

    /// Moves the session to another domain and stores the re-scoped token.
    pub async fn switch_domain(&self, domain_id: i64) -> AppResult<SwitchDomainData> {
        let Some(current) = self.credential_store.load().await? else {
            return Err(AppError::Unauthorized(
                "switching domain requires a signed-in session".to_owned(),
            ));
        };

        let body: Value = self
            .client
            .post("/auth/switch-domain", &SwitchDomainInput { domain_id })
            .await?;
        let switched = decode_envelope::<SwitchDomainData>(body)?.into_data();

        self.credential_store
            .commit(Credentials {
                token: switched.token.clone(),
                user: current.user,
                domain: Some(switched.current_domain.clone()),
            })
            .await?;

        info!(domain_id = switched.current_domain.id, "switched domain");

        Ok(switched)
    }

    /// Returns the user snapshot cached at sign-in.
    pub async fn stored_user(&self) -> AppResult<Option<User>> {
        Ok(self
            .credential_store
            .load()
            .await?
            .map(|credentials| credentials.user))
    }

    /// Returns the domain the session is scoped to.
    pub async fn stored_domain(&self) -> AppResult<Option<Domain>> {
        Ok(self
            .credential_store
            .load()
            .await?
            .and_then(|credentials| credentials.domain))
    }

    /// Returns whether a token is stored.
    pub async fn is_authenticated(&self) -> AppResult<bool> {
        Ok(self.credential_store.token().await?.is_some())
    }

    /// Returns whether the stored user's role is one of `allowed_roles`.
    pub async fn has_role(&self, allowed_roles: &[&str]) -> AppResult<bool> {
        Ok(self
            .stored_user()
            .await?
            .is_some_and(|user| user.has_role(allowed_roles)))
    }
}
