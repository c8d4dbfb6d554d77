use http::Method;
use permitdesk_core::AppResult;
use permitdesk_domain::{ChangePasswordInput, UserDomainInput};
use serde_json::{Value, json};

use super::{ResourceClient, Users};

impl ResourceClient<Users> {
    /// Changes a user's password after verifying the current one.
    pub async fn change_password(
        &self,
        user_id: i64,
        input: &ChangePasswordInput,
    ) -> AppResult<()> {
        self.send_unit(
            Method::POST,
            &format!("/users/{user_id}/change-password"),
            Some(input),
        )
        .await
    }

    /// Assigns a domain to a user.
    pub async fn add_domain(&self, user_id: i64, input: &UserDomainInput) -> AppResult<()> {
        self.send_unit(Method::POST, &format!("/users/{user_id}/domains"), Some(input))
            .await
    }

    /// Removes a domain assignment.
    pub async fn remove_domain(&self, user_id: i64, domain_id: i64) -> AppResult<()> {
        self.send_unit(
            Method::DELETE,
            &format!("/users/{user_id}/domains/{domain_id}"),
            None::<&Value>,
        )
        .await
    }

    /// Makes an assigned domain the user's default at sign-in.
    pub async fn set_default_domain(&self, user_id: i64, domain_id: i64) -> AppResult<()> {
        self.send_unit(
            Method::PUT,
            &format!("/users/{user_id}/domains/{domain_id}/set-default"),
            Some(&json!({})),
        )
        .await
    }
}
