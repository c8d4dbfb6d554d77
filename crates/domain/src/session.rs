//! Sign-in and domain switching payloads.

use permitdesk_core::AuthToken;
use serde::{Deserialize, Serialize};

use crate::organization::Domain;
use crate::role::Role;
use crate::user::User;

/// Sign-in request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginInput {
    /// Login name.
    pub username: String,
    /// Plain-text password, sent once over the transport.
    pub password: String,
    /// Domain to sign in to instead of the user's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<i64>,
}

impl std::fmt::Debug for LoginInput {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LoginInput")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("domain_id", &self.domain_id)
            .finish()
    }
}

/// Sign-in response data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    /// Bearer token for subsequent requests.
    pub token: AuthToken,
    /// Signed-in user.
    pub user: User,
    /// Domain the session starts in, when the user has one.
    #[serde(default, alias = "current_domain", skip_serializing_if = "Option::is_none")]
    pub default_domain: Option<Domain>,
}

/// Domain switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchDomainInput {
    /// Target domain.
    pub domain_id: i64,
}

/// Domain switch response data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchDomainData {
    /// Token scoped to the new domain.
    pub token: AuthToken,
    /// Domain now in effect.
    pub current_domain: Domain,
    /// Role held in the new domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::{LoginData, LoginInput};

    #[test]
    fn login_input_debug_hides_password() {
        let input = LoginInput {
            username: "ayu".to_owned(),
            password: "s3cret".to_owned(),
            domain_id: None,
        };

        let rendered = format!("{input:?}");
        assert!(rendered.contains("ayu"));
        assert!(!rendered.contains("s3cret"));
    }

    #[test]
    fn login_data_accepts_current_domain_alias() {
        let data: Result<LoginData, _> = serde_json::from_value(serde_json::json!({
            "token": "abc",
            "user": {
                "id": 1,
                "role_id": 1,
                "username": "ayu",
                "email": "ayu@example.com",
                "full_name": "Ayu Lestari"
            },
            "current_domain": {"id": 4, "code": "PLT", "name": "Plant"}
        }));

        let domain = data.ok().and_then(|value| value.default_domain);
        assert_eq!(domain.map(|value| value.id), Some(4));
    }
}
