//! User domain types and access helpers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::filter::{ListFilter, QueryPair, pair};
use crate::organization::Domain;
use crate::role::Role;

/// Back-office account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: i64,
    /// Primary role.
    pub role_id: i64,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Employee number.
    #[serde(default)]
    pub nip: Option<String>,
    /// Whether the account may sign in.
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO-8601).
    #[serde(default)]
    pub updated_at: String,
    /// Primary role preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Domains the user is assigned to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<Domain>,
}

impl User {
    /// Returns the user's domains without duplicates, in assignment order.
    #[must_use]
    pub fn accessible_domains(&self) -> Vec<&Domain> {
        let mut seen = HashSet::new();
        self.domains
            .iter()
            .filter(|domain| seen.insert(domain.id))
            .collect()
    }

    /// Returns whether the user may work inside the given domain.
    ///
    /// Accounts without domain assignments are administrators and may
    /// access every domain.
    #[must_use]
    pub fn can_access_domain(&self, domain_id: i64) -> bool {
        self.domains.is_empty() || self.domains.iter().any(|domain| domain.id == domain_id)
    }

    /// Returns the single assigned domain when the user has exactly one.
    #[must_use]
    pub fn single_domain_id(&self) -> Option<i64> {
        match self.accessible_domains().as_slice() {
            [domain] => Some(domain.id),
            _ => None,
        }
    }

    /// Returns whether the user's role name is one of `allowed_roles`.
    #[must_use]
    pub fn has_role(&self, allowed_roles: &[&str]) -> bool {
        self.role
            .as_ref()
            .is_some_and(|role| allowed_roles.contains(&role.name.as_str()))
    }
}

/// Abbreviated user attached to permits, tasks and approvals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreview {
    /// User identifier.
    pub id: i64,
    /// Primary role, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    /// Login name.
    pub username: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Whether the account may sign in.
    #[serde(default)]
    pub is_active: bool,
}

/// Create payload for users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    /// Primary role.
    pub role_id: i64,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Display name.
    pub full_name: String,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Employee number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nip: Option<String>,
    /// Activation flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Assigned domains; the server requires at least one.
    pub domain_ids: Vec<i64>,
}

/// Partial update payload for users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdateInput {
    /// Primary role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    /// Login name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Replacement password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Employee number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nip: Option<String>,
    /// Activation flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Replacement domain assignments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_ids: Option<Vec<i64>>,
}

/// User list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Assigned domain.
    pub domain_id: Option<i64>,
    /// Primary role.
    pub role_id: Option<i64>,
    /// Login name match.
    pub username: Option<String>,
    /// Email match.
    pub email: Option<String>,
    /// Display name match.
    pub full_name: Option<String>,
    /// Activation flag.
    pub is_active: Option<bool>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListFilter for UserFilter {
    fn query_pairs(&self) -> Vec<QueryPair> {
        vec![
            pair("domain_id", self.domain_id.as_ref()),
            pair("role_id", self.role_id.as_ref()),
            pair("username", self.username.as_ref()),
            pair("email", self.email.as_ref()),
            pair("full_name", self.full_name.as_ref()),
            pair("is_active", self.is_active.as_ref()),
            pair("page", self.page.as_ref()),
            pair("limit", self.limit.as_ref()),
        ]
    }
}

/// Password change payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordInput {
    /// Current password.
    pub old_password: String,
    /// Replacement password.
    pub new_password: String,
}

/// Self-service profile update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileInput {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Employee number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nip: Option<String>,
}

/// Domain assignment payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDomainInput {
    /// Domain to assign.
    pub domain_id: i64,
    /// Whether the domain becomes the user's default at sign-in.
    pub is_default: bool,
}
