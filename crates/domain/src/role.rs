use serde::{Deserialize, Serialize};

use crate::filter::{ListFilter, QueryPair, pair};

/// Access role granted to users and menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role identifier.
    pub id: i64,
    /// Short unique code.
    pub code: String,
    /// Display name, also used for role checks.
    pub name: String,
    /// Module the role belongs to (`Permit` or `Ticketing`).
    #[serde(default)]
    pub category: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO-8601).
    #[serde(default)]
    pub updated_at: String,
}

/// Create and update payload for roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleInput {
    /// Short unique code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Module the role belongs to.
    pub category: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Role list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleFilter {
    /// Code match.
    pub code: Option<String>,
    /// Name match.
    pub name: Option<String>,
    /// Module category.
    pub category: Option<String>,
    /// Activation flag.
    pub is_active: Option<bool>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListFilter for RoleFilter {
    fn query_pairs(&self) -> Vec<QueryPair> {
        vec![
            pair("code", self.code.as_ref()),
            pair("name", self.name.as_ref()),
            pair("category", self.category.as_ref()),
            pair("is_active", self.is_active.as_ref()),
            pair("page", self.page.as_ref()),
            pair("limit", self.limit.as_ref()),
        ]
    }
}

/// Abbreviated role attached to menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePreview {
    /// Role identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Short code.
    #[serde(default)]
    pub code: String,
}
