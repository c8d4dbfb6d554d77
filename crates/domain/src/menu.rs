use serde::{Deserialize, Serialize};

use crate::filter::{ListFilter, QueryPair, pair};
use crate::role::RolePreview;

/// Navigation entry visible to a set of roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    /// Menu identifier.
    pub id: i64,
    /// Label.
    pub name: String,
    /// Route path.
    pub path: String,
    /// Icon name.
    #[serde(default)]
    pub icon: Option<String>,
    /// Parent entry for nested menus.
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// Sort position among siblings.
    #[serde(default)]
    pub order_index: i32,
    /// Whether the entry is shown.
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO-8601).
    #[serde(default)]
    pub updated_at: String,
    /// Roles allowed to see the entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RolePreview>,
    /// Nested entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Menu>,
}

/// Create and update payload for menus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuInput {
    /// Label.
    pub name: String,
    /// Route path.
    pub path: String,
    /// Icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Parent entry; `None` places the entry at the top level.
    pub parent_id: Option<i64>,
    /// Sort position among siblings.
    pub order_index: i32,
    /// Roles allowed to see the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<i64>>,
}

/// Menu list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    /// Label match.
    pub name: Option<String>,
    /// Path match.
    pub path: Option<String>,
    /// Visibility flag.
    pub is_active: Option<bool>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListFilter for MenuFilter {
    fn query_pairs(&self) -> Vec<QueryPair> {
        vec![
            pair("name", self.name.as_ref()),
            pair("path", self.path.as_ref()),
            pair("is_active", self.is_active.as_ref()),
            pair("page", self.page.as_ref()),
            pair("limit", self.limit.as_ref()),
        ]
    }
}

/// Role assignment payload for one menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRoleAssignment {
    /// Roles replacing the current assignment.
    pub role_ids: Vec<i64>,
}
