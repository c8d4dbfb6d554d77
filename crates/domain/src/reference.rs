//! Lookup references and their categories.

use serde::{Deserialize, Serialize};

use crate::filter::{ListFilter, QueryPair, pair};

/// Application module that owns reference categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePreview {
    /// Module identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// Group of lookup values within a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCategory {
    /// Category identifier.
    pub id: i64,
    /// Owning module.
    pub module_id: i64,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the category is selectable.
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO-8601).
    #[serde(default)]
    pub updated_at: String,
    /// Owning module preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModulePreview>,
}

/// Create and update payload for reference categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCategoryInput {
    /// Owning module.
    pub module_id: i64,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Activation flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Reference category list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceCategoryFilter {
    /// Owning module.
    pub module_id: Option<i64>,
    /// Name match.
    pub name: Option<String>,
    /// Activation flag.
    pub is_active: Option<bool>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListFilter for ReferenceCategoryFilter {
    fn query_pairs(&self) -> Vec<QueryPair> {
        vec![
            pair("module_id", self.module_id.as_ref()),
            pair("name", self.name.as_ref()),
            pair("is_active", self.is_active.as_ref()),
            pair("page", self.page.as_ref()),
            pair("limit", self.limit.as_ref()),
        ]
    }
}

/// Lookup value such as a task priority or project status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Reference identifier, used as workflow ids by tasks.
    pub id: i64,
    /// Owning category.
    pub reference_category_id: i64,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the value is selectable.
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO-8601).
    #[serde(default)]
    pub updated_at: String,
    /// Owning category preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_category: Option<ReferenceCategory>,
}

/// Create and update payload for references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceInput {
    /// Owning category.
    pub reference_category_id: i64,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Activation flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Reference list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceFilter {
    /// Owning category.
    pub reference_category_id: Option<i64>,
    /// Owning module, through the category.
    pub module_id: Option<i64>,
    /// Name match.
    pub name: Option<String>,
    /// Activation flag.
    pub is_active: Option<bool>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListFilter for ReferenceFilter {
    fn query_pairs(&self) -> Vec<QueryPair> {
        vec![
            pair("reference_category_id", self.reference_category_id.as_ref()),
            pair("module_id", self.module_id.as_ref()),
            pair("name", self.name.as_ref()),
            pair("is_active", self.is_active.as_ref()),
            pair("page", self.page.as_ref()),
            pair("limit", self.limit.as_ref()),
        ]
    }
}
