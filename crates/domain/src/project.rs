use serde::{Deserialize, Serialize};

use crate::filter::{ListFilter, QueryPair, pair};
use crate::organization::Domain;
use crate::task::ReferencePreview;
use crate::user::User;

/// Project grouping tasks inside a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier.
    pub id: i64,
    /// Owning domain.
    pub domain_id: i64,
    /// Display name.
    pub name: String,
    /// Short code used in task codes.
    pub code: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the project is enabled.
    #[serde(default)]
    pub status: bool,
    /// Lifecycle reference id.
    #[serde(default)]
    pub project_status_id: Option<i64>,
    /// Start timestamp (ISO-8601).
    #[serde(default)]
    pub started_at: Option<String>,
    /// Finish timestamp (ISO-8601).
    #[serde(default)]
    pub finished_at: Option<String>,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO-8601).
    #[serde(default)]
    pub updated_at: String,
    /// Owning domain preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    /// Lifecycle reference preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_status: Option<ReferencePreview>,
    /// Members.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,
}

/// Create payload for projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCreateInput {
    /// Owning domain.
    pub domain_id: i64,
    /// Display name.
    pub name: String,
    /// Short code; generated by the server when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Enabled flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    /// Lifecycle reference id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_status_id: Option<i64>,
    /// Initial members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<i64>>,
}

/// Partial update payload for projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUpdateInput {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Enabled flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    /// Lifecycle reference id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_status_id: Option<i64>,
    /// Replacement members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<i64>>,
}

/// Project lifecycle transition payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStatusChange {
    /// Target lifecycle reference id.
    pub status_id: i64,
}

/// Project list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Owning domain.
    pub domain_id: Option<i64>,
    /// Lifecycle reference id.
    pub project_status_id: Option<i64>,
    /// Name match.
    pub name: Option<String>,
    /// Code match.
    pub code: Option<String>,
    /// Enabled flag.
    pub status: Option<bool>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListFilter for ProjectFilter {
    fn query_pairs(&self) -> Vec<QueryPair> {
        vec![
            pair("domain_id", self.domain_id.as_ref()),
            pair("project_status_id", self.project_status_id.as_ref()),
            pair("name", self.name.as_ref()),
            pair("code", self.code.as_ref()),
            pair("status", self.status.as_ref()),
            pair("page", self.page.as_ref()),
            pair("limit", self.limit.as_ref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{ProjectCreateInput, ProjectFilter};
    use crate::filter::ListFilter;

    #[test]
    fn disabled_status_is_still_sent() {
        let pairs = ProjectFilter {
            status: Some(false),
            ..ProjectFilter::default()
        }
        .query_pairs();

        assert!(pairs.contains(&("status", Some("false".to_owned()))));
    }

    #[test]
    fn create_input_skips_generated_code() {
        let payload = serde_json::to_value(ProjectCreateInput {
            domain_id: 1,
            name: "Plant upgrade".to_owned(),
            ..ProjectCreateInput::default()
        })
        .unwrap_or_default();

        assert_eq!(
            payload,
            serde_json::json!({"domain_id": 1, "name": "Plant upgrade"})
        );
    }
}
