//! Organisational structure: domains, divisions and permit types.

use serde::{Deserialize, Serialize};

use crate::filter::{ListFilter, QueryPair, pair};

/// Business domain (site or company unit) that scopes most records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Domain identifier.
    pub id: i64,
    /// Short unique code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the domain accepts new records.
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO-8601).
    #[serde(default)]
    pub updated_at: String,
}

/// Create and update payload for domains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainInput {
    /// Short unique code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Activation flag; the server defaults it to active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Domain list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainFilter {
    /// Code match.
    pub code: Option<String>,
    /// Name match.
    pub name: Option<String>,
    /// Activation flag.
    pub is_active: Option<bool>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListFilter for DomainFilter {
    fn query_pairs(&self) -> Vec<QueryPair> {
        vec![
            pair("code", self.code.as_ref()),
            pair("name", self.name.as_ref()),
            pair("is_active", self.is_active.as_ref()),
            pair("page", self.page.as_ref()),
            pair("limit", self.limit.as_ref()),
        ]
    }
}

/// Division inside a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    /// Division identifier.
    pub id: i64,
    /// Owning domain.
    pub domain_id: i64,
    /// Short code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO-8601).
    #[serde(default)]
    pub updated_at: String,
    /// Owning domain preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
}

/// Create and update payload for divisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionInput {
    /// Owning domain.
    pub domain_id: i64,
    /// Short code.
    pub code: String,
    /// Display name.
    pub name: String,
}

/// Division list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DivisionFilter {
    /// Owning domain.
    pub domain_id: Option<i64>,
    /// Code match.
    pub code: Option<String>,
    /// Name match.
    pub name: Option<String>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListFilter for DivisionFilter {
    fn query_pairs(&self) -> Vec<QueryPair> {
        vec![
            pair("domain_id", self.domain_id.as_ref()),
            pair("code", self.code.as_ref()),
            pair("name", self.name.as_ref()),
            pair("page", self.page.as_ref()),
            pair("limit", self.limit.as_ref()),
        ]
    }
}

/// Abbreviated division attached to permit types and permits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionPreview {
    /// Division identifier.
    pub id: i64,
    /// Owning domain, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<i64>,
    /// Short code.
    #[serde(default)]
    pub code: String,
    /// Display name.
    pub name: String,
}

/// Permit category with its default application rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitType {
    /// Permit type identifier.
    pub id: i64,
    /// Division responsible for this permit type.
    #[serde(default)]
    pub division_id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Risk classification.
    #[serde(default)]
    pub risk_point: Option<String>,
    /// Application type proposed when filing a new permit.
    #[serde(default)]
    pub default_application_type: Option<String>,
    /// Validity period proposed when filing a new permit.
    #[serde(default)]
    pub default_validity_period: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO-8601).
    #[serde(default)]
    pub updated_at: String,
    /// Responsible division preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<DivisionPreview>,
}

/// Create and update payload for permit types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitTypeInput {
    /// Responsible division.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Risk classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_point: Option<String>,
    /// Default application type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_application_type: Option<String>,
    /// Default validity period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_validity_period: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Permit type list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermitTypeFilter {
    /// Responsible division.
    pub division_id: Option<i64>,
    /// Name match.
    pub name: Option<String>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListFilter for PermitTypeFilter {
    fn query_pairs(&self) -> Vec<QueryPair> {
        vec![
            pair("division_id", self.division_id.as_ref()),
            pair("name", self.name.as_ref()),
            pair("page", self.page.as_ref()),
            pair("limit", self.limit.as_ref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{Domain, DomainInput, PermitType};

    #[test]
    fn domain_accepts_null_description() {
        let domain: Result<Domain, _> = serde_json::from_value(serde_json::json!({
            "id": 3,
            "code": "HQ",
            "name": "Head Office",
            "description": null,
            "is_active": true,
            "created_at": "2025-01-02T03:04:05Z",
            "updated_at": "2025-01-02T03:04:05Z"
        }));

        assert!(matches!(domain, Ok(Domain { id: 3, description: None, .. })));
    }

    #[test]
    fn domain_input_omits_unset_optionals() {
        let payload = serde_json::to_value(DomainInput {
            code: "HQ".to_owned(),
            name: "Head Office".to_owned(),
            ..DomainInput::default()
        })
        .unwrap_or_default();

        assert_eq!(payload, serde_json::json!({"code": "HQ", "name": "Head Office"}));
    }

    #[test]
    fn permit_type_reads_nested_division_preview() {
        let permit_type: Result<PermitType, _> = serde_json::from_value(serde_json::json!({
            "id": 9,
            "division_id": 4,
            "name": "Hot work",
            "division": {"id": 4, "name": "Maintenance", "code": "MNT"}
        }));

        let division = permit_type.ok().and_then(|value| value.division);
        assert_eq!(division.map(|value| value.code), Some("MNT".to_owned()));
    }
}
