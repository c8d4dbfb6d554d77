use serde::{Deserialize, Serialize};

use crate::filter::{ListFilter, QueryPair, pair};
use crate::organization::{Domain, DivisionPreview, PermitType};
use crate::user::UserPreview;

/// Issued permit tracked for renewal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permit {
    /// Permit identifier.
    pub id: i64,
    /// Owning domain.
    pub domain_id: i64,
    /// Division, when the permit is division-specific.
    #[serde(default)]
    pub division_id: Option<i64>,
    /// Permit category.
    pub permit_type_id: i64,
    /// Display name.
    pub name: String,
    /// Application type (new, renewal, ...).
    pub application_type: String,
    /// Number printed on the permit.
    pub permit_no: String,
    /// Start of validity (ISO-8601).
    pub effective_date: String,
    /// End of validity (ISO-8601).
    pub expiry_date: String,
    /// Free-form validity term.
    #[serde(default)]
    pub effective_term: Option<String>,
    /// User responsible for the permit.
    #[serde(default)]
    pub responsible_person_id: Option<i64>,
    /// User responsible for the permit documents.
    #[serde(default)]
    pub responsible_doc_person_id: Option<i64>,
    /// Supporting document name.
    #[serde(default)]
    pub doc_name: Option<String>,
    /// Supporting document number.
    #[serde(default)]
    pub doc_number: Option<String>,
    /// Lifecycle status label.
    pub status: String,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO-8601).
    #[serde(default)]
    pub updated_at: String,
    /// Owning domain preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    /// Division preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<DivisionPreview>,
    /// Permit type preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit_type: Option<PermitType>,
    /// Responsible person preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<UserPreview>,
    /// Responsible document person preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_doc_person: Option<UserPreview>,
}

/// Create and update payload for permits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitInput {
    /// Owning domain.
    pub domain_id: i64,
    /// Division.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_id: Option<i64>,
    /// Permit category.
    pub permit_type_id: i64,
    /// Display name.
    pub name: String,
    /// Application type.
    pub application_type: String,
    /// Number printed on the permit.
    pub permit_no: String,
    /// Start of validity (`YYYY-MM-DD`).
    pub effective_date: String,
    /// End of validity (`YYYY-MM-DD`).
    pub expiry_date: String,
    /// Free-form validity term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_term: Option<String>,
    /// Responsible user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_person_id: Option<i64>,
    /// Responsible document user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_doc_person_id: Option<i64>,
    /// Supporting document name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_name: Option<String>,
    /// Supporting document number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_number: Option<String>,
    /// Lifecycle status label.
    pub status: String,
}

/// Permit list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermitFilter {
    /// Owning domain.
    pub domain_id: Option<i64>,
    /// Division.
    pub division_id: Option<i64>,
    /// Permit category.
    pub permit_type_id: Option<i64>,
    /// Name match.
    pub name: Option<String>,
    /// Application type.
    pub application_type: Option<String>,
    /// Permit number match.
    pub permit_no: Option<String>,
    /// Responsible person name match.
    pub responsible_person: Option<String>,
    /// Lifecycle status label.
    pub status: Option<String>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListFilter for PermitFilter {
    fn query_pairs(&self) -> Vec<QueryPair> {
        vec![
            pair("domain_id", self.domain_id.as_ref()),
            pair("division_id", self.division_id.as_ref()),
            pair("permit_type_id", self.permit_type_id.as_ref()),
            pair("name", self.name.as_ref()),
            pair("application_type", self.application_type.as_ref()),
            pair("permit_no", self.permit_no.as_ref()),
            pair("responsible_person", self.responsible_person.as_ref()),
            pair("status", self.status.as_ref()),
            pair("page", self.page.as_ref()),
            pair("limit", self.limit.as_ref()),
        ]
    }
}

/// Free-text permit search over name and permit number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermitSearch {
    /// Search term; the server rejects an empty one.
    pub q: String,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListFilter for PermitSearch {
    fn query_pairs(&self) -> Vec<QueryPair> {
        vec![
            pair("q", Some(&self.q)),
            pair("page", self.page.as_ref()),
            pair("limit", self.limit.as_ref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{Permit, PermitFilter};
    use crate::filter::ListFilter;

    #[test]
    fn permit_filter_lists_fields_in_declaration_order() {
        let keys: Vec<&str> = PermitFilter::default()
            .query_pairs()
            .into_iter()
            .map(|(key, _)| key)
            .collect();

        assert_eq!(
            keys,
            vec![
                "domain_id",
                "division_id",
                "permit_type_id",
                "name",
                "application_type",
                "permit_no",
                "responsible_person",
                "status",
                "page",
                "limit",
            ]
        );
    }

    #[test]
    fn permit_decodes_embedded_previews() {
        let permit: Result<Permit, _> = serde_json::from_value(serde_json::json!({
            "id": 11,
            "domain_id": 1,
            "division_id": null,
            "permit_type_id": 2,
            "name": "Boiler operation",
            "application_type": "renewal",
            "permit_no": "BO-2025-01",
            "effective_date": "2025-01-01T00:00:00Z",
            "expiry_date": "2026-01-01T00:00:00Z",
            "status": "active",
            "responsible_person": {
                "id": 5,
                "role_id": 2,
                "username": "dina",
                "email": "dina@example.com",
                "full_name": "Dina Putri",
                "is_active": true
            }
        }));

        let person = permit.ok().and_then(|value| value.responsible_person);
        assert_eq!(person.map(|value| value.username), Some("dina".to_owned()));
    }
}
