use permitdesk_core::{AppResult, NonEmptyString};
use permitdesk_domain::{Permit, PermitSearch};

use super::{Permits, ResourceClient};
use crate::envelope::ApiResponse;
use crate::query::with_query;

impl ResourceClient<Permits> {
    /// Searches permits by name or permit number.
    pub async fn search(&self, search: &PermitSearch) -> AppResult<ApiResponse<Vec<Permit>>> {
        NonEmptyString::new("q", search.q.as_str())?;

        self.fetch_list_envelope(&with_query("/permits/search", search))
            .await
    }
}
