use permitdesk_core::AppResult;
use permitdesk_domain::{Reference, ReferenceCategory};

use super::{ReferenceCategories, References, ResourceClient};

impl ResourceClient<References> {
    /// Lists the references in one category.
    pub async fn get_by_category_id(&self, category_id: i64) -> AppResult<Vec<Reference>> {
        self.fetch_list(&format!("/reference-categories/{category_id}/references"))
            .await
    }

    /// Lists the references of every category in one module.
    pub async fn get_by_module_id(&self, module_id: i64) -> AppResult<Vec<Reference>> {
        self.fetch_list(&format!("/modules/{module_id}/references"))
            .await
    }
}

impl ResourceClient<ReferenceCategories> {
    /// Lists the categories of one module.
    pub async fn get_by_module_id(&self, module_id: i64) -> AppResult<Vec<ReferenceCategory>> {
        self.fetch_list(&format!("/modules/{module_id}/categories"))
            .await
    }
}
