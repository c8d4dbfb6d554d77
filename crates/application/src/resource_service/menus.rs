use http::Method;
use permitdesk_core::AppResult;
use permitdesk_domain::{Menu, MenuRoleAssignment};

use super::{Menus, ResourceClient};

impl ResourceClient<Menus> {
    /// Lists the menu tree visible to the signed-in user.
    pub async fn user_menus(&self) -> AppResult<Vec<Menu>> {
        self.fetch_list("/menus/user").await
    }

    /// Replaces the roles allowed to see a menu.
    pub async fn assign_roles(&self, menu_id: i64, role_ids: &[i64]) -> AppResult<()> {
        let assignment = MenuRoleAssignment {
            role_ids: role_ids.to_vec(),
        };

        self.send_unit(
            Method::POST,
            &format!("/menus/{menu_id}/roles"),
            Some(&assignment),
        )
        .await
    }
}
