use http::Method;
use permitdesk_core::AppResult;
use permitdesk_domain::{Project, ProjectStatusChange, User};

use super::{Projects, ResourceClient};

impl ResourceClient<Projects> {
    /// Lists the projects of one domain.
    pub async fn get_by_domain_id(&self, domain_id: i64) -> AppResult<Vec<Project>> {
        self.fetch_list(&format!("/domains/{domain_id}/projects"))
            .await
    }

    /// Lists the projects a user is a member of.
    pub async fn get_by_user_id(&self, user_id: i64) -> AppResult<Vec<Project>> {
        self.fetch_list(&format!("/users/{user_id}/projects")).await
    }

    /// Lists the members of one project.
    pub async fn users(&self, project_id: i64) -> AppResult<Vec<User>> {
        self.fetch_list(&format!("/projects/{project_id}/users"))
            .await
    }

    /// Moves a project to another lifecycle status.
    pub async fn change_status(
        &self,
        project_id: i64,
        change: &ProjectStatusChange,
    ) -> AppResult<Project> {
        self.send_data(
            Method::POST,
            &format!("/projects/{project_id}/change-status"),
            Some(change),
        )
        .await
    }
}
