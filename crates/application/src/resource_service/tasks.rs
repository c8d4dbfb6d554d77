use http::Method;
use permitdesk_core::{AppResult, NonEmptyString};
use permitdesk_domain::{
    ApprovalInput, Task, TaskCreateInput, TaskFilter, TaskReasonInput, TaskReviewInput,
    TaskRevisionInput, TaskStatusChange, TaskTypeChange, TaskUpdateInput,
};

use super::{ResourceClient, Tasks};
use crate::envelope::ApiResponse;
use crate::multipart::{Attachment, MultipartForm};
use crate::query::with_query;

/// Form field carrying uploaded task files.
pub const TASK_FILES_FIELD: &str = "files";

/// Form field listing attachment ids to remove on update.
pub const DELETED_FILE_IDS_FIELD: &str = "deleted_file_ids[]";

impl ResourceClient<Tasks> {
    /// Lists tasks still in the approval pipeline.
    pub async fn get_all_requests(&self, filter: &TaskFilter) -> AppResult<ApiResponse<Vec<Task>>> {
        self.fetch_list_envelope(&with_query("/task-requests", filter))
            .await
    }

    /// Fetches one task by its human-readable code.
    pub async fn get_by_code(&self, code: &str) -> AppResult<Task> {
        let code = NonEmptyString::new("code", code)?;

        self.fetch_data(&format!("/tasks/code/{}", code.as_str()))
            .await
    }

    /// Creates a task with uploaded files.
    pub async fn create_with_files(
        &self,
        payload: &TaskCreateInput,
        files: &[Attachment],
    ) -> AppResult<Task> {
        let form = with_files(MultipartForm::from_payload(payload)?, files);

        self.send_form_data(Method::POST, "/tasks", form).await
    }

    /// Updates a task, uploading new files and removing the listed ones.
    pub async fn update_with_files(
        &self,
        task_id: i64,
        payload: &TaskUpdateInput,
        files: &[Attachment],
        deleted_file_ids: &[i64],
    ) -> AppResult<Task> {
        let form = deleted_file_ids.iter().fold(
            with_files(MultipartForm::from_payload(payload)?, files),
            |form, id| form.text(DELETED_FILE_IDS_FIELD, id.to_string()),
        );

        self.send_form_data(Method::PUT, &format!("/tasks/{task_id}"), form)
            .await
    }

    /// Moves a task to another work status.
    pub async fn change_status(&self, task_id: i64, change: &TaskStatusChange) -> AppResult<()> {
        self.task_action(task_id, "change-status", change).await
    }

    /// Reclassifies a task.
    pub async fn change_type(&self, task_id: i64, change: &TaskTypeChange) -> AppResult<()> {
        self.task_action(task_id, "change-type", change).await
    }

    /// Submits the before and after descriptions for review, with evidence files.
    pub async fn in_review(
        &self,
        task_id: i64,
        review: &TaskReviewInput,
        files: &[Attachment],
    ) -> AppResult<()> {
        self.task_form_action(task_id, "in-review", review, files)
            .await
    }

    /// Records why a task is on hold.
    pub async fn set_reason(&self, task_id: i64, reason: &TaskReasonInput) -> AppResult<()> {
        self.task_action(task_id, "set-reason", reason).await
    }

    /// Sends a task back with revision notes and optional files.
    pub async fn set_revision(
        &self,
        task_id: i64,
        revision: &TaskRevisionInput,
        files: &[Attachment],
    ) -> AppResult<()> {
        self.task_form_action(task_id, "set-revision", revision, files)
            .await
    }

    /// Approves one step of a task's approval chain.
    pub async fn approve(
        &self,
        task_id: i64,
        approval_id: i64,
        input: &ApprovalInput,
    ) -> AppResult<()> {
        self.approval_action(task_id, approval_id, "approve", input)
            .await
    }

    /// Rejects one step of a task's approval chain.
    pub async fn reject(
        &self,
        task_id: i64,
        approval_id: i64,
        input: &ApprovalInput,
    ) -> AppResult<()> {
        self.approval_action(task_id, approval_id, "reject", input)
            .await
    }

    async fn task_action<B>(&self, task_id: i64, action: &str, body: &B) -> AppResult<()>
    where
        B: serde::Serialize,
    {
        self.send_unit(Method::POST, &format!("/tasks/{task_id}/{action}"), Some(body))
            .await
    }

    async fn task_form_action<B>(
        &self,
        task_id: i64,
        action: &str,
        body: &B,
        files: &[Attachment],
    ) -> AppResult<()>
    where
        B: serde::Serialize,
    {
        let form = with_files(MultipartForm::from_payload(body)?, files);

        self.send_form_unit(Method::POST, &format!("/tasks/{task_id}/{action}"), form)
            .await
    }

    async fn approval_action(
        &self,
        task_id: i64,
        approval_id: i64,
        action: &str,
        input: &ApprovalInput,
    ) -> AppResult<()> {
        self.send_unit(
            Method::POST,
            &format!("/tasks/{task_id}/approvals/{approval_id}/{action}"),
            Some(input),
        )
        .await
    }
}

fn with_files(form: MultipartForm, files: &[Attachment]) -> MultipartForm {
    files
        .iter()
        .cloned()
        .fold(form, |form, file| form.file(TASK_FILES_FIELD, file))
}
