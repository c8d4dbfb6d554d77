//! Task records and the approval workflow reference ids.

use serde::{Deserialize, Serialize};

use crate::filter::{ListFilter, QueryPair, pair};

/// Id and name of a row in the references table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePreview {
    /// Reference identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// Minimal user attached to tasks and approvals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBasic {
    /// User identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
}

/// Project summary embedded in tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPreview {
    /// Project identifier.
    pub id: i64,
    /// Short code.
    pub code: String,
    /// Display name.
    pub name: String,
}

/// Work item raised inside a project and routed through approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier.
    pub id: i64,
    /// Owning domain.
    pub domain_id: i64,
    /// Owning project.
    pub project_id: i64,
    /// Human-readable code, unique per task.
    pub code: String,
    /// Short title.
    pub title: String,
    /// Request description.
    #[serde(default)]
    pub description: Option<String>,
    /// State before the change, filled during review.
    #[serde(default)]
    pub description_before: Option<String>,
    /// State after the change, filled during review.
    #[serde(default)]
    pub description_after: Option<String>,
    /// Reason recorded for a hold.
    #[serde(default)]
    pub reason: Option<String>,
    /// Requested revision notes.
    #[serde(default)]
    pub revision: Option<String>,
    /// Whether the task is enabled.
    #[serde(default)]
    pub status: bool,
    /// Task status reference id.
    #[serde(default)]
    pub status_id: Option<i64>,
    /// Priority reference id.
    #[serde(default)]
    pub priority_id: Option<i64>,
    /// Type reference id.
    #[serde(default)]
    pub type_id: Option<i64>,
    /// Technology stack reference id.
    #[serde(default)]
    pub stack_id: Option<i64>,
    /// Assignee.
    #[serde(default)]
    pub assigned_id: Option<i64>,
    /// Author.
    #[serde(default)]
    pub created_by: i64,
    /// Last editor.
    #[serde(default)]
    pub updated_by: Option<i64>,
    /// Final approver.
    #[serde(default)]
    pub approved_by: Option<i64>,
    /// User that completed the work.
    #[serde(default)]
    pub completed_by: Option<i64>,
    /// User that closed the task.
    #[serde(default)]
    pub done_by: Option<i64>,
    /// Approval status reference id.
    #[serde(default)]
    pub approval_status_id: Option<i64>,
    /// Planned start (ISO-8601).
    #[serde(default)]
    pub start_date: Option<String>,
    /// Due date (ISO-8601).
    #[serde(default)]
    pub due_date: Option<String>,
    /// Completion date (ISO-8601).
    #[serde(default)]
    pub completed_date: Option<String>,
    /// Approval date (ISO-8601).
    #[serde(default)]
    pub approval_date: Option<String>,
    /// Close date (ISO-8601).
    #[serde(default)]
    pub done_at: Option<String>,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO-8601).
    #[serde(default)]
    pub updated_at: String,
    /// Project preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectPreview>,
    /// Status preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_task: Option<ReferencePreview>,
    /// Priority preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<ReferencePreview>,
    /// Type preview.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub task_type: Option<ReferencePreview>,
    /// Stack preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<ReferencePreview>,
    /// Assignee preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<UserBasic>,
    /// Author preview.
    #[serde(
        default,
        rename = "created_by_user",
        alias = "creator",
        skip_serializing_if = "Option::is_none"
    )]
    pub creator: Option<UserBasic>,
    /// Approval status preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<ReferencePreview>,
    /// Attached files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub task_files: Vec<TaskFile>,
    /// Approval chain in sequence order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub approval_tasks: Vec<ApprovalTask>,
}

impl Task {
    /// Returns the typed approval status when the id is a known one.
    #[must_use]
    pub fn approval_state(&self) -> Option<ApprovalStatus> {
        self.approval_status_id
            .and_then(ApprovalStatus::from_reference_id)
    }

    /// Returns the typed task status when the id is a known one.
    #[must_use]
    pub fn workflow_status(&self) -> Option<TaskStatus> {
        self.status_id.and_then(TaskStatus::from_reference_id)
    }

    /// Returns the first approval step that still waits for a decision.
    #[must_use]
    pub fn pending_approval(&self) -> Option<&ApprovalTask> {
        self.approval_tasks
            .iter()
            .filter(|approval| {
                matches!(
                    approval.approval_status_id.and_then(ApprovalStatus::from_reference_id),
                    Some(ApprovalStatus::Waiting | ApprovalStatus::PendingManager)
                )
            })
            .min_by_key(|approval| approval.sequence)
    }
}

/// File attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFile {
    /// File identifier.
    pub id: i64,
    /// Owning task.
    pub task_id: i64,
    /// Original file name.
    pub file_name: String,
    /// Server storage path.
    pub file_path: String,
    /// Human-readable size.
    #[serde(default)]
    pub file_size: Option<String>,
    /// MIME type.
    #[serde(default)]
    pub file_type: Option<String>,
    /// Attachment stage reference id.
    #[serde(default)]
    pub task_file_type: Option<i64>,
    /// Whether the file is current.
    #[serde(default)]
    pub status: bool,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO-8601).
    #[serde(default)]
    pub updated_at: String,
}

/// One step in a task's approval chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalTask {
    /// Approval step identifier.
    pub id: i64,
    /// Owning task.
    pub task_id: i64,
    /// Position in the chain.
    pub sequence: i32,
    /// Approver.
    #[serde(default)]
    pub approved_by: Option<i64>,
    /// Decision reference id.
    #[serde(default)]
    pub approval_status_id: Option<i64>,
    /// Decision date (ISO-8601).
    #[serde(default)]
    pub approval_date: Option<String>,
    /// Approver's note.
    #[serde(default)]
    pub note: Option<String>,
    /// Whether the step is current.
    #[serde(default)]
    pub status: bool,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO-8601).
    #[serde(default)]
    pub updated_at: String,
    /// Assigned approver preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver: Option<UserBasic>,
    /// Deciding user preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by_user: Option<UserBasic>,
    /// Decision preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<ReferencePreview>,
}

/// Task list filter shared by `/tasks` and `/task-requests`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Free-text search over code and title.
    pub search: Option<String>,
    /// Owning project.
    pub project_id: Option<i64>,
    /// Task status reference id.
    pub status_id: Option<i64>,
    /// Approval status reference id.
    pub approval_status_id: Option<i64>,
    /// Assignee.
    pub assigned_id: Option<i64>,
    /// Lower bound on creation date (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Upper bound on creation date (`YYYY-MM-DD`).
    pub end_date: Option<String>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListFilter for TaskFilter {
    fn query_pairs(&self) -> Vec<QueryPair> {
        vec![
            pair("search", self.search.as_ref()),
            pair("project_id", self.project_id.as_ref()),
            pair("status_id", self.status_id.as_ref()),
            pair("approval_status_id", self.approval_status_id.as_ref()),
            pair("assigned_id", self.assigned_id.as_ref()),
            pair("start_date", self.start_date.as_ref()),
            pair("end_date", self.end_date.as_ref()),
            pair("page", self.page.as_ref()),
            pair("limit", self.limit.as_ref()),
        ]
    }
}

/// Create payload for tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCreateInput {
    /// Owning project.
    pub project_id: i64,
    /// Short title.
    pub title: String,
    /// Request description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Priority reference id.
    pub priority_id: i64,
    /// Technology stack reference id.
    pub stack_id: i64,
    /// Assignee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_id: Option<i64>,
    /// Due date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Update payload for tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdateInput {
    /// Owning project.
    pub project_id: i64,
    /// Short title.
    pub title: String,
    /// Request description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// State before the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_before: Option<String>,
    /// State after the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_after: Option<String>,
    /// Priority reference id.
    pub priority_id: i64,
    /// Technology stack reference id.
    pub stack_id: i64,
    /// Type reference id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,
    /// Assignee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_id: Option<i64>,
    /// Due date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Status transition payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatusChange {
    /// Target task status reference id.
    pub status_id: i64,
}

impl From<TaskStatus> for TaskStatusChange {
    fn from(value: TaskStatus) -> Self {
        Self {
            status_id: value.reference_id(),
        }
    }
}

/// Type change payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTypeChange {
    /// Target type reference id.
    pub type_id: i64,
}

impl From<TaskType> for TaskTypeChange {
    fn from(value: TaskType) -> Self {
        Self {
            type_id: value.reference_id(),
        }
    }
}

/// Review submission payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskReviewInput {
    /// State before the change.
    pub description_before: String,
    /// State after the change.
    pub description_after: String,
}

/// Hold reason payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskReasonInput {
    /// Reason text.
    pub reason: String,
}

/// Revision request payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRevisionInput {
    /// Revision notes.
    pub revision: String,
}

/// Approve or reject payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalInput {
    /// Approver's note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Approval decision of a task or approval step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApprovalStatus {
    /// Waiting for the first approver.
    Waiting,
    /// Rejected.
    Reject,
    /// Approved.
    Approve,
    /// Waiting for the manager.
    PendingManager,
}

impl ApprovalStatus {
    /// Returns the references-table id for this value.
    #[must_use]
    pub const fn reference_id(self) -> i64 {
        match self {
            Self::Waiting => 20,
            Self::Reject => 21,
            Self::Approve => 22,
            Self::PendingManager => 23,
        }
    }

    /// Looks up the value for a references-table id.
    #[must_use]
    pub const fn from_reference_id(id: i64) -> Option<Self> {
        match id {
            20 => Some(Self::Waiting),
            21 => Some(Self::Reject),
            22 => Some(Self::Approve),
            23 => Some(Self::PendingManager),
            _ => None,
        }
    }
}

/// Work status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// Not started.
    ToDo,
    /// Paused with a reason.
    OnHold,
    /// In progress.
    OnProgress,
    /// Finished.
    Done,
    /// Waiting for review.
    InReview,
    /// Sent back for revision.
    Revision,
}

impl TaskStatus {
    /// Returns the references-table id for this value.
    #[must_use]
    pub const fn reference_id(self) -> i64 {
        match self {
            Self::ToDo => 1,
            Self::OnHold => 2,
            Self::OnProgress => 3,
            Self::Done => 4,
            Self::InReview => 37,
            Self::Revision => 39,
        }
    }

    /// Looks up the value for a references-table id.
    #[must_use]
    pub const fn from_reference_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::ToDo),
            2 => Some(Self::OnHold),
            3 => Some(Self::OnProgress),
            4 => Some(Self::Done),
            37 => Some(Self::InReview),
            39 => Some(Self::Revision),
            _ => None,
        }
    }
}

/// Kind of work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    /// Maintenance of existing systems.
    Maintenance,
    /// New development.
    Development,
}

impl TaskType {
    /// Returns the references-table id for this value.
    #[must_use]
    pub const fn reference_id(self) -> i64 {
        match self {
            Self::Maintenance => 24,
            Self::Development => 25,
        }
    }

    /// Looks up the value for a references-table id.
    #[must_use]
    pub const fn from_reference_id(id: i64) -> Option<Self> {
        match id {
            24 => Some(Self::Maintenance),
            25 => Some(Self::Development),
            _ => None,
        }
    }
}

/// Workflow stage a task file was attached at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskFileType {
    /// Attached at creation.
    Create,
    /// Attached as the before state during review.
    Before,
    /// Attached with a revision request.
    Revision,
}

impl TaskFileType {
    /// Returns the references-table id for this value.
    #[must_use]
    pub const fn reference_id(self) -> i64 {
        match self {
            Self::Create => 30,
            Self::Before => 31,
            Self::Revision => 38,
        }
    }

    /// Looks up the value for a references-table id.
    #[must_use]
    pub const fn from_reference_id(id: i64) -> Option<Self> {
        match id {
            30 => Some(Self::Create),
            31 => Some(Self::Before),
            38 => Some(Self::Revision),
            _ => None,
        }
    }
}
