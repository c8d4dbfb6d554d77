//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod filter;
mod menu;
mod notification;
mod organization;
mod permit;
mod project;
mod reference;
mod role;
mod session;
mod task;
mod user;

pub use filter::{ListFilter, Pagination, QueryPair, pair};
pub use menu::{Menu, MenuFilter, MenuInput, MenuRoleAssignment};
pub use notification::{MarkAsReadInput, Notification, NotificationKind, PermitPreview, UnreadCount};
pub use organization::{
    Division, DivisionFilter, DivisionInput, DivisionPreview, Domain, DomainFilter, DomainInput,
    PermitType, PermitTypeFilter, PermitTypeInput,
};
pub use permit::{Permit, PermitFilter, PermitInput, PermitSearch};
pub use project::{
    Project, ProjectCreateInput, ProjectFilter, ProjectStatusChange, ProjectUpdateInput,
};
pub use reference::{
    ModulePreview, Reference, ReferenceCategory, ReferenceCategoryFilter, ReferenceCategoryInput,
    ReferenceFilter, ReferenceInput,
};
pub use role::{Role, RoleFilter, RoleInput, RolePreview};
pub use session::{LoginData, LoginInput, SwitchDomainData, SwitchDomainInput};
pub use task::{
    ApprovalInput, ApprovalStatus, ApprovalTask, ProjectPreview, ReferencePreview, Task,
    TaskCreateInput, TaskFile, TaskFileType, TaskFilter, TaskReasonInput, TaskReviewInput,
    TaskRevisionInput, TaskStatus, TaskStatusChange, TaskType, TaskTypeChange, TaskUpdateInput,
    UserBasic,
};
pub use user::{
    ChangePasswordInput, UpdateProfileInput, User, UserDomainInput, UserFilter, UserInput,
    UserPreview, UserUpdateInput,
};
