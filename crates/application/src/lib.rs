//! Application services and ports.

#![forbid(unsafe_code)]

mod api_services;
mod auth_gate;
mod auth_service;
mod credential_ports;
mod envelope;
mod http_ports;
mod multipart;
mod query;
mod request_client;
mod resource_service;

#[cfg(test)]
mod test_support;

pub use api_services::ApiServices;
pub use auth_gate::{AuthGate, GateSession, GateState, HOME_ROUTE, SIGN_IN_ROUTE, decide};
pub use auth_service::AuthService;
pub use credential_ports::{CredentialStore, Credentials};
pub use envelope::{ApiResponse, PageMeta, decode_envelope, decode_list_envelope, error_message};
pub use http_ports::{HttpRequest, HttpResponse, HttpTransport, RequestBody};
pub use multipart::{Attachment, MultipartForm};
pub use query::{encode_query, with_query};
pub use request_client::{NO_BODY, RequestClient, RequestOptions};
pub use resource_service::{
    DELETED_FILE_IDS_FIELD, DivisionService, Divisions, DomainService, Domains, MenuService, Menus,
    NotificationService, Notifications, PermitService, PermitTypeService, PermitTypes, Permits,
    ProjectService, Projects, ReferenceCategories, ReferenceCategoryService, ReferenceService,
    References, Resource, ResourceClient, RoleService, Roles, TASK_FILES_FIELD, TaskService, Tasks,
    UserService, Users, WritableResource,
};
