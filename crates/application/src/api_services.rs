use crate::auth_gate::AuthGate;
use crate::auth_service::AuthService;
use crate::request_client::RequestClient;
use crate::resource_service::{
    DivisionService, DomainService, MenuService, NotificationService, PermitService,
    PermitTypeService, ProjectService, ReferenceCategoryService, ReferenceService, RoleService,
    TaskService, UserService,
};

/// Every service of the API layer, sharing one request client.
#[derive(Clone)]
pub struct ApiServices {
    /// Session lifecycle.
    pub auth: AuthService,
    /// Page access checks.
    pub gate: AuthGate,
    /// Domains.
    pub domains: DomainService,
    /// Divisions.
    pub divisions: DivisionService,
    /// Permit types.
    pub permit_types: PermitTypeService,
    /// Permits.
    pub permits: PermitService,
    /// Projects.
    pub projects: ProjectService,
    /// Tasks.
    pub tasks: TaskService,
    /// Users.
    pub users: UserService,
    /// Roles.
    pub roles: RoleService,
    /// Menus.
    pub menus: MenuService,
    /// References.
    pub references: ReferenceService,
    /// Reference categories.
    pub reference_categories: ReferenceCategoryService,
    /// Notifications.
    pub notifications: NotificationService,
}

impl ApiServices {
    /// Builds all services over one request client.
    #[must_use]
    pub fn new(client: RequestClient) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            gate: AuthGate::new(client.credential_store().clone()),
            domains: DomainService::new(client.clone()),
            divisions: DivisionService::new(client.clone()),
            permit_types: PermitTypeService::new(client.clone()),
            permits: PermitService::new(client.clone()),
            projects: ProjectService::new(client.clone()),
            tasks: TaskService::new(client.clone()),
            users: UserService::new(client.clone()),
            roles: RoleService::new(client.clone()),
            menus: MenuService::new(client.clone()),
            references: ReferenceService::new(client.clone()),
            reference_categories: ReferenceCategoryService::new(client.clone()),
            notifications: NotificationService::new(client),
        }
    }
}
