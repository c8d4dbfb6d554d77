use permitdesk_domain::{
    Division, DivisionFilter, DivisionInput, Domain, DomainFilter, DomainInput, Menu, MenuFilter,
    MenuInput, Notification, Pagination, Permit, PermitFilter, PermitInput, PermitType,
    PermitTypeFilter, PermitTypeInput, Project, ProjectCreateInput, ProjectFilter,
    ProjectUpdateInput, Reference, ReferenceCategory, ReferenceCategoryFilter,
    ReferenceCategoryInput, ReferenceFilter, ReferenceInput, Role, RoleFilter, RoleInput, Task,
    TaskCreateInput, TaskFilter, TaskUpdateInput, User, UserFilter, UserInput, UserUpdateInput,
};

use super::{Resource, ResourceClient, WritableResource};

/// `/domains`.
#[derive(Debug, Clone, Copy)]
pub struct Domains;

impl Resource for Domains {
    const PATH: &'static str = "/domains";
    type Entity = Domain;
    type Filter = DomainFilter;
}

impl WritableResource for Domains {
    type Create = DomainInput;
    type Update = DomainInput;
}

/// `/divisions`.
#[derive(Debug, Clone, Copy)]
pub struct Divisions;

impl Resource for Divisions {
    const PATH: &'static str = "/divisions";
    type Entity = Division;
    type Filter = DivisionFilter;
}

impl WritableResource for Divisions {
    type Create = DivisionInput;
    type Update = DivisionInput;
}

/// `/permit-types`.
#[derive(Debug, Clone, Copy)]
pub struct PermitTypes;

impl Resource for PermitTypes {
    const PATH: &'static str = "/permit-types";
    type Entity = PermitType;
    type Filter = PermitTypeFilter;
}

impl WritableResource for PermitTypes {
    type Create = PermitTypeInput;
    type Update = PermitTypeInput;
}

/// `/permits`.
#[derive(Debug, Clone, Copy)]
pub struct Permits;

impl Resource for Permits {
    const PATH: &'static str = "/permits";
    type Entity = Permit;
    type Filter = PermitFilter;
}

impl WritableResource for Permits {
    type Create = PermitInput;
    type Update = PermitInput;
}

/// `/projects`.
#[derive(Debug, Clone, Copy)]
pub struct Projects;

impl Resource for Projects {
    const PATH: &'static str = "/projects";
    type Entity = Project;
    type Filter = ProjectFilter;
}

impl WritableResource for Projects {
    type Create = ProjectCreateInput;
    type Update = ProjectUpdateInput;
}

/// `/tasks`.
#[derive(Debug, Clone, Copy)]
pub struct Tasks;

impl Resource for Tasks {
    const PATH: &'static str = "/tasks";
    type Entity = Task;
    type Filter = TaskFilter;
}

impl WritableResource for Tasks {
    type Create = TaskCreateInput;
    type Update = TaskUpdateInput;

    const SENDS_FORM: bool = true;
}

/// `/users`.
#[derive(Debug, Clone, Copy)]
pub struct Users;

impl Resource for Users {
    const PATH: &'static str = "/users";
    type Entity = User;
    type Filter = UserFilter;
}

impl WritableResource for Users {
    type Create = UserInput;
    type Update = UserUpdateInput;
}

/// `/roles`.
#[derive(Debug, Clone, Copy)]
pub struct Roles;

impl Resource for Roles {
    const PATH: &'static str = "/roles";
    type Entity = Role;
    type Filter = RoleFilter;
}

impl WritableResource for Roles {
    type Create = RoleInput;
    type Update = RoleInput;
}

/// `/menus`.
#[derive(Debug, Clone, Copy)]
pub struct Menus;

impl Resource for Menus {
    const PATH: &'static str = "/menus";
    type Entity = Menu;
    type Filter = MenuFilter;
}

impl WritableResource for Menus {
    type Create = MenuInput;
    type Update = MenuInput;
}

/// `/references`.
#[derive(Debug, Clone, Copy)]
pub struct References;

impl Resource for References {
    const PATH: &'static str = "/references";
    type Entity = Reference;
    type Filter = ReferenceFilter;
}

impl WritableResource for References {
    type Create = ReferenceInput;
    type Update = ReferenceInput;
}

/// `/reference-categories`.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceCategories;

impl Resource for ReferenceCategories {
    const PATH: &'static str = "/reference-categories";
    type Entity = ReferenceCategory;
    type Filter = ReferenceCategoryFilter;
}

impl WritableResource for ReferenceCategories {
    type Create = ReferenceCategoryInput;
    type Update = ReferenceCategoryInput;
}

/// `/notifications`; read and delete only.
#[derive(Debug, Clone, Copy)]
pub struct Notifications;

impl Resource for Notifications {
    const PATH: &'static str = "/notifications";
    type Entity = Notification;
    type Filter = Pagination;
}

/// Domain CRUD.
pub type DomainService = ResourceClient<Domains>;
/// Division CRUD.
pub type DivisionService = ResourceClient<Divisions>;
/// Permit type CRUD.
pub type PermitTypeService = ResourceClient<PermitTypes>;
/// Permit CRUD and search.
pub type PermitService = ResourceClient<Permits>;
/// Project CRUD, membership and lifecycle.
pub type ProjectService = ResourceClient<Projects>;
/// Task CRUD and approval workflow.
pub type TaskService = ResourceClient<Tasks>;
/// User CRUD, passwords and domain assignments.
pub type UserService = ResourceClient<Users>;
/// Role CRUD.
pub type RoleService = ResourceClient<Roles>;
/// Menu CRUD and role assignment.
pub type MenuService = ResourceClient<Menus>;
/// Reference CRUD.
pub type ReferenceService = ResourceClient<References>;
/// Reference category CRUD.
pub type ReferenceCategoryService = ResourceClient<ReferenceCategories>;
/// Notification inbox.
pub type NotificationService = ResourceClient<Notifications>;
