use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use http::Method;
use permitdesk_core::AppResult;
use permitdesk_domain::ListFilter;
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use crate::envelope::{ApiResponse, decode_envelope, decode_list_envelope};
use crate::multipart::MultipartForm;
use crate::query::with_query;
use crate::request_client::{RequestClient, RequestOptions};

mod menus;
mod notifications;
mod permits;
mod projects;
mod references;
mod resources;
mod tasks;
mod users;


pub use tasks::{DELETED_FILE_IDS_FIELD, TASK_FILES_FIELD};
pub use resources::{
    Divisions, DivisionService, Domains, DomainService, Menus, MenuService, Notifications,
    NotificationService, PermitService, PermitTypes, PermitTypeService, Permits, ProjectService,
    Projects, ReferenceCategories, ReferenceCategoryService, ReferenceService, References,
    RoleService, Roles, TaskService, Tasks, UserService, Users,
};

/// Backend collection reachable under one path.
pub trait Resource: Send + Sync + 'static {
    /// Collection path with a leading slash.
    const PATH: &'static str;

    /// Record type returned by the collection.
    type Entity: DeserializeOwned + Send;

    /// Filter accepted by the list endpoint.
    type Filter: ListFilter + Sync;
}

/// Collection that accepts create and update requests.
pub trait WritableResource: Resource {
    /// Create payload.
    type Create: Serialize + Sync;

    /// Update payload.
    type Update: Serialize + Sync;

    /// Whether create and update are sent as `multipart/form-data`.
    const SENDS_FORM: bool = false;
}

/// Typed CRUD client for one resource.
pub struct ResourceClient<R> {
    client: RequestClient,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> Debug for ResourceClient<R> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ResourceClient")
            .field("path", &R::PATH)
            .field("base_url", &self.client.base_url())
            .finish()
    }
}

impl<R: Resource> ResourceClient<R> {
    /// Creates a resource client over a shared request client.
    #[must_use]
    pub fn new(client: RequestClient) -> Self {
        Self {
            client,
            resource: PhantomData,
        }
    }

    /// Returns the underlying request client.
    #[must_use]
    pub fn client(&self) -> &RequestClient {
        &self.client
    }

    /// Lists records matching the filter, keeping paging metadata.
    pub async fn get_all(&self, filter: &R::Filter) -> AppResult<ApiResponse<Vec<R::Entity>>> {
        self.fetch_list_envelope(&with_query(R::PATH, filter))
            .await
    }

    /// Fetches one record.
    pub async fn get_by_id(&self, id: i64) -> AppResult<R::Entity> {
        self.fetch_data(&Self::member(id)).await
    }

    /// Deletes one record.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.send_unit(Method::DELETE, &Self::member(id), None::<&Value>)
            .await
    }

    fn member(id: i64) -> String {
        format!("{}/{id}", R::PATH)
    }

    async fn fetch_envelope<T>(&self, endpoint: &str) -> AppResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let body: Value = self.client.get(endpoint).await?;
        decode_envelope(body)
    }

    async fn fetch_data<T>(&self, endpoint: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.fetch_envelope(endpoint)
            .await
            .map(ApiResponse::into_data)
    }

    async fn fetch_list_envelope<T>(&self, endpoint: &str) -> AppResult<ApiResponse<Vec<T>>>
    where
        T: DeserializeOwned,
    {
        let body: Value = self.client.get(endpoint).await?;
        decode_list_envelope(body)
    }

    async fn fetch_list<T>(&self, endpoint: &str) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.fetch_list_envelope(endpoint)
            .await
            .map(ApiResponse::into_data)
    }

    async fn send_data<B, T>(&self, method: Method, endpoint: &str, body: Option<&B>) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self
            .client
            .request_json(method, endpoint, body, RequestOptions::default())
            .await?;

        decode_envelope(value).map(ApiResponse::into_data)
    }

    async fn send_unit<B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> AppResult<()>
    where
        B: Serialize + ?Sized,
    {
        let value = self
            .client
            .request_json(method, endpoint, body, RequestOptions::default())
            .await?;

        unit_reply(value)
    }

    async fn send_form_data<T>(
        &self,
        method: Method,
        endpoint: &str,
        form: MultipartForm,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let value = self
            .client
            .request_form(method, endpoint, form, RequestOptions::default())
            .await?;

        decode_envelope(value).map(ApiResponse::into_data)
    }

    async fn send_form_unit(
        &self,
        method: Method,
        endpoint: &str,
        form: MultipartForm,
    ) -> AppResult<()> {
        let value = self
            .client
            .request_form(method, endpoint, form, RequestOptions::default())
            .await?;

        unit_reply(value)
    }
}

fn unit_reply(value: Value) -> AppResult<()> {
    if value.is_null() {
        return Ok(());
    }

    decode_envelope::<Option<IgnoredAny>>(value).map(|_| ())
}

impl<R: WritableResource> ResourceClient<R> {
    /// Creates a record and returns it as stored.
    pub async fn create(&self, payload: &R::Create) -> AppResult<R::Entity> {
        if R::SENDS_FORM {
            let form = MultipartForm::from_payload(payload)?;
            return self.send_form_data(Method::POST, R::PATH, form).await;
        }

        self.send_data(Method::POST, R::PATH, Some(payload)).await
    }

    /// Updates a record and returns it as stored.
    pub async fn update(&self, id: i64, payload: &R::Update) -> AppResult<R::Entity> {
        if R::SENDS_FORM {
            let form = MultipartForm::from_payload(payload)?;
            return self
                .send_form_data(Method::PUT, &Self::member(id), form)
                .await;
        }

        self.send_data(Method::PUT, &Self::member(id), Some(payload))
            .await
    }
}
