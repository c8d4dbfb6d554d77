//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod file_credential_store;
mod in_memory_credential_store;
mod reqwest_http_transport;

pub use file_credential_store::FileCredentialStore;
pub use in_memory_credential_store::InMemoryCredentialStore;
pub use reqwest_http_transport::ReqwestHttpTransport;
