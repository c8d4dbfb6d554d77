use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use permitdesk_application::{CredentialStore, Credentials};
use permitdesk_core::{AppError, AppResult, AuthToken};
use permitdesk_domain::{Domain, User};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;


/// On-disk layout: three string keys, the user and domain as JSON text.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected_domain: Option<String>,
}

/// Credential store persisted as a JSON file.
///
/// Commits write a sibling temporary file and rename it over the target, so
/// readers never observe a partially written session. Clearing removes the
/// file.
pub struct FileCredentialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCredentialStore {
    /// Creates a store backed by `path`; the file is created on first commit.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    fn temporary_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "credentials.json".into());
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    async fn read_file(&self) -> AppResult<Option<CredentialFile>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(AppError::Storage(format!(
                    "failed to read credentials file '{}': {error}",
                    self.path.display()
                )));
            }
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&contents).map(Some).map_err(|error| {
            AppError::Storage(format!(
                "credentials file '{}' is not valid JSON: {error}",
                self.path.display()
            ))
        })
    }

    async fn write_file(&self, file: &CredentialFile) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(file).map_err(|error| {
            AppError::Storage(format!("failed to serialize credentials: {error}"))
        })?;

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|error| {
                AppError::Storage(format!(
                    "failed to create credentials directory '{}': {error}",
                    parent.display()
                ))
            })?;
        }

        let temporary_path = self.temporary_path();
        write_private(&temporary_path, contents.as_bytes())
            .await
            .map_err(|error| {
                AppError::Storage(format!(
                    "failed to write credentials file '{}': {error}",
                    temporary_path.display()
                ))
            })?;
        tokio::fs::rename(&temporary_path, &self.path)
            .await
            .map_err(|error| {
                AppError::Storage(format!(
                    "failed to replace credentials file '{}': {error}",
                    self.path.display()
                ))
            })
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> AppResult<Option<Credentials>> {
        let Some(file) = self.read_file().await? else {
            return Ok(None);
        };

        let Some(token) = file.auth_token.filter(|token| !token.is_empty()) else {
            return Ok(None);
        };
        let Some(user_data) = file.user_data else {
            return Ok(None);
        };

        let user: User = serde_json::from_str(&user_data).map_err(|error| {
            AppError::Storage(format!("stored user snapshot is unreadable: {error}"))
        })?;
        let domain = file
            .selected_domain
            .map(|domain| serde_json::from_str::<Domain>(&domain))
            .transpose()
            .map_err(|error| {
                AppError::Storage(format!("stored domain snapshot is unreadable: {error}"))
            })?;

        Ok(Some(Credentials {
            token: AuthToken::new(token),
            user,
            domain,
        }))
    }

    async fn commit(&self, credentials: Credentials) -> AppResult<()> {
        let user_data = serde_json::to_string(&credentials.user).map_err(|error| {
            AppError::Storage(format!("failed to serialize user snapshot: {error}"))
        })?;
        let selected_domain = credentials
            .domain
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|error| {
                AppError::Storage(format!("failed to serialize domain snapshot: {error}"))
            })?;

        let _guard = self.write_lock.lock().await;
        self.write_file(&CredentialFile {
            auth_token: Some(credentials.token.as_str().to_owned()),
            user_data: Some(user_data),
            selected_domain,
        })
        .await?;

        debug!(
            path = %self.path.display(),
            user_id = credentials.user.id,
            "stored credentials"
        );

        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(error) if error.kind() == ErrorKind::NotFound => {}
            Err(error) => {
                return Err(AppError::Storage(format!(
                    "failed to remove credentials file '{}': {error}",
                    self.path.display()
                )));
            }
        }

        debug!(path = %self.path.display(), "cleared stored credentials");

        Ok(())
    }
}

/// Writes `contents` to a file readable only by the owner on Unix.
async fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await?;
    file.write_all(contents).await?;
    file.flush().await
}
