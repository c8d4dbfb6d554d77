use std::env;
use std::path::PathBuf;

use permitdesk_core::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub api_base_url: String,
    pub credentials_path: PathBuf,
}

impl CliConfig {
    pub fn load() -> AppResult<Self> {
        let api_base_url = normalize_base_url(
            env::var("PERMITDESK_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_owned())
                .as_str(),
        )?;

        let credentials_path = match env::var("PERMITDESK_CREDENTIALS_PATH") {
            Ok(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
            _ => default_credentials_path()?,
        };

        Ok(Self {
            api_base_url,
            credentials_path,
        })
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn default_credentials_path() -> AppResult<PathBuf> {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .map(|base| base.join("permitdesk").join("credentials.json"))
        .ok_or_else(|| {
            AppError::Validation(
                "PERMITDESK_CREDENTIALS_PATH is required when no config directory is available"
                    .to_owned(),
            )
        })
}

fn normalize_base_url(value: &str) -> AppResult<String> {
    let value = value.trim().trim_end_matches('/');
    if value.is_empty() {
        return Err(AppError::Validation(
            "PERMITDESK_API_URL must not be empty".to_owned(),
        ));
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(AppError::Validation(format!(
            "PERMITDESK_API_URL must start with http:// or https://, got '{value}'"
        )));
    }

    Ok(value.to_owned())
}

#[cfg(test)]
mod tests {
    use permitdesk_core::AppError;

    use super::normalize_base_url;

    #[test]
    fn base_url_loses_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" https://api.example.com/v1// ").unwrap_or_default(),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn base_url_requires_http_scheme() {
        assert!(matches!(
            normalize_base_url("api.example.com"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(normalize_base_url("  "), Err(AppError::Validation(_))));
    }
}
