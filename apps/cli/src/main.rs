//! PermitDesk command-line front end.

#![forbid(unsafe_code)]

mod cli_config;
mod commands;

use std::sync::Arc;

use clap::Parser;
use permitdesk_application::{ApiServices, RequestClient};
use permitdesk_core::AppError;
use permitdesk_infrastructure::{FileCredentialStore, ReqwestHttpTransport};
use tracing::debug;

use crate::cli_config::{CliConfig, init_tracing};
use crate::commands::Cli;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = CliConfig::load()?;

    let services = build_services(&config)?;
    debug!(
        api_base_url = %config.api_base_url,
        credentials_path = %config.credentials_path.display(),
        "permitdesk cli configured"
    );

    let output = commands::run(cli.command, &services).await?;
    println!("{output}");

    Ok(())
}

fn build_services(config: &CliConfig) -> Result<ApiServices, AppError> {
    let http_client = reqwest::Client::builder()
        .user_agent(concat!("permitdesk-cli/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

    let client = RequestClient::new(
        config.api_base_url.as_str(),
        Arc::new(ReqwestHttpTransport::new(http_client)),
        Arc::new(FileCredentialStore::new(config.credentials_path.clone())),
    );

    Ok(ApiServices::new(client))
}
