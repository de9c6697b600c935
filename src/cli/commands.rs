//! CLI command implementations
//!
//! `serve` loads configuration, seeds the Store and runs the HTTP server.
//! `token` mints an access token for `/students/me`.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::auth::JwtManager;
use crate::http_server::{HttpServer, HttpServerConfig, StudentsState};
use crate::observability::{init_logging, log_event, log_event_with_fields, Event};
use crate::students::{InMemoryStudentRepository, StudentList, StudentRecord};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Token printed by the `token` command
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Load configuration from file.
///
/// A missing file yields the defaults; an unreadable or invalid one is
/// an error.
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    if !path.exists() {
        return Ok(HttpServerConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    config.validate().map_err(CliError::config_error)?;

    Ok(config)
}

/// Load seed records, shaped like the JSON listing (`{"students": [...]}`)
pub fn load_seed(path: &Path) -> CliResult<Vec<StudentRecord>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::seed_error(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;

    let list: StudentList = serde_json::from_str(&content)
        .map_err(|e| CliError::seed_error(format!("Invalid seed JSON: {}", e)))?;

    Ok(list.students)
}

/// Build roster state from configuration, seeding the Store if configured
pub fn build_state(config: &HttpServerConfig) -> CliResult<StudentsState> {
    let records = match &config.seed_path {
        Some(path) => load_seed(path)?,
        None => Vec::new(),
    };

    let count = records.len();
    let state =
        StudentsState::with_repository(config, InMemoryStudentRepository::with_records(records));

    if config.seed_path.is_some() {
        let count = count.to_string();
        log_event_with_fields(Event::StoreSeeded, &[("count", count.as_str())]);
    }

    Ok(state)
}

/// Run the CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Token { config, student_id } => token(&config, student_id),
    }
}

/// Start the HTTP server and block until shutdown
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    init_logging(&config.logging);
    log_event(Event::BootStart);
    let path = config_path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("path", path.as_str())]);

    let state = Arc::new(build_state(&config)?);
    let server = HttpServer::with_state(config, state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Print an access token for `student_id`
pub fn token(config_path: &Path, student_id: i64) -> CliResult<()> {
    let response = issue_token(&load_config(config_path)?, student_id)?;
    write_json(&response)
}

/// Mint a token with the configured signing settings
pub fn issue_token(config: &HttpServerConfig, student_id: i64) -> CliResult<TokenResponse> {
    let manager = JwtManager::new(config.auth.jwt_config());
    let access_token = manager
        .issue(student_id)
        .map_err(|e| CliError::token_error(e.to_string()))?;

    Ok(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        expires_in: manager.ttl_seconds(),
    })
}
