//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Load config, seed the Store, run the HTTP server
//! - token: Print an access token for a student id

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    build_state, issue_token, load_config, load_seed, run, run_command, serve, token,
    TokenResponse,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json;
