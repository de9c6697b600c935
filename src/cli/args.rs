//! CLI argument definitions using clap
//!
//! Commands:
//! - students-crud serve --config <path> [--port <port>]
//! - students-crud token --config <path> --student-id <id>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Student roster served over HTTP
#[derive(Parser, Debug)]
#[command(name = "students-crud")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./students.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print an access token identifying a student
    Token {
        /// Path to configuration file
        #[arg(long, default_value = "./students.json")]
        config: PathBuf,

        /// Student id to put in the token
        #[arg(long)]
        student_id: i64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["students-crud", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, PathBuf::from("./students.json"));
                assert_eq!(port, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_token() {
        let cli =
            Cli::try_parse_from(["students-crud", "token", "--student-id", "10"]).unwrap();
        assert!(matches!(cli.command, Command::Token { student_id: 10, .. }));
    }

    #[test]
    fn test_token_requires_student_id() {
        assert!(Cli::try_parse_from(["students-crud", "token"]).is_err());
    }
}
