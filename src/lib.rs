//! students-crud - A student roster served over HTTP
//!
//! Records live in an in-memory Store for the lifetime of the process.

pub mod auth;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod students;
