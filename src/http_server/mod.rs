//! # HTTP Server Module
//!
//! Maps the roster operations onto HTTP with axum.
//!
//! # Endpoints
//!
//! - `/status` - Liveness check
//! - `/students` - List (HTML or JSON) and create
//! - `/students/:id` - Detail
//! - `/students/me` - Redirect to the caller's detail
//! - `/students/search` - Name search

pub mod config;
pub mod render;
pub mod server;
pub mod status_routes;
pub mod student_routes;

pub use config::{AuthConfig, HttpServerConfig};
pub use server::{build_router, HttpServer};
pub use student_routes::StudentsState;
