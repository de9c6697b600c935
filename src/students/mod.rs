//! Student roster subsystem
//!
//! Holds the records, validates incoming form data, and answers the
//! roster queries the HTTP layer exposes.
//!
//! # Design Principles
//!
//! - The Store is injected, never global
//! - Validation happens before append; a rejected record never lands
//! - Lookups are linear scans in insertion order, first match wins

mod errors;
mod record;
mod repository;
mod service;
mod validator;

pub use errors::{StudentError, StudentResult, INVALID_PAYLOAD_MESSAGE, MISSING_QUERY_MESSAGE};
pub use record::{StudentList, StudentRecord};
pub use repository::{InMemoryStudentRepository, StudentRepository};
pub use service::{detail_path, ListMode, MeTarget, SearchResults, StudentService};
pub use validator::{StudentValidator, REQUIRED_FIELDS};
