//! # Student Service
//!
//! The roster operations behind each endpoint: list, create, detail,
//! me and search. Each one performs at most one scan or one append.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use super::errors::{StudentError, StudentResult};
use super::record::StudentRecord;
use super::repository::StudentRepository;
use super::validator::StudentValidator;

/// How a listing is rendered.
///
/// `Html` shows active records only; `Json` shows every record. The two
/// modes intentionally disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    #[default]
    Html,
    Json,
}

impl ListMode {
    /// Maps the `format` query parameter. Only `json` switches mode.
    pub fn from_format(format: Option<&str>) -> Self {
        match format {
            Some("json") => ListMode::Json,
            _ => ListMode::Html,
        }
    }
}

/// Search response body, `{"results": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub results: Vec<StudentRecord>,
}

/// Roster service over an injected repository
pub struct StudentService<R: StudentRepository> {
    repository: R,
    validator: StudentValidator,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            validator: StudentValidator::new(),
        }
    }

    /// Access the underlying repository (seeding, resets)
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Records for a listing, in Store order
    pub fn list(&self, mode: ListMode) -> StudentResult<Vec<StudentRecord>> {
        let students = self.repository.all()?;
        Ok(match mode {
            ListMode::Html => students.into_iter().filter(|s| s.active).collect(),
            ListMode::Json => students,
        })
    }

    /// Validate and append a new record.
    ///
    /// Nothing is appended unless validation succeeds.
    pub fn create(&self, fields: &HashMap<String, String>) -> StudentResult<StudentRecord> {
        let record = self.validator.validate(fields).map_err(|e| {
            debug!(reason = %e, "student create rejected");
            e
        })?;

        self.repository.append(record.clone())?;
        info!(id = record.id, "student created");
        Ok(record)
    }

    /// Look up a record by the raw path segment.
    ///
    /// Only plain decimal segments (`10`, `-5`) name a record. Anything
    /// else, including `+10` or padded digits, reports `NotFound` like an
    /// unknown id.
    pub fn detail(&self, raw_id: &str) -> StudentResult<StudentRecord> {
        let not_found = || StudentError::NotFound(raw_id.to_string());
        let digits = raw_id.strip_prefix('-').unwrap_or(raw_id);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_found());
        }

        let id = raw_id.parse::<i64>().map_err(|_| not_found())?;
        self.detail_by_id(id)
    }

    /// Look up a record by id, first match wins
    pub fn detail_by_id(&self, id: i64) -> StudentResult<StudentRecord> {
        self.repository.find_by_id(id)?.ok_or_else(|| {
            debug!(id, "student not found");
            StudentError::NotFound(id.to_string())
        })
    }

    /// Case-insensitive substring search over names.
    ///
    /// # Errors
    ///
    /// `MissingParameter` if `query` is absent or empty.
    pub fn search(&self, query: Option<&str>) -> StudentResult<SearchResults> {
        let query = match query {
            Some(q) if !q.is_empty() => q,
            _ => return Err(StudentError::MissingParameter("query")),
        };

        let needle = query.to_lowercase();
        let results: Vec<StudentRecord> = self
            .repository
            .all()?
            .into_iter()
            .filter(|s| s.name_contains_lowercase(&needle))
            .collect();

        debug!(query, hits = results.len(), "student search");
        Ok(SearchResults { results })
    }
}

/// Where `/students/me` sends the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeTarget {
    /// Authenticated: the caller's own detail page
    Detail(i64),
    /// No identity: the login flow
    Login,
}

impl MeTarget {
    /// Resolve the caller's identity. No lookup is performed.
    pub fn resolve(identity: Option<i64>) -> Self {
        match identity {
            Some(id) => MeTarget::Detail(id),
            None => MeTarget::Login,
        }
    }
}

/// Path of a record's detail endpoint
pub fn detail_path(id: i64) -> String {
    format!("/students/{}", id)
}
