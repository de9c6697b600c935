//! Student record model

use serde::{Deserialize, Serialize};

/// A single roster entry.
///
/// `id` is assigned by the caller, not generated. `birth_date` is kept
/// exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub birth_date: String,
    pub age: u32,
    pub active: bool,
}

impl StudentRecord {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        birth_date: impl Into<String>,
        age: u32,
        active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            birth_date: birth_date.into(),
            age,
            active,
        }
    }

    /// Case-insensitive substring match against the name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn name_contains_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// Structured listing body, `{"students": [...]}`.
///
/// Also the on-disk shape of a seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentList {
    pub students: Vec<StudentRecord>,
}
