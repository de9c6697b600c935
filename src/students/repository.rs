//! # Student Store
//!
//! Ordered, process-lifetime collection of records behind a repository
//! trait so handlers never reach for global state.

use std::sync::RwLock;

use super::errors::{StudentError, StudentResult};
use super::record::StudentRecord;

/// Student repository trait
///
/// Abstracts storage operations for the roster.
pub trait StudentRepository: Send + Sync {
    /// All records in insertion order
    fn all(&self) -> StudentResult<Vec<StudentRecord>>;

    /// Append a record at the end. Ids are not checked for uniqueness.
    fn append(&self, record: StudentRecord) -> StudentResult<()>;

    /// First record whose id matches
    fn find_by_id(&self, id: i64) -> StudentResult<Option<StudentRecord>>;

    /// Drop every record and install `records` in their place
    fn replace_all(&self, records: Vec<StudentRecord>) -> StudentResult<()>;

    /// Number of records held
    fn len(&self) -> StudentResult<usize>;

    fn is_empty(&self) -> StudentResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// In-memory student repository
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<Vec<StudentRecord>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with `records`
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self {
            students: RwLock::new(records),
        }
    }
}

fn poisoned() -> StudentError {
    StudentError::Storage("Lock poisoned".to_string())
}

impl StudentRepository for InMemoryStudentRepository {
    fn all(&self) -> StudentResult<Vec<StudentRecord>> {
        let students = self.students.read().map_err(|_| poisoned())?;
        Ok(students.clone())
    }

    fn append(&self, record: StudentRecord) -> StudentResult<()> {
        let mut students = self.students.write().map_err(|_| poisoned())?;
        students.push(record);
        Ok(())
    }

    fn find_by_id(&self, id: i64) -> StudentResult<Option<StudentRecord>> {
        let students = self.students.read().map_err(|_| poisoned())?;
        Ok(students.iter().find(|s| s.id == id).cloned())
    }

    fn replace_all(&self, records: Vec<StudentRecord>) -> StudentResult<()> {
        let mut students = self.students.write().map_err(|_| poisoned())?;
        *students = records;
        Ok(())
    }

    fn len(&self) -> StudentResult<usize> {
        let students = self.students.read().map_err(|_| poisoned())?;
        Ok(students.len())
    }
}
