//! Student validator for submitted form data
//!
//! Validation semantics:
//! - Every field in `REQUIRED_FIELDS` must be present
//! - `id` and `age` must parse as integers (`age` non-negative)
//! - `active` is true for any non-empty value, including "false"
//! - `name` and `birth_date` pass through untouched
//!
//! The validator never touches the Store.

use std::collections::HashMap;

use super::errors::{StudentError, StudentResult};
use super::record::StudentRecord;

/// Fields a create payload must carry, in check order.
pub const REQUIRED_FIELDS: [&str; 5] = ["id", "name", "birth_date", "age", "active"];

/// Coerces raw form fields into a typed record.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentValidator;

impl StudentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates a field map and builds the record.
    ///
    /// # Errors
    ///
    /// - `IncompleteData` naming the first missing field
    /// - `InvalidType` if `id` or `age` does not parse
    pub fn validate(&self, fields: &HashMap<String, String>) -> StudentResult<StudentRecord> {
        for field in REQUIRED_FIELDS {
            if !fields.contains_key(field) {
                return Err(StudentError::IncompleteData(field));
            }
        }

        let id = parse_field::<i64>(fields, "id")?;
        let age = parse_field::<u32>(fields, "age")?;

        Ok(StudentRecord {
            id,
            name: field(fields, "name").to_string(),
            birth_date: field(fields, "birth_date").to_string(),
            age,
            active: coerce_truthy(field(fields, "active")),
        })
    }
}

/// Truthiness of a raw string: anything non-empty is true.
pub(crate) fn coerce_truthy(raw: &str) -> bool {
    !raw.is_empty()
}

fn field<'a>(fields: &'a HashMap<String, String>, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or_default()
}

fn parse_field<T: std::str::FromStr>(
    fields: &HashMap<String, String>,
    name: &'static str,
) -> StudentResult<T> {
    let raw = field(fields, name);
    raw.parse::<T>().map_err(|_| StudentError::InvalidType {
        field: name,
        value: raw.to_string(),
    })
}
