//! Core data model for roster.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StoreError;

/// One student's stored data.
///
/// The identifier is immutable once the record exists; the other fields
/// are replaced wholesale by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Unique student identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Age in years, always at least 1.
    pub age: u32,
    /// Grade designation (e.g. "A" or "10th").
    pub grade: String,
}

impl StudentRecord {
    /// Build a validated record.
    ///
    /// Every string field must be non-empty after trimming and the age
    /// must be positive; otherwise the matching validation error is
    /// returned and nothing is constructed.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        grade: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let id = non_empty("id", id)?;
        let name = non_empty("name", name)?;
        let grade = non_empty("grade", grade)?;
        if age == 0 {
            return Err(StoreError::InvalidAge);
        }
        Ok(Self {
            id,
            name,
            age,
            grade,
        })
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Age: {} | Grade: {}",
            self.id, self.name, self.age, self.grade
        )
    }
}

fn non_empty(field: &'static str, value: impl Into<String>) -> Result<String, StoreError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(StoreError::EmptyField(field));
    }
    Ok(value)
}
