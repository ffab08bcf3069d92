//! Validation errors
//!
//! A rejected payload never reaches the store, so this is the only error the
//! requests module produces. `append` and `snapshot` are total.

use thiserror::Error;

use super::schema::RequestField;

/// Result type for payload validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// One or more mandatory fields were missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required fields: {}", join_fields(.missing))]
pub struct ValidationError {
    missing: Vec<RequestField>,
}

impl ValidationError {
    pub fn missing_fields(missing: Vec<RequestField>) -> Self {
        Self { missing }
    }

    /// Missing fields in schema order.
    pub fn missing(&self) -> &[RequestField] {
        &self.missing
    }

    /// Wire names of the missing fields.
    pub fn missing_names(&self) -> Vec<&'static str> {
        self.missing.iter().map(RequestField::json_name).collect()
    }
}

fn join_fields(fields: &[RequestField]) -> String {
    fields
        .iter()
        .map(RequestField::json_name)
        .collect::<Vec<_>>()
        .join(", ")
}
