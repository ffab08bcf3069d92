//! Payload validation
//!
//! Validation is pure and runs before the store is touched. It reports every
//! blank mandatory field at once rather than stopping at the first.

use super::errors::{ValidationError, ValidationResult};
use super::record::NewGigRequest;
use super::schema::RecordSchema;

/// Checks that every field `schema` requires is present and not blank.
///
/// A value made only of whitespace counts as blank. The payload itself is
/// not modified: accepted values are stored exactly as sent.
pub fn validate(schema: &RecordSchema, payload: &NewGigRequest) -> ValidationResult<()> {
    let missing: Vec<_> = schema
        .required_fields()
        .iter()
        .copied()
        .filter(|field| is_blank(field.value(payload)))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::missing_fields(missing))
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
