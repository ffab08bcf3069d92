//! Supplier filtering for listings

use super::record::GigRequest;

/// Narrows a listing to one supplier's requests.
///
/// An empty filter is the unfiltered view and matches every record.
/// Otherwise the comparison is exact: case-sensitive, no trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierFilter {
    supplier_email: Option<String>,
}

impl SupplierFilter {
    /// Filter matching every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter for one supplier. An empty string means no filter.
    pub fn supplier(email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            supplier_email: (!email.is_empty()).then_some(email),
        }
    }

    /// Builds a filter from an optional query parameter.
    pub fn from_query(value: Option<String>) -> Self {
        value.map(Self::supplier).unwrap_or_default()
    }

    pub fn supplier_email(&self) -> Option<&str> {
        self.supplier_email.as_deref()
    }

    pub fn is_all(&self) -> bool {
        self.supplier_email.is_none()
    }

    pub fn matches(&self, record: &GigRequest) -> bool {
        match &self.supplier_email {
            None => true,
            Some(email) => record.supplier_email == *email,
        }
    }
}

/// Whether `record` belongs in a listing narrowed by `filter`.
pub fn matches_filter(record: &GigRequest, filter: &SupplierFilter) -> bool {
    filter.matches(record)
}
