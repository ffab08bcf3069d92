//! Record schema
//!
//! Which payload fields must be present is data, not code: a schema is an
//! ordered set of mandatory [`RequestField`]s. Two variants exist. The basic
//! one only identifies the client; the supplier-aware one additionally binds
//! every request to a supplier so listings can be filtered by it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::NewGigRequest;

/// A text field of a gig request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestField {
    GigTitle,
    Client,
    ClientEmail,
    SupplierEmail,
    Details,
}

impl RequestField {
    /// Name of the field on the wire.
    pub fn json_name(&self) -> &'static str {
        match self {
            RequestField::GigTitle => "gigTitle",
            RequestField::Client => "client",
            RequestField::ClientEmail => "clientEmail",
            RequestField::SupplierEmail => "supplierEmail",
            RequestField::Details => "details",
        }
    }

    /// The payload's value for this field, if one was sent.
    pub fn value<'a>(&self, payload: &'a NewGigRequest) -> Option<&'a str> {
        let value = match self {
            RequestField::GigTitle => &payload.gig_title,
            RequestField::Client => &payload.client,
            RequestField::ClientEmail => &payload.client_email,
            RequestField::SupplierEmail => &payload.supplier_email,
            RequestField::Details => &payload.details,
        };
        value.as_deref()
    }
}

impl fmt::Display for RequestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_name())
    }
}

/// Named schema variants, as selected from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaVariant {
    /// Title, client and client email are mandatory.
    Basic,
    /// Basic plus a mandatory supplier email.
    #[default]
    SupplierAware,
}

impl SchemaVariant {
    pub fn schema(self) -> RecordSchema {
        match self {
            SchemaVariant::Basic => RecordSchema::basic(),
            SchemaVariant::SupplierAware => RecordSchema::supplier_aware(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVariant::Basic => "basic",
            SchemaVariant::SupplierAware => "supplier-aware",
        }
    }
}

/// The mandatory fields a creation payload must carry, in reporting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    required: Vec<RequestField>,
}

impl RecordSchema {
    /// Schema requiring exactly `required`, reported in the given order.
    pub fn new(required: impl IntoIterator<Item = RequestField>) -> Self {
        let mut fields: Vec<RequestField> = Vec::new();
        for field in required {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        Self { required: fields }
    }

    pub fn basic() -> Self {
        Self::new([
            RequestField::GigTitle,
            RequestField::Client,
            RequestField::ClientEmail,
        ])
    }

    pub fn supplier_aware() -> Self {
        Self::new([
            RequestField::GigTitle,
            RequestField::Client,
            RequestField::ClientEmail,
            RequestField::SupplierEmail,
        ])
    }

    pub fn required_fields(&self) -> &[RequestField] {
        &self.required
    }

    pub fn is_required(&self, field: RequestField) -> bool {
        self.required.contains(&field)
    }
}

impl Default for RecordSchema {
    fn default() -> Self {
        SchemaVariant::default().schema()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_aware_is_superset_of_basic() {
        let basic = RecordSchema::basic();
        let supplier = RecordSchema::supplier_aware();

        for field in basic.required_fields() {
            assert!(supplier.is_required(*field));
        }
        assert!(!basic.is_required(RequestField::SupplierEmail));
        assert!(supplier.is_required(RequestField::SupplierEmail));
    }

    #[test]
    fn test_details_never_required_by_builtin_schemas() {
        assert!(!RecordSchema::basic().is_required(RequestField::Details));
        assert!(!RecordSchema::supplier_aware().is_required(RequestField::Details));
    }

    #[test]
    fn test_duplicate_fields_collapse() {
        let schema = RecordSchema::new([
            RequestField::Client,
            RequestField::GigTitle,
            RequestField::Client,
        ]);
        assert_eq!(
            schema.required_fields(),
            &[RequestField::Client, RequestField::GigTitle]
        );
    }

    #[test]
    fn test_default_schema_is_supplier_aware() {
        assert_eq!(RecordSchema::default(), RecordSchema::supplier_aware());
    }

    #[test]
    fn test_variant_names() {
        let variant: SchemaVariant = serde_json::from_str("\"basic\"").unwrap();
        assert_eq!(variant, SchemaVariant::Basic);
        assert_eq!(SchemaVariant::SupplierAware.as_str(), "supplier-aware");
        assert_eq!(
            serde_json::to_string(&SchemaVariant::SupplierAware).unwrap(),
            "\"supplier-aware\""
        );
    }

    #[test]
    fn test_field_value_lookup() {
        let payload = NewGigRequest::new("Logo", "Acme", "a@acme.com").with_details("svg");
        assert_eq!(RequestField::GigTitle.value(&payload), Some("Logo"));
        assert_eq!(RequestField::Details.value(&payload), Some("svg"));
        assert_eq!(RequestField::SupplierEmail.value(&payload), None);
    }
}
