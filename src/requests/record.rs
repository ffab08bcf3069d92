//! Gig request records
//!
//! `NewGigRequest` is what a client submits. `GigRequest` is what the store
//! hands back once an id and creation time have been assigned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A creation payload as decoded from the client.
///
/// Every field is optional at decode time so that missing and `null` values
/// reach validation instead of failing in the decoder. `id` and `createdAt`
/// are not part of the payload; if a client sends them they are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewGigRequest {
    pub gig_title: Option<String>,
    pub client: Option<String>,
    /// Older clients send this as `email`.
    #[serde(alias = "email")]
    pub client_email: Option<String>,
    pub supplier_email: Option<String>,
    pub details: Option<String>,
}

impl NewGigRequest {
    /// Payload with the three fields every schema requires.
    pub fn new(
        gig_title: impl Into<String>,
        client: impl Into<String>,
        client_email: impl Into<String>,
    ) -> Self {
        Self {
            gig_title: Some(gig_title.into()),
            client: Some(client.into()),
            client_email: Some(client_email.into()),
            supplier_email: None,
            details: None,
        }
    }

    pub fn with_supplier_email(mut self, supplier_email: impl Into<String>) -> Self {
        self.supplier_email = Some(supplier_email.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// A stored gig request. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GigRequest {
    pub id: u64,
    pub gig_title: String,
    pub client: String,
    pub client_email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub supplier_email: String,
    #[serde(default)]
    pub details: String,
    pub created_at: DateTime<Utc>,
}

impl GigRequest {
    /// Completes a candidate with the identity the store assigned to it.
    pub(crate) fn commit(id: u64, created_at: DateTime<Utc>, candidate: NewGigRequest) -> Self {
        Self {
            id,
            gig_title: candidate.gig_title.unwrap_or_default(),
            client: candidate.client.unwrap_or_default(),
            client_email: candidate.client_email.unwrap_or_default(),
            supplier_email: candidate.supplier_email.unwrap_or_default(),
            details: candidate.details.unwrap_or_default(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_accepts_legacy_email_alias() {
        let payload: NewGigRequest = serde_json::from_value(json!({
            "gigTitle": "Logo Design",
            "client": "Acme",
            "email": "a@acme.com"
        }))
        .unwrap();

        assert_eq!(payload.client_email.as_deref(), Some("a@acme.com"));
        assert_eq!(payload.supplier_email, None);
    }

    #[test]
    fn test_payload_tolerates_nulls_and_ignores_server_fields() {
        let payload: NewGigRequest = serde_json::from_value(json!({
            "id": 99,
            "createdAt": "2020-01-01T00:00:00Z",
            "gigTitle": null,
            "client": "Acme"
        }))
        .unwrap();

        assert_eq!(payload.gig_title, None);
        assert_eq!(payload.client.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = GigRequest::commit(
            1,
            Utc::now(),
            NewGigRequest::new("Logo Design", "Acme", "a@acme.com")
                .with_supplier_email("s1@x.com"),
        );
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["gigTitle"], "Logo Design");
        assert_eq!(value["clientEmail"], "a@acme.com");
        assert_eq!(value["supplierEmail"], "s1@x.com");
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn test_empty_supplier_email_is_omitted() {
        let record = GigRequest::commit(
            1,
            Utc::now(),
            NewGigRequest::new("Logo Design", "Acme", "a@acme.com"),
        );
        let value = serde_json::to_value(&record).unwrap();

        assert!(value.get("supplierEmail").is_none());
        assert_eq!(value["details"], "");
    }

    #[test]
    fn test_created_at_round_trips_as_rfc3339() {
        let record = GigRequest::commit(
            7,
            Utc::now(),
            NewGigRequest::new("Logo Design", "Acme", "a@acme.com"),
        );
        let text = serde_json::to_string(&record).unwrap();
        let back: GigRequest = serde_json::from_str(&text).unwrap();

        assert_eq!(back, record);
    }
}
