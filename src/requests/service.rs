//! Creation and listing entry points
//!
//! HTTP handlers call these; they never touch the store directly.

use std::sync::Arc;

use crate::observability::{log_event_with_fields, Event, MetricsRegistry};

use super::errors::ValidationResult;
use super::filter::SupplierFilter;
use super::record::{GigRequest, NewGigRequest};
use super::schema::RecordSchema;
use super::store::RequestStore;
use super::validator::validate;

/// Validates, stores and lists gig requests against one store.
#[derive(Debug, Clone)]
pub struct RequestService {
    schema: RecordSchema,
    store: Arc<RequestStore>,
    metrics: Arc<MetricsRegistry>,
}

impl RequestService {
    /// Service over a fresh, empty store.
    pub fn new(schema: RecordSchema) -> Self {
        Self::with_store(schema, Arc::new(RequestStore::new()))
    }

    pub fn with_store(schema: RecordSchema, store: Arc<RequestStore>) -> Self {
        Self {
            schema,
            store,
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    pub fn store(&self) -> &Arc<RequestStore> {
        &self.store
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Validates `payload` and, if accepted, stores it.
    ///
    /// A rejected payload leaves the store untouched: no id is consumed.
    pub fn create(&self, payload: NewGigRequest) -> ValidationResult<GigRequest> {
        if let Err(err) = validate(&self.schema, &payload) {
            self.metrics.increment_rejected();
            let missing = err.missing_names().join(",");
            log_event_with_fields(Event::RequestRejected, &[("missing", missing.as_str())]);
            return Err(err);
        }

        let record = self.store.append(payload);
        self.metrics.increment_created();
        let id = record.id.to_string();
        log_event_with_fields(
            Event::RequestCreated,
            &[("id", id.as_str()), ("supplier_email", record.supplier_email.as_str())],
        );
        Ok(record)
    }

    /// Stored requests matching `filter`, in creation order.
    pub fn list(&self, filter: &SupplierFilter) -> Vec<GigRequest> {
        let records = self.store.snapshot_filtered(filter);
        self.metrics.increment_listings();
        let count = records.len().to_string();
        log_event_with_fields(
            Event::RequestsListed,
            &[
                ("count", count.as_str()),
                ("supplier_email", filter.supplier_email().unwrap_or("")),
            ],
        );
        records
    }
}
