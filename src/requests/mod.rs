//! # Gig Requests
//!
//! The record store and the pure decisions made around it.
//!
//! - [`RequestStore`] owns every record and the id counter behind one lock.
//!   `append` assigns `id` and `createdAt` and pushes the record as a single
//!   commit; `snapshot` returns matching records in creation order.
//! - [`validate`] checks a payload against a [`RecordSchema`] before it can
//!   reach the store. Rejected payloads consume no id.
//! - [`SupplierFilter`] narrows a listing to one supplier, or matches
//!   everything when empty.
//! - [`RequestService`] is the creation/listing surface used by HTTP handlers.

mod errors;
mod filter;
mod record;
mod schema;
mod service;
mod store;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use filter::{matches_filter, SupplierFilter};
pub use record::{GigRequest, NewGigRequest};
pub use schema::{RecordSchema, RequestField, SchemaVariant};
pub use service::RequestService;
pub use store::RequestStore;
pub use validator::validate;
