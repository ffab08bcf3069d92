//! # gigboard HTTP Server Module
//!
//! Axum server exposing the request store.
//!
//! # Endpoints
//!
//! - `POST /requests` - Submit a gig request
//! - `GET /requests` - List gig requests, optionally `?supplierEmail=`
//! - `/health` - Health check
//! - `/metrics` - Request counters

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod request_routes;
pub mod server;

pub use config::{HttpServerConfig, PORT_ENV};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
