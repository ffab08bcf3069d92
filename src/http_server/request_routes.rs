//! Gig Request HTTP Routes
//!
//! - `POST /requests` creates a request (`201`, or `400` naming missing fields)
//! - `GET /requests?supplierEmail=...` lists requests in creation order
//!
//! Any other method on `/requests` is answered with `405`. Preflight
//! `OPTIONS` never reaches these handlers; the CORS layer answers it.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::observability::{log_event_with_fields, Event};
use crate::requests::{NewGigRequest, RequestService, SupplierFilter};

use super::errors::{ApiError, ApiResult};

/// Query string accepted by the listing endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListRequestsQuery {
    #[serde(rename = "supplierEmail")]
    pub supplier_email: Option<String>,
}

/// Create gig request routes
pub fn request_routes(service: RequestService) -> Router {
    Router::new()
        .route("/requests", get(list_requests_handler).post(create_request_handler))
        .with_state(service)
}

async fn create_request_handler(
    State(service): State<RequestService>,
    payload: Result<Json<NewGigRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(payload) = payload.map_err(|rejection| {
        service.metrics().increment_invalid_bodies();
        let reason = rejection.body_text();
        log_event_with_fields(Event::InvalidBody, &[("reason", reason.as_str())]);
        ApiError::InvalidBody(reason)
    })?;

    let record = service.create(payload)?;
    encode_json(&service, StatusCode::CREATED, &record)
}

async fn list_requests_handler(
    State(service): State<RequestService>,
    Query(query): Query<ListRequestsQuery>,
) -> ApiResult<Response> {
    let filter = SupplierFilter::from_query(query.supplier_email);
    let records = service.list(&filter);
    encode_json(&service, StatusCode::OK, &records)
}

/// Serializes `value` as the response body.
///
/// Encoding happens here rather than in `Json` so that a failure is logged
/// and counted like every other error.
fn encode_json<T: Serialize>(
    service: &RequestService,
    status: StatusCode,
    value: &T,
) -> ApiResult<Response> {
    match serde_json::to_vec(value) {
        Ok(body) => Ok((
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response()),
        Err(err) => {
            service.metrics().increment_encoding_failures();
            let reason = err.to_string();
            log_event_with_fields(Event::EncodingFailed, &[("reason", reason.as_str())]);
            Err(ApiError::Encoding(reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::RecordSchema;
    use serde::ser::Error as _;

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refused"))
        }
    }

    #[test]
    fn test_encoding_failure_is_internal_error() {
        let service = RequestService::new(RecordSchema::basic());
        let err = encode_json(&service, StatusCode::OK, &Unencodable).unwrap_err();

        assert!(matches!(err, ApiError::Encoding(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(service.metrics().snapshot().encoding_failures, 1);
    }

    #[test]
    fn test_encoded_response_status() {
        let service = RequestService::new(RecordSchema::basic());
        let response = encode_json(&service, StatusCode::CREATED, &vec![1, 2]).unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }
}
