//! Turns raw transport outcomes into decoded values or a `CatalogError`.
//!
//! # Design
//! This is the only place where status codes are interpreted. The expected
//! success shape is chosen by the caller through the `DecodeBody` type
//! parameter: JSON records and record lists decode through serde, while the
//! delete confirmation is plain text and is returned untouched.

use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::error::CatalogError;
use crate::http::HttpResponse;
use crate::transport::TransportError;
use crate::types::MovieRecord;

/// Shape a 2xx response body is decoded into.
pub trait DecodeBody: Sized {
    fn decode(body: &str) -> Result<Self, String>;
}

fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, String> {
    serde_json::from_str(body).map_err(|e| e.to_string())
}

impl DecodeBody for MovieRecord {
    fn decode(body: &str) -> Result<Self, String> {
        decode_json(body)
    }
}

/// Wire order is preserved.
impl DecodeBody for Vec<MovieRecord> {
    fn decode(body: &str) -> Result<Self, String> {
        decode_json(body)
    }
}

/// Plain-text confirmation bodies.
impl DecodeBody for String {
    fn decode(body: &str) -> Result<Self, String> {
        Ok(body.to_string())
    }
}

/// "Not Found: <body>", or just the status text when the body is empty.
fn status_detail(response: &HttpResponse) -> String {
    let reason = ::http::StatusCode::from_u16(response.status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Status");
    if response.body.is_empty() {
        reason.to_string()
    } else {
        format!("{reason}: {}", response.body)
    }
}

/// Translate one transport outcome for `operation`.
pub fn translate<T: DecodeBody>(
    operation: &str,
    outcome: Result<HttpResponse, TransportError>,
) -> Result<T, CatalogError> {
    let response = match outcome {
        Ok(response) => response,
        Err(err) => {
            error!(operation, error = %err, "transport failure");
            return Err(CatalogError::TransportFault(err.to_string()));
        }
    };

    debug!(operation, status = response.status, "received response");
    match response.status {
        200..=299 => T::decode(&response.body).map_err(|e| {
            error!(operation, error = %e, "undecodable response body");
            CatalogError::TransportFault(format!("failed to decode response body: {e}"))
        }),
        status @ 400..=499 => {
            warn!(operation, status, body = %response.body, "request rejected by catalog service");
            Err(CatalogError::ClientFault {
                status,
                detail: status_detail(&response),
            })
        }
        status => {
            error!(operation, status, body = %response.body, "catalog service failure");
            Err(CatalogError::ServerFault {
                status,
                detail: status_detail(&response),
            })
        }
    }
}
