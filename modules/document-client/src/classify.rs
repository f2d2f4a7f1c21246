use reqwest::StatusCode;

use crate::error::{DocumentError, Result};
use crate::types::{DocumentRecord, DownstreamErrorBody};

pub const UNEXPECTED_STATUS: &str = "Unexpected status";
pub const ERROR_PARSING_RESPONSE: &str = "Error parsing response";
pub const FAILED_TO_PARSE_ERROR_RESPONSE: &str = "Failed to parse error response";
pub const INVALID_DOCUMENT_ID: &str = "Document id is not a valid path segment";

/// Parse a 2xx body into a document record.
///
/// A success status with a body that doesn't match the document schema is a
/// contract violation by the downstream service, so it is a server failure.
pub fn parse_document(raw_body: &str) -> Result<DocumentRecord> {
    serde_json::from_str(raw_body).map_err(|e| {
        tracing::debug!(error = %e, "Document body did not match schema");
        DocumentError::ServerFailure(ERROR_PARSING_RESPONSE.to_string())
    })
}

/// Classify a non-success downstream response.
///
/// Only 400-499 with a readable error body is the caller's fault. Everything
/// else, including an unreadable body under any status, is a server failure.
pub fn classify(status: StatusCode, raw_body: &str) -> DocumentError {
    if status.is_success() {
        return DocumentError::ServerFailure(UNEXPECTED_STATUS.to_string());
    }

    let body: DownstreamErrorBody = match serde_json::from_str(raw_body) {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(status = status.as_u16(), error = %e, "Error body did not match schema");
            return DocumentError::ServerFailure(FAILED_TO_PARSE_ERROR_RESPONSE.to_string());
        }
    };

    match status.as_u16() {
        400..=499 => DocumentError::ClientFailure(body.message),
        _ => DocumentError::ServerFailure(body.message),
    }
}
