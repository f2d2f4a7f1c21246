use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use document_client::{DocumentError, DocumentRecord};

use crate::AppState;

pub const CLIENT_ERROR_BODY: &str = "Client error occurred";
pub const SERVER_ERROR_BODY: &str = "Server error occurred";
pub const UNAVAILABLE_BODY: &str = "Downstream service unavailable";

/// A downstream failure on its way out to the caller.
///
/// Every variant becomes a 502 with a fixed body. The downstream message is
/// logged here and never written to the response.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct GatewayError(#[from] DocumentError);

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = match &self.0 {
            DocumentError::ClientFailure(message) => {
                warn!(%message, "Client error");
                CLIENT_ERROR_BODY
            }
            DocumentError::ServerFailure(message) => {
                error!(%message, "Server error");
                SERVER_ERROR_BODY
            }
            DocumentError::Transport(message) => {
                error!(%message, "Downstream unreachable");
                UNAVAILABLE_BODY
            }
        };
        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}

pub async fn api_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DocumentRecord>, GatewayError> {
    let doc = state.documents.fetch(&id).await?;
    Ok(Json(doc))
}
