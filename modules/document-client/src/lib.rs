pub mod classify;
pub mod error;
pub mod types;

pub use classify::{
    classify, parse_document, ERROR_PARSING_RESPONSE, FAILED_TO_PARSE_ERROR_RESPONSE,
    INVALID_DOCUMENT_ID, UNEXPECTED_STATUS,
};
pub use error::{DocumentError, InvalidBaseUrl, Result};
pub use types::{DocumentRecord, DownstreamErrorBody};

use reqwest::Url;

/// Client for the downstream document metadata API.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone)]
pub struct DocumentClient {
    client: reqwest::Client,
    base_url: Url,
}

impl DocumentClient {
    pub fn new(base_url: &str) -> std::result::Result<Self, InvalidBaseUrl> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(
        client: reqwest::Client,
        base_url: &str,
    ) -> std::result::Result<Self, InvalidBaseUrl> {
        let trimmed = base_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed)
            .map_err(|e| InvalidBaseUrl(format!("{trimmed}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(InvalidBaseUrl(format!("{trimmed}: not a hierarchical URL")));
        }
        Ok(Self { client, base_url })
    }

    /// Build `{base}/documents/{id}` with the id as a single percent-encoded
    /// path segment. Empty ids are forwarded; `.` and `..` can't be expressed
    /// as a segment and are rejected.
    pub fn document_url(&self, document_id: &str) -> Result<Url> {
        if matches!(document_id, "." | "..") {
            return Err(DocumentError::ClientFailure(INVALID_DOCUMENT_ID.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DocumentError::ClientFailure(INVALID_DOCUMENT_ID.to_string()))?
            .pop_if_empty()
            .push("documents")
            .push(document_id);
        Ok(url)
    }

    /// Fetch metadata for a single document.
    pub async fn fetch(&self, document_id: &str) -> Result<DocumentRecord> {
        let url = self.document_url(document_id)?;
        tracing::debug!(%url, "Fetching document");

        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let err = classify(status, &body);
            tracing::debug!(
                document_id,
                status = status.as_u16(),
                error = %err,
                "Downstream document request failed"
            );
            return Err(err);
        }

        let doc = parse_document(&body)?;
        tracing::debug!(document_id, name = %doc.name, "Fetched document");
        Ok(doc)
    }
}
