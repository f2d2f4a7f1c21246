use serde::{Deserialize, Serialize};

/// Descriptive metadata for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub format: String,
}

/// Error payload returned by the downstream service on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownstreamErrorBody {
    pub error_code: String,
    pub message: String,
}
