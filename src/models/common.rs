use serde::Serialize;

/// Body of every non-2xx response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Acknowledgement for requests that return no record
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
