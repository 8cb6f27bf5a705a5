use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use featnorm::ConfigLoadError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
///
/// Every variant renders as a plain-text body holding its `Display` message.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The `feature` form field is missing or the body is not multipart.
    #[error("Unable to retrieve file")]
    RetrieveFile,

    /// The `feature` field was found but its body could not be read.
    #[error("Unable to read file")]
    ReadFile,

    #[error("Invalid request method.")]
    MethodNotAllowed,

    #[error("Payload too large: max {0} bytes allowed")]
    PayloadTooLarge(usize),

    #[error("Not found")]
    NotFound,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::RetrieveFile => StatusCode::BAD_REQUEST,
            ServerError::ReadFile => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

impl From<ConfigLoadError> for ServerError {
    fn from(err: ConfigLoadError) -> Self {
        ServerError::Config(err.to_string())
    }
}
