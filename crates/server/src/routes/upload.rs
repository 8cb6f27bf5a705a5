//! `/upload`: normalize one uploaded feature file.
//!
//! The request is a `multipart/form-data` body with the file in a field
//! named `feature`. The response is the normalized Gherkin as plain text.
//! Text that is not valid Gherkin is not an error; it comes back as a bare
//! `Feature:` header.

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

/// Form field carrying the feature file.
pub const FEATURE_FIELD: &str = "feature";

/// Upload handler for `POST /upload`.
pub async fn upload_feature(
    State(state): State<Arc<ServerState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ServerResult<impl IntoResponse> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::warn!(error = %rejection, "upload.not_multipart");
        ServerError::RetrieveFile
    })?;

    let bytes = read_feature_field(&mut multipart, state.config.max_body_size()).await?;
    let text = String::from_utf8_lossy(&bytes);
    let output = featnorm::process_text(&text, &state.pipeline);

    tracing::info!(
        input_bytes = bytes.len(),
        output_bytes = output.len(),
        "upload.normalized"
    );

    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], output))
}

/// Any method other than POST on `/upload`.
pub async fn invalid_method() -> ServerError {
    ServerError::MethodNotAllowed
}

/// Skips fields until `feature` is found and reads its whole body.
async fn read_feature_field(multipart: &mut Multipart, limit: usize) -> ServerResult<Bytes> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                tracing::warn!("upload.missing_field");
                return Err(ServerError::RetrieveFile);
            }
            Err(err) => return Err(field_error(err, limit, ServerError::RetrieveFile)),
        };

        if field.name() == Some(FEATURE_FIELD) {
            return field
                .bytes()
                .await
                .map_err(|err| field_error(err, limit, ServerError::ReadFile));
        }
    }
}

/// Body-limit failures become 413; everything else becomes `fallback`.
fn field_error(err: MultipartError, limit: usize, fallback: ServerError) -> ServerError {
    tracing::warn!(error = %err, "upload.multipart_error");
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge(limit)
    } else {
        fallback
    }
}
