//! API route handlers
//!
//! - `upload`: the `/upload` feature normalization endpoint
//! - `health`: liveness probe

pub mod health;
pub mod upload;

use crate::error::ServerError;

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
