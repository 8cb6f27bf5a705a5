//! featnorm Server - HTTP upload service for Gherkin feature normalization
//!
//! Upload a `.feature` file, get it back with the steps every scenario shares
//! moved into one `Background:` block and every step carrying an explicit
//! Given/When/Then keyword.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /upload` - multipart form with a `feature` file field; responds
//!   with normalized Gherkin as `text/plain`
//! - `GET /health` - liveness probe
//!
//! # Errors
//!
//! | Status | Body | When |
//! |--------|------|------|
//! | 400 | `Unable to retrieve file` | no `feature` field, or not a multipart body |
//! | 405 | `Invalid request method.` | any method but POST on `/upload` |
//! | 413 | `Payload too large: ...` | body over `max_body_size_mb` |
//! | 500 | `Unable to read file` | the `feature` field body failed mid-read |

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
