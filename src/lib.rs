//! polymark - HTTP backend for polygon annotation previews
//!
//! This crate provides an HTTP server that overlays user-submitted polygon
//! coordinates onto uploaded images. It supports:
//!
//! - **Coordinate Validation**: Accepts an image plus an ordered vertex list
//!   and returns the image with the closed polygon stroked in green
//! - **Base64 Transport**: Results come back as base64-encoded JPEG, ready
//!   for a `data:image/jpeg;base64,` URL
//! - **Static Frontend**: Serves the bundled click-to-annotate page
//! - **Health Probes**: Liveness and readiness endpoints
//!
//! # Features
//!
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: Uniform `{"message": ...}` error responses
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use polymark::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     polymark::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /api/validate-coordinates` - Annotate an upload with its polygon
//! - `GET /` - Frontend index page
//! - `GET /static/*` - Frontend assets
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//!
//! See the README.md for complete documentation.

pub mod annotate;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use annotate::{AnnotateError, AnnotatedImage, Point, PointSet};
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::validate::ValidateResponse;
pub use server::{build_router, start_server};
pub use state::AppState;
