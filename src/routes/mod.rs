//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the polymark
//! server. Routes are organized by functionality:
//!
//! - `health`: Health checks and readiness
//! - `validate`: Coordinate validation and image annotation
//!
//! The frontend routes (`/` and `/static/*`) are plain file services and are
//! wired directly in [`crate::server`].

pub mod health;
pub mod validate;

use crate::error::ApiError;

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
