use crate::annotate::{self, PointSet};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Confirmation text returned with every successful annotation
pub const COORDINATES_VALID: &str = "Coordinates are valid.";

/// Response from a successful coordinate validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// Always [`COORDINATES_VALID`] on success
    pub message: String,

    /// Annotated image as base64-encoded JPEG, ready for a
    /// `data:image/jpeg;base64,` URL
    pub image: String,
}

/// Validate submitted polygon coordinates against an uploaded image.
///
/// This endpoint runs the upload through the annotation pipeline: decode →
/// stroke the closed polygon → re-encode as JPEG → base64.
///
/// # Multipart Fields
/// - `file`: the image bytes (any format the codec can sniff: PNG, JPEG, WebP, ...)
/// - `points`: JSON text shaped `{"points": [{"x": 10, "y": 20}, ...]}`
///
/// Fields may arrive in any order; unknown fields are ignored. The polygon is
/// closed automatically (the last point connects back to the first) and
/// stroked in green at a fixed 2 px thickness. Fractional coordinates
/// truncate toward zero before drawing; points outside the canvas are
/// clipped.
///
/// # Example
/// ```json
/// // Response
/// {
///   "message": "Coordinates are valid.",
///   "image": "/9j/4AAQSkZJRg..."
/// }
/// ```
pub async fn validate_coordinates(
    State(_state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<ValidateResponse>> {
    let mut file_bytes: Option<Bytes> = None;
    let mut points_text: Option<String> = None;

    // Collect the two expected fields from the form
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(format!("unreadable multipart body: {err}")))?
    {
        match field.name() {
            Some("file") => {
                file_bytes = Some(field.bytes().await.map_err(|err| {
                    ApiError::BadRequest(format!("unreadable `file` field: {err}"))
                })?);
            }
            Some("points") => {
                points_text = Some(field.text().await.map_err(|err| {
                    ApiError::BadRequest(format!("unreadable `points` field: {err}"))
                })?);
            }
            _ => continue,
        }
    }

    let file_bytes = file_bytes
        .ok_or_else(|| ApiError::BadRequest("missing multipart field `file`".to_string()))?;
    let points_text = points_text
        .ok_or_else(|| ApiError::BadRequest("missing multipart field `points`".to_string()))?;

    // Parse the vertex list
    let points = PointSet::from_json(&points_text)?;
    tracing::debug!(count = points.len(), "received polygon points");

    // Run the annotation pipeline
    let annotated = annotate::annotate(&file_bytes, &points)?;
    tracing::debug!(
        width = annotated.width,
        height = annotated.height,
        jpeg_bytes = annotated.jpeg.len(),
        "annotated image encoded"
    );

    Ok(Json(ValidateResponse {
        message: COORDINATES_VALID.to_string(),
        image: annotated.to_base64(),
    }))
}
