//! Error types produced by the annotation pipeline.
//!
//! Each pipeline stage fails with its own variant so the HTTP boundary can
//! report parse failures, undecodable uploads, and internal processing
//! failures distinctly instead of collapsing them into one catch-all.

use thiserror::Error;

/// Errors raised while turning an upload plus a point list into an annotated
/// JPEG.
///
/// All variants are cloneable and comparable so callers and tests can match
/// on exact failure kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnnotateError {
    /// The `points` payload did not deserialize into the expected
    /// `{"points": [{"x": .., "y": ..}]}` shape. The message carries the
    /// parser's description of the missing or invalid field.
    #[error("malformed points payload: {0}")]
    MalformedPoints(String),

    /// The uploaded bytes did not decode into an image.
    ///
    /// The display text is also the response body message, so it must stay
    /// exactly `Invalid image file.`.
    #[error("Invalid image file.")]
    InvalidImage,

    /// A stage after decoding failed (in practice: JPEG encoding).
    #[error("image processing failed: {0}")]
    Processing(String),
}
