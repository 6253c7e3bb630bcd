//! The annotation pipeline.
//!
//! Turns an uploaded image plus an ordered list of polygon vertices into a
//! JPEG with the closed polygon stroked on top. The pipeline runs
//! synchronously inside one request and owns every buffer it touches; nothing
//! is shared or retained across requests.

pub mod codec;
pub mod draw;
pub mod error;
pub mod geometry;

pub use error::AnnotateError;
pub use geometry::{Point, PointSet};

/// The result of a successful [`annotate`] run.
#[derive(Debug, Clone)]
pub struct AnnotatedImage {
    /// JPEG-encoded pixels, ready for base64 transport.
    pub jpeg: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl AnnotatedImage {
    /// Standard base64 of the JPEG bytes, for embedding in a JSON response.
    pub fn to_base64(&self) -> String {
        codec::to_base64(&self.jpeg)
    }
}

/// Runs the full pipeline over one upload.
///
/// Stages: decode the byte stream to RGB, truncate the point coordinates to
/// pixel positions, stroke the closed polygon in place, re-encode as JPEG.
/// Each stage reports its own [`AnnotateError`] kind; there is no partial
/// output. An empty point set is valid and returns the re-encoded image
/// unmarked.
pub fn annotate(image_bytes: &[u8], points: &PointSet) -> Result<AnnotatedImage, AnnotateError> {
    let mut image = codec::decode_rgb(image_bytes)?;
    let vertices = points.pixel_vertices();
    draw::stroke_closed_polygon(&mut image, &vertices);
    let jpeg = codec::encode_jpeg(&image)?;

    Ok(AnnotatedImage {
        width: image.width(),
        height: image.height(),
        jpeg,
    })
}
