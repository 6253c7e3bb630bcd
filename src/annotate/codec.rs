//! Image byte-stream decoding and encoding.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::{ImageFormat, RgbImage};

use super::error::AnnotateError;

/// Decodes an uploaded byte stream into an owned 8-bit RGB buffer.
///
/// The container format is sniffed from the bytes, so any format the codec
/// supports is accepted regardless of the declared content type. The result
/// is always three channels; an alpha channel is discarded.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, AnnotateError> {
    let decoded = image::load_from_memory(bytes).map_err(|err| {
        tracing::debug!(error = %err, "image decode failed");
        AnnotateError::InvalidImage
    })?;
    Ok(decoded.to_rgb8())
}

/// Encodes the buffer as JPEG at the codec's default quality.
pub fn encode_jpeg(image: &RgbImage) -> Result<Vec<u8>, AnnotateError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .map_err(|err| AnnotateError::Processing(format!("jpeg encoding failed: {err}")))?;
    Ok(bytes)
}

/// Standard base64 (with padding), suitable for embedding in a JSON string.
pub fn to_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    fn png_bytes(image: &RgbImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn decodes_png_to_rgb() {
        let source = RgbImage::from_pixel(12, 8, Rgb([200, 100, 50]));
        let decoded = decode_rgb(&png_bytes(&source)).unwrap();
        assert_eq!(decoded.dimensions(), (12, 8));
        assert_eq!(*decoded.get_pixel(3, 3), Rgb([200, 100, 50]));
    }

    #[test]
    fn decodes_rgba_png_dropping_alpha() {
        let source = RgbaImage::from_pixel(6, 6, Rgba([10, 20, 30, 128]));
        let mut bytes = Vec::new();
        source
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let decoded = decode_rgb(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (6, 6));
        assert_eq!(*decoded.get_pixel(0, 0), Rgb([10, 20, 30]));
    }

    #[test]
    fn rejects_non_image_bytes() {
        let err = decode_rgb(b"definitely not an image").unwrap_err();
        assert_eq!(err, AnnotateError::InvalidImage);
    }

    #[test]
    fn rejects_empty_upload() {
        assert_eq!(decode_rgb(&[]).unwrap_err(), AnnotateError::InvalidImage);
    }

    #[test]
    fn rejects_truncated_png() {
        let full = png_bytes(&RgbImage::from_pixel(16, 16, Rgb([1, 2, 3])));
        let err = decode_rgb(&full[..full.len() / 2]).unwrap_err();
        assert_eq!(err, AnnotateError::InvalidImage);
    }

    #[test]
    fn encodes_jpeg_magic_bytes() {
        let image = RgbImage::from_pixel(20, 20, Rgb([0, 0, 255]));
        let jpeg = encode_jpeg(&image).unwrap();
        assert_eq!(image::guess_format(&jpeg).unwrap(), ImageFormat::Jpeg);
        // Encoded output decodes back at the same dimensions.
        assert_eq!(decode_rgb(&jpeg).unwrap().dimensions(), (20, 20));
    }

    #[test]
    fn base64_is_standard_alphabet_with_padding() {
        assert_eq!(to_base64(b"polymark"), "cG9seW1hcms=");
    }
}
