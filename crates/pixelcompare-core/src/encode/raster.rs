//! Raster encoding preserving the source format tag.
//!
//! JPEG output uses the `image` crate's JPEG encoder at a fixed quality;
//! PNG output is lossless. The rotation pipeline calls this with the same
//! `ImageFormat` the source arrived with.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::{DecodedImage, ImageFormat};

/// JPEG quality used for rotated output.
///
/// 90 keeps re-encoding loss low while staying close to the file sizes the
/// browser's own canvas encoder produces.
const JPEG_QUALITY: u8 = 90;

/// Errors that can occur during raster encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder could not materialize output bytes
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGB pixel data into the given format.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for a zero-sized image,
/// `EncodeError::InvalidPixelData` if the buffer length doesn't match the
/// dimensions, and `EncodeError::EncodingFailed` if the underlying encoder
/// reports an error.
pub fn encode_raster(image: &DecodedImage, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected_len = (image.width as usize) * (image.height as usize) * 3;
    if image.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: image.pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());

    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
            encoder
                .write_image(
                    &image.pixels,
                    image.width,
                    image.height,
                    ExtendedColorType::Rgb8,
                )
                .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
        }
        ImageFormat::Png => {
            let encoder = PngEncoder::new(&mut buffer);
            encoder
                .write_image(
                    &image.pixels,
                    image.width,
                    image.height,
                    ExtendedColorType::Rgb8,
                )
                .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
        }
    }

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_image(width: u32, height: u32) -> DecodedImage {
        DecodedImage::new(width, height, vec![128u8; (width * height * 3) as usize])
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let jpeg = encode_raster(&gray_image(100, 100), ImageFormat::Jpeg).unwrap();

        // SOI and EOI markers
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        let len = jpeg.len();
        assert_eq!(&jpeg[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_png_basic() {
        let png = encode_raster(&gray_image(100, 100), ImageFormat::Png).unwrap();

        // PNG signature
        assert_eq!(&png[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_invalid_pixel_data_short() {
        let img = DecodedImage {
            width: 100,
            height: 100,
            pixels: vec![128u8; 99 * 100 * 3], // One row short
        };
        let result = encode_raster(&img, ImageFormat::Jpeg);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_invalid_pixel_data_long() {
        let img = DecodedImage {
            width: 100,
            height: 100,
            pixels: vec![128u8; 101 * 100 * 3], // One row extra
        };
        let result = encode_raster(&img, ImageFormat::Png);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_zero_dimensions() {
        let img = DecodedImage {
            width: 0,
            height: 100,
            pixels: vec![],
        };
        let result = encode_raster(&img, ImageFormat::Jpeg);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));

        let img = DecodedImage {
            width: 100,
            height: 0,
            pixels: vec![],
        };
        let result = encode_raster(&img, ImageFormat::Png);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_single_pixel() {
        let img = DecodedImage::new(1, 1, vec![255, 0, 0]);

        let jpeg = encode_raster(&img, ImageFormat::Jpeg).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

        let png = encode_raster(&img, ImageFormat::Png).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn test_encode_non_square() {
        assert!(encode_raster(&gray_image(200, 50), ImageFormat::Jpeg).is_ok());
        assert!(encode_raster(&gray_image(50, 200), ImageFormat::Png).is_ok());
    }

    #[test]
    fn test_png_round_trips_losslessly() {
        use crate::decode::decode_raster;

        let mut pixels = Vec::with_capacity(8 * 4 * 3);
        for i in 0..(8 * 4) {
            pixels.push((i * 7 % 256) as u8);
            pixels.push((i * 13 % 256) as u8);
            pixels.push((i * 29 % 256) as u8);
        }
        let img = DecodedImage::new(8, 4, pixels);

        let png = encode_raster(&img, ImageFormat::Png).unwrap();
        let decoded = decode_raster(&png, ImageFormat::Png).unwrap();
        assert_eq!(decoded, img);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
