//! Image rotation about the center in 90-degree steps.
//!
//! Quarter turns (0/90/180/270) are exact index remaps: every source pixel
//! moves to exactly one destination pixel, so no resampling loss occurs.
//! Any other residue falls through to a general center-pivoted inverse
//! mapping with bilinear sampling.
//!
//! # Algorithm
//!
//! The general path uses inverse mapping: for each pixel in the output
//! image, we calculate which source pixel(s) contribute to it and
//! interpolate their values.
//!
//! For a clockwise rotation by angle θ, the inverse transform is:
//! ```text
//! src_x = (dst_x - dst_cx) * cos(θ) + (dst_y - dst_cy) * sin(θ) + src_cx
//! src_y = -(dst_x - dst_cx) * sin(θ) + (dst_y - dst_cy) * cos(θ) + src_cy
//! ```
//!
//! # Canvas sizing
//!
//! The output canvas swaps width and height for 90/270 and keeps the source
//! dimensions for everything else, exactly matching how the widget sizes
//! its drawing surface. Non-quarter residues therefore clip at the corners;
//! they are mathematically permitted but not a supported display mode.

use thiserror::Error;

use crate::decode::{decode_raster, DecodeError, DecodedImage, RasterImage};
use crate::encode::{encode_raster, EncodeError};
use crate::transform::Angle;

/// Errors from the full rotate pipeline (decode, resample, re-encode).
///
/// Both variants are terminal for the request: the pipeline is
/// deterministic, so retrying with the same input cannot succeed.
#[derive(Debug, Error)]
pub enum RotateError {
    /// The source bytes could not be decoded as the declared format.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The rotated pixels could not be re-encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Compute the output dimensions for a rotation.
///
/// Dimensions swap when the normalized angle is 90 or 270 and are preserved
/// otherwise.
///
/// # Example
///
/// ```
/// use pixelcompare_core::transform::{rotated_dimensions, Angle};
///
/// let (w, h) = rotated_dimensions(1200, 800, Angle::from_degrees(90));
/// assert_eq!((w, h), (800, 1200));
///
/// let (w, h) = rotated_dimensions(1200, 800, Angle::from_degrees(180));
/// assert_eq!((w, h), (1200, 800));
/// ```
pub fn rotated_dimensions(width: u32, height: u32, angle: Angle) -> (u32, u32) {
    if angle.swaps_dimensions() {
        (height, width)
    } else {
        (width, height)
    }
}

/// Rotate decoded pixels about the image center.
///
/// Quarter turns are lossless; see the module docs for the general path.
/// The output dimensions follow [`rotated_dimensions`].
pub fn rotate_pixels(image: &DecodedImage, angle: Angle) -> DecodedImage {
    match angle.degrees() {
        0 => image.clone(),
        90 => rotate_quarter_cw(image),
        180 => rotate_half(image),
        270 => rotate_quarter_ccw(image),
        _ => rotate_general(image, angle),
    }
}

/// Exact 90-degree clockwise remap. Output is height x width.
fn rotate_quarter_cw(image: &DecodedImage) -> DecodedImage {
    let (src_w, src_h) = (image.width as usize, image.height as usize);
    let (dst_w, dst_h) = (src_h, src_w);
    let mut output = vec![0u8; dst_w * dst_h * 3];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Source column becomes destination row, reading bottom-up
            let src_x = dst_y;
            let src_y = src_h - 1 - dst_x;
            copy_pixel(image, src_x, src_y, &mut output, dst_y * dst_w + dst_x);
        }
    }

    DecodedImage::new(dst_w as u32, dst_h as u32, output)
}

/// Exact 180-degree remap. Dimensions are unchanged.
fn rotate_half(image: &DecodedImage) -> DecodedImage {
    let (w, h) = (image.width as usize, image.height as usize);
    let mut output = vec![0u8; w * h * 3];

    for dst_y in 0..h {
        for dst_x in 0..w {
            let src_x = w - 1 - dst_x;
            let src_y = h - 1 - dst_y;
            copy_pixel(image, src_x, src_y, &mut output, dst_y * w + dst_x);
        }
    }

    DecodedImage::new(image.width, image.height, output)
}

/// Exact 270-degree clockwise (90 CCW) remap. Output is height x width.
fn rotate_quarter_ccw(image: &DecodedImage) -> DecodedImage {
    let (src_w, src_h) = (image.width as usize, image.height as usize);
    let (dst_w, dst_h) = (src_h, src_w);
    let mut output = vec![0u8; dst_w * dst_h * 3];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let src_x = src_w - 1 - dst_y;
            let src_y = dst_x;
            copy_pixel(image, src_x, src_y, &mut output, dst_y * dst_w + dst_x);
        }
    }

    DecodedImage::new(dst_w as u32, dst_h as u32, output)
}

#[inline]
fn copy_pixel(image: &DecodedImage, src_x: usize, src_y: usize, output: &mut [u8], dst_idx: usize) {
    let src = (src_y * image.width as usize + src_x) * 3;
    let dst = dst_idx * 3;
    output[dst] = image.pixels[src];
    output[dst + 1] = image.pixels[src + 1];
    output[dst + 2] = image.pixels[src + 2];
}

/// General center-pivoted rotation with bilinear sampling.
///
/// The canvas keeps the source dimensions, so corners of the rotated image
/// fall outside it and out-of-canvas areas sample to black.
fn rotate_general(image: &DecodedImage, angle: Angle) -> DecodedImage {
    let (src_w, src_h) = (image.width as f64, image.height as f64);
    let (dst_w, dst_h) = rotated_dimensions(image.width, image.height, angle);

    // Inverse mapping rotates destination points back by the clockwise angle
    let angle_rad = angle.radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let dst_cx = f64::from(dst_w) / 2.0;
    let dst_cy = f64::from(dst_h) / 2.0;

    let mut output = vec![0u8; (dst_w * dst_h * 3) as usize];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let dx = f64::from(dst_x) - dst_cx;
            let dy = f64::from(dst_y) - dst_cy;

            let src_x = dx * cos + dy * sin + src_cx;
            let src_y = -dx * sin + dy * cos + src_cy;

            let dst_idx = ((dst_y * dst_w + dst_x) * 3) as usize;
            let pixel = sample_bilinear(image, src_x, src_y);

            output[dst_idx] = pixel[0];
            output[dst_idx + 1] = pixel[1];
            output[dst_idx + 2] = pixel[2];
        }
    }

    DecodedImage::new(dst_w, dst_h, output)
}

/// Get a pixel as [f64; 3] from an image at the given coordinates.
#[inline]
fn get_pixel_f64(image: &DecodedImage, px: usize, py: usize) -> [f64; 3] {
    let idx = (py * image.width as usize + px) * 3;
    [
        image.pixels[idx] as f64,
        image.pixels[idx + 1] as f64,
        image.pixels[idx + 2] as f64,
    ]
}

/// Sample a pixel using bilinear interpolation.
///
/// Bilinear interpolation considers the 4 nearest pixels and weights
/// their contribution based on distance.
fn sample_bilinear(image: &DecodedImage, x: f64, y: f64) -> [u8; 3] {
    let (w, h) = (image.width as i64, image.height as i64);

    // Check bounds - return black for out-of-bounds
    if x < 0.0 || x >= (w - 1) as f64 || y < 0.0 || y >= (h - 1) as f64 {
        return [0, 0, 0];
    }

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}

/// Rotate an encoded image, preserving its format tag.
///
/// This is the full pipeline the widget requests when a rotate button is
/// pressed: decode the source bytes, rotate the pixels about the center,
/// and re-encode in the source format.
///
/// A zero rotation without `force` returns the input unchanged - no decode
/// or re-encode happens, so no quality is lost and no work is done. Pass
/// `force = true` to re-encode anyway (e.g. to guarantee the output went
/// through this pipeline even at zero rotation).
///
/// # Errors
///
/// Returns `RotateError::Decode` if the source bytes are not a valid
/// raster of the declared format, and `RotateError::Encode` if the encoder
/// cannot produce output bytes. Callers should surface the error rather
/// than retry: the transform is deterministic.
pub fn rotate(image: &RasterImage, angle: Angle, force: bool) -> Result<RasterImage, RotateError> {
    // Identity short-circuit: zero rotation must not touch the bytes
    if angle == Angle::ZERO && !force {
        return Ok(image.clone());
    }

    let decoded = decode_raster(&image.bytes, image.format)?;
    let rotated = rotate_pixels(&decoded, angle);
    let bytes = encode_raster(&rotated, image.format)?;

    Ok(RasterImage::new(
        rotated.width,
        rotated.height,
        bytes,
        image.format,
    ))
}
