//! WASM bindings for the geometric transforms.
//!
//! This module exposes the rotation pipeline and the containment scaler to
//! JavaScript. Rotation is the only long-running call and is expected to be
//! invoked from a Web Worker; the scaler is a cheap pure function safe to
//! call on every resize event.

use crate::types::JsRasterImage;
use pixelcompare_core::transform::{
    containment_scale as core_scale, rotate as core_rotate, Angle,
};
use wasm_bindgen::prelude::*;

/// Rotate an encoded image by a multiple of 90 degrees.
///
/// The output keeps the source's MIME type; its dimensions are swapped for
/// 90/270 and preserved for 0/180. A zero rotation without `force` returns
/// the input bytes untouched (no decode or re-encode). Negative degrees
/// wrap: `-90` behaves as `270`.
///
/// # Errors
///
/// Returns an error if the source bytes cannot be decoded as their
/// declared format, or the rotated pixels cannot be re-encoded. Retrying
/// with the same input will not succeed; the pipeline is deterministic.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const src = new JsRasterImage(1200, 800, bytes, file.type);
/// const rotated = rotate_image(src, -90, false);
/// // rotated.width === 800, rotated.height === 1200
/// ```
#[wasm_bindgen]
pub fn rotate_image(
    image: &JsRasterImage,
    degrees: i32,
    force: bool,
) -> Result<JsRasterImage, JsValue> {
    core_rotate(image.as_raster(), Angle::from_degrees(degrees), force)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compute the scale factor that keeps a rotated, aspect-fit layer inside
/// the viewport.
///
/// Returns `1.0` for half-turn multiples and degenerate viewports, and
/// `min(w/h, h/w)` for quarter turns. Always in `(0, 1]`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const { width, height } = container.getBoundingClientRect();
/// const scale = containment_scale(width, height, rotation);
/// layer.style.transform = `rotate(${rotation}deg) scale(${scale})`;
/// ```
#[wasm_bindgen]
pub fn containment_scale(viewport_width: f64, viewport_height: f64, degrees: i32) -> f64 {
    core_scale(viewport_width, viewport_height, Angle::from_degrees(degrees))
}

/// Normalize any integer degree value into `[0, 360)`.
#[wasm_bindgen]
pub fn normalize_degrees(degrees: i32) -> u16 {
    Angle::from_degrees(degrees).degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containment_scale_landscape() {
        assert_eq!(containment_scale(800.0, 500.0, 90), 0.625);
        assert_eq!(containment_scale(800.0, 500.0, -90), 0.625);
    }

    #[test]
    fn test_containment_scale_half_turns() {
        assert_eq!(containment_scale(800.0, 500.0, 0), 1.0);
        assert_eq!(containment_scale(800.0, 500.0, 180), 1.0);
    }

    #[test]
    fn test_containment_scale_square_viewport() {
        assert_eq!(containment_scale(500.0, 500.0, 270), 1.0);
    }

    #[test]
    fn test_containment_scale_degenerate_viewport() {
        assert_eq!(containment_scale(0.0, 500.0, 90), 1.0);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(-90), 270);
        assert_eq!(normalize_degrees(450), 90);
        assert_eq!(normalize_degrees(0), 0);
        assert_eq!(normalize_degrees(360), 0);
    }
}
