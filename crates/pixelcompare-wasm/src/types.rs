//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Pixelcompare types, handling the conversion between Rust and JavaScript
//! data representations.

use pixelcompare_core::{ImageFormat, RasterImage};
use wasm_bindgen::prelude::*;

/// An encoded image wrapper for JavaScript.
///
/// Wraps the core `RasterImage` type: encoded bytes (JPEG or PNG) plus the
/// MIME tag and pixel dimensions. This is what the widget hands in when
/// requesting a rotation and what it gets back to turn into an object URL.
///
/// # Memory Management
///
/// The encoded bytes live in WASM memory. `bytes()` copies them out to a
/// `Uint8Array`; call `free()` to release the WASM side eagerly, or let
/// wasm-bindgen's finalizer handle it.
#[wasm_bindgen]
pub struct JsRasterImage {
    inner: RasterImage,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a new JsRasterImage from dimensions, encoded bytes, and a
    /// MIME type string (e.g. `File.type`).
    ///
    /// # Errors
    ///
    /// Returns an error for MIME types other than `image/jpeg` and
    /// `image/png`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, bytes: Vec<u8>, mime: &str) -> Result<JsRasterImage, JsValue> {
        let format = ImageFormat::from_mime(mime)
            .ok_or_else(|| JsValue::from_str(&format!("Unsupported image MIME type: {mime}")))?;
        Ok(JsRasterImage {
            inner: RasterImage::new(width, height, bytes, format),
        })
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of encoded bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// The MIME type the bytes are encoded as
    #[wasm_bindgen(getter)]
    pub fn mime(&self) -> String {
        self.inner.format.mime().to_string()
    }

    /// Returns the encoded bytes as a Uint8Array.
    ///
    /// Note: this copies the data out of WASM memory.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRasterImage {
    /// Create a JsRasterImage from a core RasterImage.
    pub(crate) fn from_raster(inner: RasterImage) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped core image.
    pub(crate) fn as_raster(&self) -> &RasterImage {
        &self.inner
    }

    /// Unwrap into the core image.
    pub(crate) fn into_raster(self) -> RasterImage {
        self.inner
    }
}
