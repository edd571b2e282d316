//! Raster decoding for the compare widget.
//!
//! This module turns the encoded bytes the browser hands us (JPEG or PNG,
//! tagged with their MIME type) into RGB pixel data the transform pipeline
//! can operate on.
//!
//! # Architecture
//!
//! The pipeline is designed to be used from Web Workers via WASM bindings.
//! All operations are synchronous and single-threaded within WASM; the host
//! treats each call as one suspending unit of work.
//!
//! JPEG sources get EXIF orientation correction on decode, so an explicit
//! rotation request always starts from an upright image.

mod raster;
mod types;

pub use raster::decode_raster;
pub use types::{DecodeError, DecodedImage, ImageFormat, Orientation, RasterImage};
