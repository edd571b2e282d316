//! Pixelcompare Core - before/after image comparison logic
//!
//! This crate provides the core functionality for the Pixelcompare widget:
//! rotating an image pair in 90-degree steps with correct dimension
//! swapping, computing the containment scale that keeps a rotated layer
//! inside a fixed viewport, and the presenter state that keeps both layers
//! registered under a draggable divider.

pub mod compare;
pub mod decode;
pub mod encode;
pub mod transform;

pub use compare::{CompareView, DisplayedPair, LayerTransform, RotationRequest};
pub use decode::{decode_raster, DecodeError, DecodedImage, ImageFormat, RasterImage};
pub use encode::{encode_raster, EncodeError};
pub use transform::{containment_scale, rotate, rotated_dimensions, Angle, RotateError};
