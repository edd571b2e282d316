//! Raster encoding for the compare widget.
//!
//! Re-encodes rotated pixel data into the same format the source arrived
//! with (JPEG or PNG), so the format tag is preserved end to end.
//!
//! # Architecture
//!
//! Like decoding, encoding runs inside a Web Worker via the WASM bindings.
//! All operations are synchronous and single-threaded within WASM.

mod raster;

pub use raster::{encode_raster, EncodeError};
