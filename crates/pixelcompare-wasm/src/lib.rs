//! Pixelcompare WASM - WebAssembly bindings for Pixelcompare
//!
//! This crate exposes the pixelcompare-core functionality to the
//! JavaScript/TypeScript widget.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for encoded image data
//! - `transform` - Rotation pipeline and containment scaler bindings
//! - `compare` - The compare presenter exported as a JS class
//!
//! # Usage
//!
//! ```typescript
//! import init, { CompareView, JsRasterImage, rotate_image } from '@pixelcompare/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const view = new CompareView();
//! view.set_viewport(rect.width, rect.height);
//!
//! const ticket = view.rotate_right();
//! const before = rotate_image(beforeImage, ticket.angle_degrees, false);
//! const after = rotate_image(afterImage, ticket.angle_degrees, false);
//! view.complete(ticket, before, after);
//! ```

use wasm_bindgen::prelude::*;

mod compare;
mod transform;
mod types;

// Re-export public types
pub use compare::{CompareView, JsRotationRequest};
pub use transform::{containment_scale, normalize_degrees, rotate_image};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
