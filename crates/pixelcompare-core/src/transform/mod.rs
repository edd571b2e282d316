//! Geometric transforms for the compare widget: rotation and containment
//! scaling.
//!
//! Both halves are pure. Rotation produces a new image buffer from the
//! original source each time (never from a previously rotated output, to
//! avoid compounding re-encoding loss); containment scaling is a closed
//! formula over the viewport and the angle.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise (screen
//!   coordinates, matching the browser canvas)
//! - Origin is top-left corner

mod angle;
mod rotation;
mod scale;

pub use angle::Angle;
pub use rotation::{rotate, rotate_pixels, rotated_dimensions, RotateError};
pub use scale::containment_scale;
