//! Normalized rotation angles.
//!
//! All rotation state in the widget is an integer number of degrees reduced
//! to `[0, 360)`. The rotate buttons only ever produce multiples of 90, but
//! normalization accepts any integer so callers never have to pre-reduce.

use serde::{Deserialize, Serialize};

/// A rotation angle in degrees, normalized to the range `[0, 360)`.
///
/// Construction always normalizes, so two `Angle`s compare equal whenever
/// they describe the same rotation (`-90` and `270`, `450` and `90`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Angle(u16);

impl Angle {
    /// The zero rotation (reset target).
    pub const ZERO: Angle = Angle(0);

    /// Create an angle from any integer number of degrees.
    ///
    /// Negative inputs wrap correctly: `-90` normalizes to `270`.
    pub fn from_degrees(degrees: i32) -> Self {
        Angle((((degrees % 360) + 360) % 360) as u16)
    }

    /// The normalized value in `[0, 360)`.
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// The angle in radians, clockwise-positive (screen coordinates).
    pub fn radians(self) -> f64 {
        f64::from(self.0).to_radians()
    }

    /// Returns true if rotating by this angle swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self.0, 90 | 270)
    }

    /// Returns true for 0 and 180, the angles that leave an aspect-fit
    /// image within its viewport without extra shrinking.
    #[inline]
    pub fn is_half_turn_multiple(self) -> bool {
        self.0 % 180 == 0
    }

    /// One rotate-right step (+90), wrapping through normalization.
    pub fn rotated_right(self) -> Self {
        Self::from_degrees(i32::from(self.0) + 90)
    }

    /// One rotate-left step (-90), wrapping through normalization.
    pub fn rotated_left(self) -> Self {
        Self::from_degrees(i32::from(self.0) - 90)
    }
}
