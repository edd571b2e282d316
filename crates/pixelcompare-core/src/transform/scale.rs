//! Containment scaling for rotated layers.
//!
//! Both layers of the compare widget are displayed aspect-fit ("contain")
//! inside the viewport before any rotation. Rotating them a quarter turn
//! swaps the box's effective width and height, so the turned box must be
//! shrunk to stay inside the original frame. The shrink factor depends only
//! on the viewport's own aspect ratio, never on the image content.

use crate::transform::Angle;

/// Compute the uniform scale factor that keeps a rotated, aspect-fit layer
/// fully inside the viewport.
///
/// Returns `1.0` for half-turn multiples (0/180): an aspect-fit image
/// already fills the frame it was fit into. For quarter turns (90/270) the
/// box that exactly filled the viewport is now turned on its side, and
/// refitting it needs a shrink of `min(w/h, h/w)`.
///
/// A degenerate viewport (either extent zero or negative) has no
/// containment problem and yields `1.0`; this is a defined default, not an
/// error.
///
/// The result is clamped to at most `1.0`. The derived ratio is already
/// <= 1, but the aspect-fit assumption is enforced by the host layer rather
/// than here, so the clamp stays.
///
/// # Example
///
/// ```
/// use pixelcompare_core::transform::{containment_scale, Angle};
///
/// let scale = containment_scale(800.0, 500.0, Angle::from_degrees(90));
/// assert_eq!(scale, 0.625);
/// ```
pub fn containment_scale(viewport_width: f64, viewport_height: f64, angle: Angle) -> f64 {
    if angle.is_half_turn_multiple() {
        return 1.0;
    }

    if viewport_width <= 0.0 || viewport_height <= 0.0 {
        return 1.0;
    }

    let ratio = (viewport_width / viewport_height).min(viewport_height / viewport_width);
    ratio.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deg(d: i32) -> Angle {
        Angle::from_degrees(d)
    }

    #[test]
    fn test_unrotated_is_unity() {
        assert_eq!(containment_scale(800.0, 500.0, deg(0)), 1.0);
        assert_eq!(containment_scale(800.0, 500.0, deg(180)), 1.0);
        assert_eq!(containment_scale(800.0, 500.0, deg(360)), 1.0);
        assert_eq!(containment_scale(800.0, 500.0, deg(-180)), 1.0);
    }

    #[test]
    fn test_landscape_viewport_quarter_turn() {
        // 800x500 at 90 degrees: min(800/500, 500/800) = 0.625
        assert_eq!(containment_scale(800.0, 500.0, deg(90)), 0.625);
        assert_eq!(containment_scale(800.0, 500.0, deg(270)), 0.625);
    }

    #[test]
    fn test_square_viewport_quarter_turn() {
        // A square frame refits its own quarter-turned box exactly
        assert_eq!(containment_scale(500.0, 500.0, deg(270)), 1.0);
        assert_eq!(containment_scale(500.0, 500.0, deg(90)), 1.0);
    }

    #[test]
    fn test_portrait_viewport_quarter_turn() {
        // Orientation of the viewport doesn't matter, only its ratio
        assert_eq!(containment_scale(500.0, 800.0, deg(90)), 0.625);
    }

    #[test]
    fn test_negative_angle_normalizes() {
        assert_eq!(containment_scale(800.0, 500.0, deg(-90)), 0.625);
    }

    #[test]
    fn test_degenerate_viewport_defaults_to_unity() {
        assert_eq!(containment_scale(0.0, 500.0, deg(90)), 1.0);
        assert_eq!(containment_scale(800.0, 0.0, deg(90)), 1.0);
        assert_eq!(containment_scale(0.0, 0.0, deg(90)), 1.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the factor is always in (0, 1] for positive viewports.
        #[test]
        fn prop_scale_in_unit_interval(
            width in 1.0f64..=10_000.0,
            height in 1.0f64..=10_000.0,
            degrees in -100_000i32..=100_000,
        ) {
            let scale = containment_scale(width, height, Angle::from_degrees(degrees));
            prop_assert!(scale > 0.0);
            prop_assert!(scale <= 1.0);
        }

        /// Property: half-turn multiples always yield 1.
        #[test]
        fn prop_half_turn_is_unity(
            width in 1.0f64..=10_000.0,
            height in 1.0f64..=10_000.0,
            half_turns in -100i32..=100,
        ) {
            let scale = containment_scale(width, height, Angle::from_degrees(half_turns * 180));
            prop_assert_eq!(scale, 1.0);
        }

        /// Property: quarter turns yield exactly min(w/h, h/w).
        #[test]
        fn prop_quarter_turn_is_aspect_ratio(
            width in 1.0f64..=10_000.0,
            height in 1.0f64..=10_000.0,
            quarter in prop_oneof![Just(90i32), Just(270)],
        ) {
            let scale = containment_scale(width, height, Angle::from_degrees(quarter));
            let expected = (width / height).min(height / width);
            prop_assert_eq!(scale, expected);
        }

        /// Property: the factor never depends on which edge is longer.
        #[test]
        fn prop_symmetric_in_viewport_edges(
            width in 1.0f64..=10_000.0,
            height in 1.0f64..=10_000.0,
            degrees in -720i32..=720,
        ) {
            let a = containment_scale(width, height, Angle::from_degrees(degrees));
            let b = containment_scale(height, width, Angle::from_degrees(degrees));
            prop_assert_eq!(a, b);
        }
    }
}
