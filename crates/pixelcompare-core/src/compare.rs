//! Before/after compare presenter.
//!
//! `CompareView` owns the state the widget shares between its layers: the
//! divider position, the logical rotation angle, the containment scale, and
//! the currently displayed rotated image pair. The two pure transforms stay
//! stateless; everything mutable lives here.
//!
//! # Rotation requests
//!
//! Rotating means decoding and re-encoding two images, which the host runs
//! off the main thread. The presenter hands out a sequenced
//! [`RotationRequest`] per button press and installs a finished pair only
//! when its ticket is still the newest one issued. A result that arrives
//! after a newer request has been made is discarded, so a slow earlier
//! rotation can never overwrite a fresher one. There is no cancel
//! primitive; superseded work is simply ignored on completion.
//!
//! Rotated variants are always derived from the retained original pair,
//! never from a previously rotated output, so repeated rotations do not
//! compound re-encoding loss.

use serde::{Deserialize, Serialize};

use crate::decode::RasterImage;
use crate::transform::{containment_scale, Angle};

/// Default divider position: centered.
const DEFAULT_DIVIDER_PERCENT: f64 = 50.0;

/// The visual transform shared by both layers.
///
/// Applied identically to "before" and "after" so they stay pixel-aligned
/// under the divider clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerTransform {
    /// Rotation in degrees, normalized to [0, 360).
    pub angle: Angle,
    /// Containment scale in (0, 1].
    pub scale: f64,
}

/// A sequenced ticket for one rotation request.
///
/// The holder performs the actual rotation (both layers, from the original
/// sources, at `angle`) and hands the result back through
/// [`CompareView::complete`] together with this ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationRequest {
    seq: u32,
    angle: Angle,
}

impl RotationRequest {
    /// The angle both layers must be rotated to.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// The request's position in the issue order.
    pub fn seq(&self) -> u32 {
        self.seq
    }
}

/// The rotated pair currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedPair {
    /// Angle the pair was rendered at.
    pub angle: Angle,
    /// Rotated "before" layer.
    pub before: RasterImage,
    /// Rotated "after" layer.
    pub after: RasterImage,
}

/// State holder for the compare widget.
#[derive(Debug, Clone)]
pub struct CompareView {
    /// Divider position as a percentage of the viewport width, in [0, 100].
    position: f64,
    /// True while a press-and-hold gesture is active on the divider.
    dragging: bool,
    viewport_width: f64,
    viewport_height: f64,
    /// Logical angle: updated immediately on every rotate/reset request.
    angle: Angle,
    scale: f64,
    /// Original, unrotated sources. Rotations always re-derive from these.
    sources: Option<(RasterImage, RasterImage)>,
    displayed: Option<DisplayedPair>,
    /// Sequence of the newest rotation request issued.
    issued: u32,
    /// Sequence of the newest request that completed or failed.
    settled: u32,
}

impl Default for CompareView {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareView {
    pub fn new() -> Self {
        Self {
            position: DEFAULT_DIVIDER_PERCENT,
            dragging: false,
            viewport_width: 0.0,
            viewport_height: 0.0,
            angle: Angle::ZERO,
            scale: 1.0,
            sources: None,
            displayed: None,
            issued: 0,
            settled: 0,
        }
    }

    /// Install a new before/after source pair.
    ///
    /// Resets the rotation state: the logical angle returns to zero and the
    /// originals are displayed as-is. Any in-flight rotation for the old
    /// pair becomes stale because the sequence advances.
    pub fn set_sources(&mut self, before: RasterImage, after: RasterImage) {
        self.angle = Angle::ZERO;
        self.scale = self.current_scale();
        self.issued += 1;
        self.settled = self.issued;
        self.displayed = Some(DisplayedPair {
            angle: Angle::ZERO,
            before: before.clone(),
            after: after.clone(),
        });
        self.sources = Some((before, after));
    }

    /// The retained original pair, if sources have been set.
    pub fn sources(&self) -> Option<&(RasterImage, RasterImage)> {
        self.sources.as_ref()
    }

    /// The rotated pair currently on screen.
    pub fn displayed(&self) -> Option<&DisplayedPair> {
        self.displayed.as_ref()
    }

    // ----- divider -----

    /// Divider position in percent of viewport width.
    pub fn divider_percent(&self) -> f64 {
        self.position
    }

    /// Clip boundary for the "before" layer: it stays visible from the left
    /// edge up to exactly this percentage.
    pub fn before_clip_percent(&self) -> f64 {
        self.position
    }

    /// Set the divider position directly, clamped to [0, 100].
    pub fn set_position(&mut self, percent: f64) {
        self.position = percent.clamp(0.0, 100.0);
    }

    /// Start a press-and-hold gesture on the divider.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// End the gesture. Further pointer movement is ignored.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// True while a press-and-hold gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Track a pointer position during a drag.
    ///
    /// `x` is the pointer offset from the viewport's left edge and `width`
    /// the viewport width, both in pixels. Movement outside an active
    /// gesture is ignored, as is a degenerate width.
    pub fn drag_to(&mut self, x: f64, width: f64) {
        if !self.dragging || width <= 0.0 {
            return;
        }
        let x = x.clamp(0.0, width);
        self.position = (x / width) * 100.0;
    }

    // ----- viewport and scale -----

    /// Update the viewport dimensions (call on every resize event).
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.scale = self.current_scale();
    }

    /// The containment scale for the current viewport and angle.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The logical rotation angle (tracks requests, not completions).
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// The rotate+scale transform applied identically to both layers so
    /// they stay registered under the clip.
    pub fn layer_transform(&self) -> LayerTransform {
        LayerTransform {
            angle: self.angle,
            scale: self.scale,
        }
    }

    fn current_scale(&self) -> f64 {
        containment_scale(self.viewport_width, self.viewport_height, self.angle)
    }

    // ----- rotation requests -----

    /// Request a rotate-right step (+90).
    pub fn rotate_right(&mut self) -> RotationRequest {
        self.request(self.angle.rotated_right())
    }

    /// Request a rotate-left step (-90).
    pub fn rotate_left(&mut self) -> RotationRequest {
        self.request(self.angle.rotated_left())
    }

    /// Request a reset to zero rotation.
    pub fn reset(&mut self) -> RotationRequest {
        self.request(Angle::ZERO)
    }

    fn request(&mut self, angle: Angle) -> RotationRequest {
        self.angle = angle;
        self.scale = self.current_scale();
        self.issued += 1;
        RotationRequest {
            seq: self.issued,
            angle,
        }
    }

    /// True while the newest request has neither completed nor failed.
    ///
    /// Drives the disabled flag on the external rotate/reset controls.
    pub fn is_rotating(&self) -> bool {
        self.settled < self.issued
    }

    /// Install a finished rotation if its ticket is still the newest.
    ///
    /// Returns `true` if the pair was installed, `false` if the request was
    /// superseded and the result discarded (latest-request-wins). The
    /// displayed angle and pair update as a single transition.
    pub fn complete(
        &mut self,
        request: RotationRequest,
        before: RasterImage,
        after: RasterImage,
    ) -> bool {
        if request.seq != self.issued {
            return false;
        }
        self.settled = self.issued;
        self.displayed = Some(DisplayedPair {
            angle: request.angle,
            before,
            after,
        });
        true
    }

    /// Record a failed rotation.
    ///
    /// The displayed pair is left untouched; the host surfaces the error.
    /// Clears the in-flight state only if the failure belongs to the
    /// newest request.
    pub fn fail(&mut self, request: RotationRequest) {
        if request.seq == self.issued {
            self.settled = self.issued;
        }
    }
}
