//! WASM bindings for the compare presenter.
//!
//! Exposes `CompareView` as a JavaScript class. The host wires pointer and
//! resize events into it, reads the divider clip and layer transform back
//! out, and drives rotation through sequenced request tickets: press a
//! button, get a ticket, rotate both sources in a worker, then hand the
//! results back with the ticket. Stale tickets are rejected, so an earlier
//! rotation that finishes late can never overwrite a newer one.

use crate::types::JsRasterImage;
use pixelcompare_core::compare::{CompareView as CoreView, RotationRequest};
use wasm_bindgen::prelude::*;

/// A sequenced rotation request ticket.
#[wasm_bindgen]
pub struct JsRotationRequest {
    inner: RotationRequest,
}

#[wasm_bindgen]
impl JsRotationRequest {
    /// The angle both layers must be rotated to, in degrees [0, 360).
    #[wasm_bindgen(getter)]
    pub fn angle_degrees(&self) -> u16 {
        self.inner.angle().degrees()
    }

    /// The request's position in the issue order.
    #[wasm_bindgen(getter)]
    pub fn seq(&self) -> u32 {
        self.inner.seq()
    }
}

/// The compare widget's state holder, exported to JavaScript.
#[wasm_bindgen]
pub struct CompareView {
    inner: CoreView,
}

impl Default for CompareView {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CompareView {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CompareView {
        CompareView {
            inner: CoreView::new(),
        }
    }

    /// Install a new before/after source pair and reset rotation state.
    pub fn set_sources(&mut self, before: JsRasterImage, after: JsRasterImage) {
        self.inner
            .set_sources(before.into_raster(), after.into_raster());
    }

    // ----- divider -----

    /// Divider position in percent of viewport width, in [0, 100].
    #[wasm_bindgen(getter)]
    pub fn divider_percent(&self) -> f64 {
        self.inner.divider_percent()
    }

    /// Clip boundary for the "before" layer, in percent from the left.
    #[wasm_bindgen(getter)]
    pub fn before_clip_percent(&self) -> f64 {
        self.inner.before_clip_percent()
    }

    /// Set the divider position directly (clamped to [0, 100]).
    pub fn set_position(&mut self, percent: f64) {
        self.inner.set_position(percent);
    }

    /// Start a press-and-hold gesture on the divider.
    pub fn begin_drag(&mut self) {
        self.inner.begin_drag();
    }

    /// End the gesture.
    pub fn end_drag(&mut self) {
        self.inner.end_drag();
    }

    /// True while a press-and-hold gesture is active.
    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// Track a pointer position during a drag (`x` relative to the
    /// viewport's left edge, `width` the viewport width, both in pixels).
    pub fn drag_to(&mut self, x: f64, width: f64) {
        self.inner.drag_to(x, width);
    }

    // ----- viewport and transform -----

    /// Update the viewport dimensions (call on every resize event).
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.inner.set_viewport(width, height);
    }

    /// The containment scale both layers are displayed at.
    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.scale()
    }

    /// The logical rotation angle in degrees [0, 360).
    #[wasm_bindgen(getter)]
    pub fn angle_degrees(&self) -> u16 {
        self.inner.angle().degrees()
    }

    /// The rotate+scale transform for both layers, as
    /// `{ angle: number, scale: number }`.
    pub fn layer_transform(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.layer_transform())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // ----- rotation -----

    /// Request a rotate-right step (+90).
    pub fn rotate_right(&mut self) -> JsRotationRequest {
        JsRotationRequest {
            inner: self.inner.rotate_right(),
        }
    }

    /// Request a rotate-left step (-90).
    pub fn rotate_left(&mut self) -> JsRotationRequest {
        JsRotationRequest {
            inner: self.inner.rotate_left(),
        }
    }

    /// Request a reset to zero rotation.
    pub fn reset(&mut self) -> JsRotationRequest {
        JsRotationRequest {
            inner: self.inner.reset(),
        }
    }

    /// True while the newest rotation request is still pending. Drives the
    /// disabled state of the rotate/reset buttons.
    #[wasm_bindgen(getter)]
    pub fn is_rotating(&self) -> bool {
        self.inner.is_rotating()
    }

    /// Install a finished rotation if its ticket is still the newest.
    ///
    /// Returns `true` if the pair was installed, `false` if it was stale
    /// and discarded (latest-request-wins).
    pub fn complete(
        &mut self,
        request: &JsRotationRequest,
        before: JsRasterImage,
        after: JsRasterImage,
    ) -> bool {
        let installed = self
            .inner
            .complete(request.inner, before.into_raster(), after.into_raster());

        #[cfg(target_arch = "wasm32")]
        if !installed {
            web_sys::console::warn_1(
                &format!(
                    "Discarding stale rotation result (seq {}, {} deg)",
                    request.seq(),
                    request.angle_degrees()
                )
                .into(),
            );
        }

        installed
    }

    /// Record a failed rotation; the displayed pair is left untouched.
    pub fn fail(&mut self, request: &JsRotationRequest) {
        self.inner.fail(request.inner);
    }

    /// Angle of the pair currently on screen, or `undefined` before any
    /// sources are set.
    #[wasm_bindgen(getter)]
    pub fn displayed_angle_degrees(&self) -> Option<u16> {
        self.inner.displayed().map(|pair| pair.angle.degrees())
    }

    /// Copy of the displayed "before" layer.
    pub fn displayed_before(&self) -> Option<JsRasterImage> {
        self.inner
            .displayed()
            .map(|pair| JsRasterImage::from_raster(pair.before.clone()))
    }

    /// Copy of the displayed "after" layer.
    pub fn displayed_after(&self) -> Option<JsRasterImage> {
        self.inner
            .displayed()
            .map(|pair| JsRasterImage::from_raster(pair.after.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelcompare_core::{ImageFormat, RasterImage};

    fn raster(width: u32, height: u32) -> JsRasterImage {
        JsRasterImage::from_raster(RasterImage::new(
            width,
            height,
            vec![0u8; 8],
            ImageFormat::Png,
        ))
    }

    #[test]
    fn test_divider_defaults_and_clamping() {
        let mut view = CompareView::new();
        assert_eq!(view.divider_percent(), 50.0);

        view.set_position(150.0);
        assert_eq!(view.divider_percent(), 100.0);
        assert_eq!(view.before_clip_percent(), 100.0);
    }

    #[test]
    fn test_drag_gesture_wiring() {
        let mut view = CompareView::new();
        view.begin_drag();
        assert!(view.is_dragging());
        view.drag_to(200.0, 800.0);
        assert_eq!(view.divider_percent(), 25.0);
        view.end_drag();
        assert!(!view.is_dragging());
    }

    #[test]
    fn test_rotation_tickets_expose_angle_and_seq() {
        let mut view = CompareView::new();
        let r1 = view.rotate_right();
        assert_eq!(r1.angle_degrees(), 90);

        let r2 = view.rotate_left();
        assert_eq!(r2.angle_degrees(), 0);
        assert!(r2.seq() > r1.seq());
    }

    #[test]
    fn test_scale_tracks_viewport_and_angle() {
        let mut view = CompareView::new();
        view.set_viewport(800.0, 500.0);
        assert_eq!(view.scale(), 1.0);

        view.rotate_right();
        assert_eq!(view.angle_degrees(), 90);
        assert_eq!(view.scale(), 0.625);
    }

    #[test]
    fn test_latest_request_wins_across_binding() {
        let mut view = CompareView::new();
        view.set_sources(raster(1200, 800), raster(1200, 800));

        let r1 = view.rotate_right(); // 90
        let r2 = view.rotate_right(); // 180
        assert!(view.is_rotating());

        assert!(view.complete(&r2, raster(1200, 800), raster(1200, 800)));
        assert!(!view.complete(&r1, raster(800, 1200), raster(800, 1200)));
        assert_eq!(view.displayed_angle_degrees(), Some(180));
        assert!(!view.is_rotating());
    }

    #[test]
    fn test_fail_keeps_displayed_pair() {
        let mut view = CompareView::new();
        view.set_sources(raster(640, 480), raster(640, 480));

        let request = view.rotate_left();
        view.fail(&request);

        assert!(!view.is_rotating());
        assert_eq!(view.displayed_angle_degrees(), Some(0));
        assert_eq!(view.displayed_before().unwrap().width(), 640);
    }
}
