//! Bidirectional world↔screen coordinate mapping
//!
//! World space is machine millimeters, Y up. Screen space is canvas pixels,
//! Y down. The forward transform is
//!
//! ```text
//! screen_x = cx + world_x * px_per_mm * zoom + pan.x
//! screen_y = cy - world_y * px_per_mm * zoom + pan.y
//! ```
//!
//! and [`CoordinateMapper::to_world`] is its exact inverse. Invertibility is
//! what guarantees correct click-to-point capture.

use millview_core::{EngineConfig, ScreenPoint, ViewState};

/// Pure transform between machine millimeters and device pixels.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    px_per_mm: f64,
}

impl CoordinateMapper {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            px_per_mm: config.px_per_mm,
        }
    }

    /// Effective pixels-per-millimeter at the current zoom.
    pub fn scale(&self, view: &ViewState) -> f64 {
        self.px_per_mm * view.zoom
    }

    /// Map a world coordinate to screen pixels. `origin` is the screen
    /// position of the viewport center.
    pub fn to_screen(
        &self,
        world_x: f64,
        world_y: f64,
        view: &ViewState,
        origin: ScreenPoint,
    ) -> ScreenPoint {
        let scale = self.scale(view);
        ScreenPoint::new(
            origin.x + world_x * scale + view.pan.x,
            origin.y - world_y * scale + view.pan.y,
        )
    }

    /// Map a screen pixel back to world millimeters. Exact inverse of
    /// [`CoordinateMapper::to_screen`].
    pub fn to_world(&self, screen: ScreenPoint, view: &ViewState, origin: ScreenPoint) -> (f64, f64) {
        let scale = self.scale(view);
        (
            (screen.x - origin.x - view.pan.x) / scale,
            (origin.y + view.pan.y - screen.y) / scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use millview_core::PanOffset;

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(&EngineConfig::default())
    }

    #[test]
    fn test_origin_maps_to_viewport_center() {
        let view = ViewState::default();
        let origin = ScreenPoint::new(400.0, 300.0);
        let s = mapper().to_screen(0.0, 0.0, &view, origin);
        assert_eq!(s, origin);
    }

    #[test]
    fn test_y_axis_inverted() {
        let view = ViewState::default();
        let origin = ScreenPoint::new(400.0, 300.0);
        // World +Y goes up, so the screen Y must shrink.
        let s = mapper().to_screen(0.0, 10.0, &view, origin);
        assert!(s.y < origin.y);
        assert_eq!(s.x, origin.x);
    }

    #[test]
    fn test_pan_shifts_screen_position() {
        let mut view = ViewState::default();
        view.pan = PanOffset::new(15.0, -7.0);
        let origin = ScreenPoint::new(400.0, 300.0);
        let s = mapper().to_screen(0.0, 0.0, &view, origin);
        assert_eq!(s, ScreenPoint::new(415.0, 293.0));
    }

    #[test]
    fn test_round_trip() {
        let config = EngineConfig::default();
        let mut view = ViewState::default();
        view.set_zoom(2.5, &config);
        view.pan = PanOffset::new(-120.0, 33.5);
        let origin = ScreenPoint::new(512.0, 384.0);

        let m = mapper();
        let s = m.to_screen(123.4, 56.7, &view, origin);
        let (wx, wy) = m.to_world(s, &view, origin);
        assert!((wx - 123.4).abs() < 1e-9);
        assert!((wy - 56.7).abs() < 1e-9);
    }
}
