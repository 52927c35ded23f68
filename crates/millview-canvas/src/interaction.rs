//! Pointer and wheel interaction
//!
//! Translates device events into engine events. Policy rejections (click
//! outside the workpiece, click during playback) produce no event; only
//! malformed input is an error.

use crate::mapper::CoordinateMapper;
use millview_core::{
    quantize_mm, EngineConfig, EngineEvent, Error, Result, ScreenPoint, SimulationCursor,
    ViewState, WorkpieceBounds,
};
use tracing::debug;

/// Maps pointer clicks to captured points and wheel events to zoom changes.
///
/// Never writes pixels; it only reads geometry to invert the coordinate
/// transform.
#[derive(Debug, Clone)]
pub struct InteractionController {
    config: EngineConfig,
    bounds: WorkpieceBounds,
    mapper: CoordinateMapper,
}

impl InteractionController {
    pub fn new(config: EngineConfig, bounds: WorkpieceBounds) -> Self {
        let mapper = CoordinateMapper::new(&config);
        Self {
            config,
            bounds,
            mapper,
        }
    }

    pub fn bounds(&self) -> &WorkpieceBounds {
        &self.bounds
    }

    /// Handle a pointer-down at `screen`. `origin` is the screen position of
    /// the viewport center.
    ///
    /// Returns `Ok(None)` while the simulation is active (no edits during
    /// playback) and for clicks outside the workpiece. A valid click yields
    /// a [`EngineEvent::PointCaptured`] quantized to 0.1mm with `z = 0`.
    pub fn on_pointer_down(
        &self,
        screen: ScreenPoint,
        origin: ScreenPoint,
        view: &ViewState,
        cursor: &SimulationCursor,
    ) -> Result<Option<EngineEvent>> {
        if !screen.is_finite() {
            return Err(Error::invalid_geometry(format!(
                "pointer position is not finite: ({}, {})",
                screen.x, screen.y
            )));
        }
        if !view.is_finite() {
            return Err(Error::invalid_geometry("view state is not finite"));
        }

        if cursor.active {
            debug!("click ignored: simulation is running");
            return Ok(None);
        }

        let (world_x, world_y) = self.mapper.to_world(screen, view, origin);
        if !self.bounds.contains(world_x, world_y) {
            debug!(world_x, world_y, "click outside workpiece bounds, ignored");
            return Ok(None);
        }

        Ok(Some(EngineEvent::PointCaptured {
            x: quantize_mm(world_x),
            y: quantize_mm(world_y),
            z: 0.0,
        }))
    }

    /// Handle a wheel event with the given vertical delta.
    ///
    /// Wheel-up (negative delta) zooms in by one step, wheel-down zooms out;
    /// the result is clamped to the configured range. Always produces an
    /// event, even when the zoom is already pinned at a bound — the host
    /// must consume the wheel event either way so the surface never scrolls.
    pub fn on_wheel(&self, delta_y: f64, view: &ViewState) -> Result<EngineEvent> {
        if !delta_y.is_finite() {
            return Err(Error::invalid_geometry("wheel delta is not finite"));
        }
        if !view.is_finite() {
            return Err(Error::invalid_geometry("view state is not finite"));
        }

        let direction = if delta_y > 0.0 {
            1.0
        } else if delta_y < 0.0 {
            -1.0
        } else {
            0.0
        };

        let zoom = self
            .config
            .clamp_zoom(view.zoom - direction * self.config.zoom_step);
        Ok(EngineEvent::ZoomChanged { zoom })
    }
}
