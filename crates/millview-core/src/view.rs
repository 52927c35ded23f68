//! View state: zoom and pan
//!
//! The view is host-owned and independent of simulation state. All mutation
//! helpers clamp against the [`EngineConfig`] zoom range; pan is free.

use crate::config::EngineConfig;
use crate::geometry::WorkpieceBounds;
use serde::{Deserialize, Serialize};

/// Per-edge margin factor used by fit-to-bounds (10% per side).
const FIT_MARGIN: f64 = 0.9;

/// Pan offset in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanOffset {
    pub x: f64,
    pub y: f64,
}

impl PanOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Current zoom level and pan offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Zoom factor (1.0 = 100%).
    pub zoom: f64,
    /// Pan offset in pixels, applied after scaling.
    pub pan: PanOffset,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: PanOffset::default(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set zoom, clamped into the configured range.
    pub fn set_zoom(&mut self, zoom: f64, config: &EngineConfig) {
        self.zoom = config.clamp_zoom(zoom);
    }

    /// Zoom in by one step.
    pub fn zoom_in(&mut self, config: &EngineConfig) {
        self.set_zoom(self.zoom + config.zoom_step, config);
    }

    /// Zoom out by one step.
    pub fn zoom_out(&mut self, config: &EngineConfig) {
        self.set_zoom(self.zoom - config.zoom_step, config);
    }

    /// Pan by a pixel delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.x += dx;
        self.pan.y += dy;
    }

    /// Choose the pan that places a world coordinate at the viewport center.
    pub fn center_on(&mut self, world_x: f64, world_y: f64, config: &EngineConfig) {
        let scale = config.px_per_mm * self.zoom;
        self.pan.x = -world_x * scale;
        self.pan.y = world_y * scale;
    }

    /// Zoom so the workpiece fills the canvas with a margin, pan reset to zero.
    pub fn fit_to_bounds(
        &mut self,
        bounds: &WorkpieceBounds,
        canvas_width: f64,
        canvas_height: f64,
        config: &EngineConfig,
    ) {
        if bounds.width <= 0.0 || bounds.height <= 0.0 || canvas_width <= 0.0 || canvas_height <= 0.0
        {
            self.reset();
            return;
        }
        let zoom_x = canvas_width / (bounds.width * config.px_per_mm);
        let zoom_y = canvas_height / (bounds.height * config.px_per_mm);
        self.zoom = config.clamp_zoom(zoom_x.min(zoom_y) * FIT_MARGIN);
        self.pan = PanOffset::default();
    }

    /// Reset to defaults: 100% zoom, zero pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true if zoom and pan are finite and zoom is positive.
    pub fn is_finite(&self) -> bool {
        self.zoom.is_finite() && self.zoom > 0.0 && self.pan.is_finite()
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "zoom {:.0}% pan ({:.1}, {:.1})",
            self.zoom * 100.0,
            self.pan.x,
            self.pan.y
        )
    }
}
