//! Engine configuration
//!
//! Gathers the fixed rendering and interaction constants into one struct that
//! is handed to the engine at construction. Hosts may serialize it alongside
//! their own settings; the engine itself performs no file I/O.

use serde::{Deserialize, Serialize};

/// Configuration for the visualization engine.
///
/// All fields have sensible defaults via [`Default`]; hosts typically tweak
/// only `px_per_mm` and the zoom range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fixed pixels-per-millimeter scale applied before zoom.
    pub px_per_mm: f64,
    /// Lower zoom bound.
    pub min_zoom: f64,
    /// Upper zoom bound.
    pub max_zoom: f64,
    /// Additive zoom change per wheel notch.
    pub zoom_step: f64,
    /// Fine grid spacing in millimeters.
    pub grid_spacing_mm: f64,
    /// Major grid spacing in millimeters.
    pub major_grid_spacing_mm: f64,
    /// Minimum rendered marker radius in pixels, used when the tool
    /// diameter is zero or negative.
    pub min_marker_radius_px: f64,
    /// Fixed on-screen length of the coordinate axes in pixels.
    pub axis_length_px: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            px_per_mm: 2.0,
            min_zoom: 0.25,
            max_zoom: 4.0,
            zoom_step: 0.25,
            grid_spacing_mm: 5.0,
            major_grid_spacing_mm: 25.0,
            min_marker_radius_px: 3.0,
            axis_length_px: 40.0,
        }
    }
}

impl EngineConfig {
    /// Clamp a zoom value into the configured range.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}
