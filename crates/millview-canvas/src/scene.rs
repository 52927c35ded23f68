//! Immutable scene snapshot consumed by the renderer
//!
//! The host assembles a [`Scene`] from state it owns on every redraw. The
//! renderer never keeps anything between frames, so a snapshot is all it
//! needs. Validation rejects non-finite input before it reaches the
//! rasterizer.

use millview_core::{
    Error, MachineParams, Result, SimulationCursor, ViewState, WorkpieceBounds, WorldPoint,
};
use serde::{Deserialize, Serialize};

/// Host-owned per-layer visibility toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerVisibility {
    /// Workpiece material rectangle.
    pub material: bool,
    /// Toolpath segments, markers and labels.
    pub toolpath: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            material: true,
            toolpath: true,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    /// Ordered tool positions, host-owned.
    pub points: &'a [WorldPoint],
    /// Job parameters.
    pub machine: &'a MachineParams,
    /// Externally driven playback cursor.
    pub cursor: SimulationCursor,
    /// Current zoom and pan.
    pub view: ViewState,
    /// Layer toggles.
    pub visibility: LayerVisibility,
    /// Workpiece rectangle in millimeters.
    pub bounds: WorkpieceBounds,
}

impl<'a> Scene<'a> {
    /// A scene with default parameters, cursor inactive, all layers on.
    pub fn new(points: &'a [WorldPoint], machine: &'a MachineParams) -> Self {
        Self {
            points,
            machine,
            cursor: SimulationCursor::inactive(),
            view: ViewState::default(),
            visibility: LayerVisibility::default(),
            bounds: WorkpieceBounds::default(),
        }
    }

    /// Reject non-finite coordinates, zoom, pan, or machine parameters.
    pub fn validate(&self) -> Result<()> {
        for (i, p) in self.points.iter().enumerate() {
            if !p.is_finite() {
                return Err(Error::invalid_geometry(format!(
                    "point {i} has non-finite coordinates"
                )));
            }
        }
        if !self.view.is_finite() {
            return Err(Error::invalid_geometry(format!(
                "view state is not finite: zoom {}, pan ({}, {})",
                self.view.zoom, self.view.pan.x, self.view.pan.y
            )));
        }
        if !self.machine.is_finite() {
            return Err(Error::invalid_geometry(
                "machine parameters contain non-finite values",
            ));
        }
        if !(self.bounds.width.is_finite() && self.bounds.height.is_finite()) {
            return Err(Error::invalid_geometry("workpiece bounds are not finite"));
        }
        Ok(())
    }
}
