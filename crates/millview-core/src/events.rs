//! Outbound engine events
//!
//! The engine's only side effects. The host owns the point list and the view
//! state; it applies these events (or ignores them) as it sees fit.

use serde::{Deserialize, Serialize};

/// Event emitted by the interaction controller toward the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A valid click produced a new tool position. Coordinates are quantized
    /// to 0.1mm and already bounds-validated; `z` is always zero on capture.
    PointCaptured { x: f64, y: f64, z: f64 },
    /// A wheel event requested a zoom change, clamped to the configured range.
    ZoomChanged { zoom: f64 },
}
