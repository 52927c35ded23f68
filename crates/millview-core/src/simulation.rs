//! Simulation cursor and path-phase derivation
//!
//! The cursor is fully host-owned; the host advances `index` over time with
//! its own timer. The engine never stores per-segment state. Visual state is
//! re-derived from `(active, index)` on every render, which keeps the display
//! consistent even if the host mutates the point list mid-playback.

use serde::{Deserialize, Serialize};

/// Visual state of a toolpath segment or point marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathPhase {
    /// Not yet reached by the cursor, or simulation inactive.
    Planned,
    /// The segment currently being executed.
    Active,
    /// Already traversed by the cursor.
    Completed,
}

impl PathPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// Externally driven playback cursor into the point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationCursor {
    /// Whether playback is running.
    pub active: bool,
    /// Index of the segment/point currently being executed.
    pub index: usize,
}

impl SimulationCursor {
    pub fn new(active: bool, index: usize) -> Self {
        Self { active, index }
    }

    /// An inactive cursor at index zero.
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Derive the visual phase of segment or point `index`.
    ///
    /// When inactive everything is planned, regardless of the stored index.
    pub fn phase_of(&self, index: usize) -> PathPhase {
        if !self.active {
            PathPhase::Planned
        } else if index < self.index {
            PathPhase::Completed
        } else if index == self.index {
            PathPhase::Active
        } else {
            PathPhase::Planned
        }
    }

    /// Playback progress as a percentage of `total` points.
    ///
    /// An empty sequence reports 100% (nothing left to do).
    pub fn progress_percent(&self, total: usize) -> f64 {
        if total == 0 {
            100.0
        } else {
            (self.index.min(total) as f64 / total as f64) * 100.0
        }
    }
}
