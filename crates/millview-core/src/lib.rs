//! # MillView Core
//!
//! Core types and pure derivations for the MillView 2D toolpath
//! visualization engine:
//!
//! - **Geometry**: world/screen points, quantization, workpiece bounds,
//!   the ordered point sequence
//! - **View**: zoom and pan state with clamped manipulation helpers
//! - **Machine**: job parameters and the material table
//! - **Simulation**: the externally driven playback cursor and the
//!   planned/active/completed phase derivation
//! - **Config**: the engine constants (scale, zoom range, grid spacing)
//! - **Events**: the outbound `PointCaptured` / `ZoomChanged` events
//!
//! The engine is a pure function of its inputs: no timers, no threads, no
//! I/O. Rendering and interaction live in the `millview-canvas` crate.

pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod machine;
pub mod simulation;
pub mod view;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use events::EngineEvent;
pub use geometry::{quantize_mm, PointSequence, ScreenPoint, WorkpieceBounds, WorldPoint};
pub use machine::{MachineParams, Material};
pub use simulation::{PathPhase, SimulationCursor};
pub use view::{PanOffset, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, `RUST_LOG` environment
/// variable support, and an INFO default level. Intended for hosts and
/// examples; library code only emits events. Uses `try_init` so repeated
/// initialization (e.g. across tests) reports an error instead of panicking.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
