//! # MillView Canvas
//!
//! Pixel work and interaction for the MillView 2D toolpath visualization
//! engine:
//!
//! - **Mapper**: the bidirectional world↔screen coordinate transform
//! - **Scene**: the immutable per-frame snapshot and its validation
//! - **Renderer**: the layered full-frame repaint over a tiny-skia pixmap,
//!   with RGB image export for hosts that blit or snapshot
//! - **Text**: rusttype glyph rasterization with a fontdb system lookup
//! - **Interaction**: click-to-point capture and clamped wheel zoom
//!
//! The host drives redraws: every state change means assembling a new
//! [`Scene`] and calling [`SceneRenderer::render`]. Nothing here keeps state
//! between frames, spawns threads, or touches the filesystem.

pub mod interaction;
pub mod mapper;
pub mod renderer;
pub mod scene;
pub mod text;

pub use interaction::InteractionController;
pub use mapper::CoordinateMapper;
pub use renderer::SceneRenderer;
pub use scene::{LayerVisibility, Scene};
