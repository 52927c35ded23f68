//! Error handling for MillView
//!
//! The engine has very few failure modes: policy rejections (a click outside
//! the workpiece, a click during playback) are expressed as absent events, not
//! errors. What remains is malformed input that must not reach the rasterizer
//! and resource failures at the pixel-surface boundary.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Engine error type
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// A non-finite coordinate, zoom, pan, or parameter reached the engine.
    ///
    /// Input validation is the host's job; this is the backstop that keeps
    /// NaN geometry out of the rendered frame.
    #[error("Invalid geometry: {context}")]
    InvalidGeometry {
        /// Description of the offending value.
        context: String,
    },

    /// The pixel surface could not be allocated.
    #[error("Cannot allocate {width}x{height} canvas")]
    Canvas {
        /// Requested canvas width in pixels.
        width: u32,
        /// Requested canvas height in pixels.
        height: u32,
    },

    /// Frame export or encoding failed.
    #[error("Image export failed: {0}")]
    Image(String),

    /// Generic engine error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an [`Error::InvalidGeometry`] with the given context.
    pub fn invalid_geometry(context: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            context: context.into(),
        }
    }

    /// Create a generic error from a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Returns true if this is an invalid-geometry error.
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry { .. })
    }

    /// Returns true if this is a canvas allocation error.
    pub fn is_canvas(&self) -> bool {
        matches!(self, Self::Canvas { .. })
    }
}

/// Convenience result alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_geometry_display() {
        let err = Error::invalid_geometry("point 3 has NaN x");
        assert_eq!(err.to_string(), "Invalid geometry: point 3 has NaN x");
        assert!(err.is_invalid_geometry());
        assert!(!err.is_canvas());
    }

    #[test]
    fn test_canvas_display() {
        let err = Error::Canvas {
            width: 0,
            height: 600,
        };
        assert_eq!(err.to_string(), "Cannot allocate 0x600 canvas");
        assert!(err.is_canvas());
    }

    #[test]
    fn test_other_constructor() {
        let err = Error::other("boom");
        assert_eq!(err.to_string(), "boom");
    }
}
