//! Error types for demoscope.

use thiserror::Error;

/// The main error type for demoscope operations.
#[derive(Error, Debug)]
pub enum DemoscopeError {
    /// The requested window dimensions are not usable.
    #[error("invalid window dimensions {width}x{height} - both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    /// The window system refused to create a window.
    #[error("window creation failed: {0}")]
    WindowCreation(String),

    /// Creating or activating the OpenGL context failed.
    #[error("graphics context error: {0}")]
    GraphicsContext(String),

    /// The UI context could not be created.
    #[error("UI context error: {0}")]
    UiContext(String),

    /// The renderer backend could not be initialized.
    #[error("renderer error: {0}")]
    Renderer(String),

    /// The event loop could not be created or exited abnormally.
    #[error("event loop error: {0}")]
    EventLoop(String),

    /// A single frame failed to render.
    #[error("frame error: {0}")]
    Frame(String),
}

/// A specialized Result type for demoscope operations.
pub type Result<T> = std::result::Result<T, DemoscopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = DemoscopeError::InvalidDimensions {
            width: 0,
            height: 720,
        };
        assert_eq!(
            err.to_string(),
            "invalid window dimensions 0x720 - both must be positive"
        );
    }

    #[test]
    fn test_wrapped_messages() {
        let err = DemoscopeError::WindowCreation("no display".into());
        assert!(err.to_string().contains("no display"));
    }
}
