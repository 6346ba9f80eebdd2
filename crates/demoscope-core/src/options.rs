//! Configuration options for the viewer.

use crate::error::{DemoscopeError, Result};

/// Built-in UI color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark theme.
    #[default]
    Dark,
    /// Light theme.
    Light,
    /// Classic ImGui theme.
    Classic,
}

/// Construction-time configuration for the viewer window.
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    /// Window title.
    pub title: String,

    /// Window width in logical pixels. Must be positive.
    pub width: u32,

    /// Window height in logical pixels. Must be positive.
    pub height: u32,

    /// Whether to synchronize buffer swaps to the display refresh rate.
    pub vsync: bool,

    /// UI theme applied at startup.
    pub theme: Theme,

    /// Initial background clear color (RGBA).
    pub clear_color: [f32; 4],
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            title: "demoscope".to_string(),
            width: 1280,
            height: 760,
            vsync: true,
            theme: Theme::Dark,
            clear_color: [0.45, 0.55, 0.60, 1.00],
        }
    }
}

impl ViewerOptions {
    /// Creates options with the given title and window size, keeping the
    /// remaining fields at their defaults.
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    /// Checks that the options describe a window that can actually be built.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DemoscopeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = ViewerOptions::default();
        assert_eq!(options.width, 1280);
        assert_eq!(options.height, 760);
        assert!(options.vsync);
        assert_eq!(options.theme, Theme::Dark);
        assert_eq!(options.clear_color, [0.45, 0.55, 0.60, 1.00]);
    }

    #[test]
    fn test_options_validate_positive() {
        assert!(ViewerOptions::new("demo", 1, 1).validate().is_ok());
        assert!(ViewerOptions::new("demo", 1280, 760).validate().is_ok());
    }

    #[test]
    fn test_options_validate_zero() {
        let err = ViewerOptions::new("demo", 0, 760).validate().unwrap_err();
        assert!(matches!(
            err,
            DemoscopeError::InvalidDimensions { width: 0, height: 760 }
        ));
        assert!(ViewerOptions::new("demo", 1280, 0).validate().is_err());
    }

    #[test]
    fn test_theme_default() {
        assert_eq!(Theme::default(), Theme::Dark);
    }
}
