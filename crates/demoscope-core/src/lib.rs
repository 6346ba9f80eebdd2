//! Core abstractions for demoscope.
//!
//! This crate holds everything the viewer needs that does not require a
//! window or a GL context:
//! - [`ViewerOptions`] - construction-time configuration
//! - [`UiState`] - the persistent values bound to the demo's widgets
//! - Error types shared across the workspace
//!
//! Keeping this state window-free means the widget logic can be exercised by
//! plain unit tests; the `demoscope` crate only adds the windowing and
//! rendering shell around it.

pub mod error;
pub mod options;
pub mod state;

pub use error::{DemoscopeError, Result};
pub use options::{Theme, ViewerOptions};
pub use state::{
    scaled_histogram, series_bounds, UiState, HISTOGRAM_SAMPLES, HISTOGRAM_SCALE, SLIDER_MAX,
    SLIDER_MIN,
};
