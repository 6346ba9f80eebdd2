//! demoscope: an immediate-mode widget demo viewer.
//!
//! demoscope opens a winit window with an OpenGL context and renders a small
//! set of Dear ImGui demo panels every frame: the library demo window, a
//! widget panel (checkboxes, slider, click counter, frame timing), a
//! histogram plot, and a custom draw-list panel with filled vector shapes.
//!
//! # Quick Start
//!
//! ```no_run
//! use demoscope::{run, ViewerOptions};
//!
//! fn main() -> demoscope::Result<()> {
//!     run(ViewerOptions::default())
//! }
//! ```
//!
//! # Architecture
//!
//! The viewer owns every resource explicitly: the window, the GL
//! surface/context, the UI context, and the platform/renderer backends all
//! live in one struct created at startup and released in reverse order on
//! close. The per-frame widget description is a pure function of the
//! [`UiState`] it mutates; no globals are involved.

#![allow(unsafe_code)] // GL context creation and symbol loading require it.

mod app;

pub use demoscope_core::{
    DemoscopeError, Result, Theme, UiState, ViewerOptions, HISTOGRAM_SAMPLES, SLIDER_MAX,
    SLIDER_MIN,
};

use winit::event_loop::{ControlFlow, EventLoop};

use app::App;

/// Opens the viewer window and runs the demo until it is closed.
///
/// Blocks for the lifetime of the window. Returns an error if the options
/// are invalid or if the window, GL context, UI context, or renderer could
/// not be created.
pub fn run(options: ViewerOptions) -> Result<()> {
    options.validate()?;

    let event_loop =
        EventLoop::new().map_err(|e| DemoscopeError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(options);
    log::info!("starting demoscope event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| DemoscopeError::EventLoop(e.to_string()))?;

    app.into_result()
}
