//! Application window and event loop management.

mod input;
mod render;
mod render_init;
mod render_ui;

use std::sync::Arc;
use std::time::Instant;

use dear_imgui_glow::GlowRenderer;
use dear_imgui_winit::WinitPlatform;
use glutin::context::PossiblyCurrentContext;
use glutin::surface::{Surface, WindowSurface};
use winit::window::Window;

use demoscope_core::{DemoscopeError, Result, UiState, ViewerOptions};

/// Everything owned by one open viewer window.
///
/// Field order is drop order, and matches the reverse of acquisition: the
/// renderer backend releases first, then the platform backend, then the UI
/// context, then the GL surface and context, and the window last.
pub(crate) struct ViewerWindow {
    pub(crate) renderer: GlowRenderer,
    pub(crate) platform: WinitPlatform,
    pub(crate) imgui: dear_imgui_rs::Context,
    pub(crate) surface: Surface<WindowSurface>,
    pub(crate) gl_context: PossiblyCurrentContext,
    pub(crate) window: Arc<Window>,
    pub(crate) last_frame: Instant,
}

/// The viewer application state driven by the winit event loop.
pub(crate) struct App {
    pub(crate) options: ViewerOptions,
    pub(crate) state: UiState,
    pub(crate) window: Option<ViewerWindow>,
    pub(crate) close_requested: bool,
    pub(crate) init_error: Option<DemoscopeError>,
}

impl App {
    /// Creates the application; resources are acquired once the event loop
    /// delivers `resumed`.
    pub(crate) fn new(options: ViewerOptions) -> Self {
        let state = UiState::new(options.clear_color);
        Self {
            options,
            state,
            window: None,
            close_requested: false,
            init_error: None,
        }
    }

    /// Releases the window and every attached resource.
    ///
    /// Safe to call more than once: the resources are taken out of an
    /// `Option`, so later calls find nothing to release.
    pub(crate) fn close(&mut self) {
        if let Some(window) = self.window.take() {
            log::info!("releasing viewer resources");
            drop(window);
        }
    }

    /// Consumes the application, surfacing any initialization failure that
    /// was recorded while the event loop was running.
    pub(crate) fn into_result(self) -> Result<()> {
        match self.init_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
