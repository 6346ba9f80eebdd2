//! Window, OpenGL context, and UI context initialization.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use dear_imgui_glow::GlowRenderer;
use dear_imgui_winit::{HiDpiMode, WinitPlatform};
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextAttributesBuilder, NotCurrentGlContext};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use demoscope_core::{DemoscopeError, Result, Theme, ViewerOptions};

use super::ViewerWindow;

impl ViewerWindow {
    /// Builds the window, the GL context and surface, the UI context, and
    /// both backends, in that order.
    pub(crate) fn new(event_loop: &ActiveEventLoop, options: &ViewerOptions) -> Result<Self> {
        let window_attributes = Window::default_attributes()
            .with_title(options.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(options.width),
                f64::from(options.height),
            ));

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attributes))
            .build(event_loop, ConfigTemplateBuilder::new(), |mut configs| {
                configs.next().expect("display offered no GL configs")
            })
            .map_err(|e| DemoscopeError::WindowCreation(e.to_string()))?;

        let window = window.ok_or_else(|| {
            DemoscopeError::WindowCreation("window system did not produce a window".into())
        })?;
        let window = Arc::new(window);

        let window_handle = window
            .window_handle()
            .map_err(|e| DemoscopeError::WindowCreation(e.to_string()))?
            .as_raw();

        let context_attributes = ContextAttributesBuilder::new().build(Some(window_handle));
        let gl_context = unsafe {
            gl_config
                .display()
                .create_context(&gl_config, &context_attributes)
        }
        .map_err(|e| DemoscopeError::GraphicsContext(e.to_string()))?;

        let size = window.inner_size();
        let surface_attributes = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            window_handle,
            NonZeroU32::new(size.width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(size.height).unwrap_or(NonZeroU32::MIN),
        );
        let surface = unsafe {
            gl_config
                .display()
                .create_window_surface(&gl_config, &surface_attributes)
        }
        .map_err(|e| DemoscopeError::GraphicsContext(e.to_string()))?;

        let gl_context = gl_context
            .make_current(&surface)
            .map_err(|e| DemoscopeError::GraphicsContext(e.to_string()))?;

        if options.vsync {
            surface
                .set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))
                .map_err(|e| DemoscopeError::GraphicsContext(e.to_string()))?;
        }

        let mut imgui = dear_imgui_rs::Context::create()
            .map_err(|e| DemoscopeError::UiContext(e.to_string()))?;
        imgui
            .set_ini_filename(None::<String>)
            .map_err(|e| DemoscopeError::UiContext(e.to_string()))?;
        apply_theme(options.theme);

        let mut platform = WinitPlatform::new(&mut imgui);
        platform.attach_window(&window, HiDpiMode::Default, &mut imgui);

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|s| {
                gl_context.display().get_proc_address(s).cast()
            })
        };
        let mut renderer = GlowRenderer::new(gl, &mut imgui)
            .map_err(|e| DemoscopeError::Renderer(e.to_string()))?;
        renderer
            .new_frame()
            .map_err(|e| DemoscopeError::Renderer(e.to_string()))?;

        log::info!(
            "viewer window created ({}x{}, vsync {})",
            size.width,
            size.height,
            if options.vsync { "on" } else { "off" }
        );

        Ok(Self {
            renderer,
            platform,
            imgui,
            surface,
            gl_context,
            window,
            last_frame: Instant::now(),
        })
    }

    /// Resizes the GL surface to a new physical window size.
    pub(crate) fn resize(&mut self, size: PhysicalSize<u32>) {
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        self.surface.resize(&self.gl_context, width, height);
    }
}

/// Applies a built-in theme to the current UI context.
fn apply_theme(theme: Theme) {
    unsafe {
        match theme {
            Theme::Dark => dear_imgui_rs::sys::igStyleColorsDark(std::ptr::null_mut()),
            Theme::Light => dear_imgui_rs::sys::igStyleColorsLight(std::ptr::null_mut()),
            Theme::Classic => dear_imgui_rs::sys::igStyleColorsClassic(std::ptr::null_mut()),
        }
    }
}
