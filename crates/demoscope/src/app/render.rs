//! Per-frame rendering.

use std::time::Instant;

use glow::HasContext;
use glutin::surface::GlSurface;

use demoscope_core::{DemoscopeError, Result, UiState};

use super::{render_ui, ViewerWindow};

impl ViewerWindow {
    /// Runs one frame: advance the UI clock, describe the widgets, clear the
    /// framebuffer, submit the draw-call list, and present.
    pub(crate) fn render_frame(&mut self, state: &mut UiState) -> Result<()> {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.imgui.io_mut().set_delta_time(delta.as_secs_f32());
        self.last_frame = now;

        self.platform.prepare_frame(&self.window, &mut self.imgui);
        let ui = self.imgui.frame();

        render_ui::build_ui(ui, state);

        // The viewport tracks the framebuffer every frame, so a resize is
        // picked up even when its event was missed.
        let size = self.window.inner_size();
        let [r, g, b, a] = state.clear_color;
        if let Some(gl) = self.renderer.gl_context() {
            unsafe {
                gl.viewport(0, 0, size.width as i32, size.height as i32);
                gl.clear_color(r * a, g * a, b * a, a);
                gl.clear(glow::COLOR_BUFFER_BIT);
            }
        }

        self.platform.prepare_render_with_ui(ui, &self.window);
        let draw_data = self.imgui.render();

        self.renderer
            .new_frame()
            .map_err(|e| DemoscopeError::Frame(e.to_string()))?;
        self.renderer
            .render(draw_data)
            .map_err(|e| DemoscopeError::Frame(e.to_string()))?;

        self.surface
            .swap_buffers(&self.gl_context)
            .map_err(|e| DemoscopeError::Frame(e.to_string()))?;

        Ok(())
    }
}
