//! winit event handling for the viewer.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use super::{App, ViewerWindow};

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match ViewerWindow::new(event_loop, &self.options) {
            Ok(window) => {
                window.window.request_redraw();
                self.window = Some(window);
            }
            Err(err) => {
                log::error!("viewer initialization failed: {err}");
                self.init_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_mut() else {
            return;
        };

        // The platform backend sees every event so the UI receives input.
        let full_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
            window_id,
            event: event.clone(),
        };
        window
            .platform
            .handle_event(&mut window.imgui, &window.window, &full_event);

        match event {
            WindowEvent::Resized(size) => {
                window.resize(size);
                window.window.request_redraw();
            }
            WindowEvent::CloseRequested => {
                self.close_requested = true;
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
                {
                    self.close_requested = true;
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = window.render_frame(&mut self.state) {
                    log::error!("frame failed: {err}");
                }
                window.window.request_redraw();
            }
            _ => {}
        }

        if self.close_requested {
            self.close();
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // No-op if the close path already ran.
        self.close();
    }
}
