//! Per-frame widget description for the demo panels.

use dear_imgui_rs::{Condition, ImColor32, Ui, WindowFlags};

use demoscope_core::state::{scaled_histogram, series_bounds};
use demoscope_core::{UiState, SLIDER_MAX, SLIDER_MIN};

/// Declares every demo panel for one frame.
///
/// Immediate-mode: the widgets exist only for the duration of this call; the
/// values they bind to live in `state`.
pub(super) fn build_ui(ui: &Ui, state: &mut UiState) {
    // 1. Library-provided demo window.
    if state.show_demo_window {
        ui.show_demo_window(&mut state.show_demo_window);
    }

    // 2. Primary widget panel.
    ui.window("Hello, world!").build(|| {
        ui.text("This is some useful text.");
        ui.checkbox("Demo Window", &mut state.show_demo_window);
        ui.checkbox("Another Window", &mut state.show_another_window);

        // The widget clamps while dragging, but keyboard entry can step
        // outside the range.
        if ui.slider_f32("float", &mut state.slider_value, SLIDER_MIN, SLIDER_MAX) {
            state.clamp_slider();
        }

        if ui.button("Button") {
            state.record_click();
        }
        ui.same_line();
        ui.text(format!("counter = {}", state.click_count));

        let framerate = ui.io().framerate();
        ui.text(format!(
            "Application average {:.3} ms/frame ({:.1} FPS)",
            1000.0 / framerate,
            framerate
        ));
    });

    // 3. Secondary panel. Both the button and the title-bar close clear the
    // flag; NO_COLLAPSE keeps a `None` result unambiguous (closed, not
    // collapsed).
    if state.show_another_window {
        let shown = ui
            .window("Another Window")
            .flags(WindowFlags::NO_COLLAPSE)
            .build(|| {
                ui.text("Hello from another window!");
                ui.button("Close Me")
            });
        match shown {
            Some(false) => {}
            _ => state.close_secondary(),
        }
    }

    // 4. Histogram panel, vertical range fit to the scaled series itself.
    ui.window("Histogram")
        .size([350.0, 150.0], Condition::FirstUseEver)
        .build(|| {
            let values = scaled_histogram();
            let (lower, upper) = series_bounds(&values);
            ui.plot_histogram_config("Histogram", &values)
                .scale_min(lower)
                .scale_max(upper)
                .graph_size([0.0, 80.0])
                .build();
        });

    // 5. Custom-rendering panel; when it fails to open nothing is drawn.
    ui.window("Example: Custom rendering")
        .size([350.0, 560.0], Condition::FirstUseEver)
        .build(|| draw_shapes(ui, state));
}

/// Draws the primitive-shape row: filled circle, rectangle, rounded
/// rectangle, triangle, and a per-corner gradient rectangle.
fn draw_shapes(ui: &Ui, state: &UiState) {
    let draw_list = ui.get_window_draw_list();
    let color = ImColor32::from(state.shape_color);
    let size = state.shape_size;
    let spacing = 8.0;

    let [panel_x, panel_y] = ui.cursor_screen_pos();
    let mut x = panel_x + 4.0;
    let y = panel_y + 4.0;

    draw_list
        .add_circle([x + size * 0.5, y + size * 0.5], size * 0.5, color)
        .filled(true)
        .num_segments(32)
        .build();
    x += size + spacing;

    draw_list
        .add_rect([x, y], [x + size, y + size], color)
        .filled(true)
        .build();
    x += size + spacing;

    draw_list
        .add_rect([x, y], [x + size, y + size], color)
        .filled(true)
        .rounding(10.0)
        .build();
    x += size + spacing;

    draw_list
        .add_triangle(
            [x + size * 0.5, y],
            [x + size, y + size - 0.5],
            [x, y + size - 0.5],
            color,
        )
        .filled(true)
        .build();
    x += size + spacing;

    draw_list.add_rect_filled_multicolor(
        [x, y],
        [x + size, y + size],
        ImColor32::from_rgb(0, 0, 0),
        ImColor32::from_rgb(255, 0, 0),
        ImColor32::from_rgb(255, 255, 0),
        ImColor32::from_rgb(0, 255, 0),
    );
}
