//! Persistent UI state for the demo panels.
//!
//! The UI is immediate-mode: no widget objects survive between frames, only
//! the primitive values bound to them. All of those values live here, owned
//! by the viewer and handed to the per-frame description function.

/// Lower bound of the demo slider.
pub const SLIDER_MIN: f32 = 0.0;
/// Upper bound of the demo slider.
pub const SLIDER_MAX: f32 = 1.0;

/// Raw data series shown by the histogram panel.
pub const HISTOGRAM_SAMPLES: [f32; 18] = [
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 7.0, 6.0, 5.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0,
];

/// Scale factor applied to every raw sample before plotting.
pub const HISTOGRAM_SCALE: f32 = 0.1;

/// Returns the histogram series with the plot scale applied.
#[must_use]
pub fn scaled_histogram() -> [f32; HISTOGRAM_SAMPLES.len()] {
    let mut values = HISTOGRAM_SAMPLES;
    for v in &mut values {
        *v *= HISTOGRAM_SCALE;
    }
    values
}

/// Returns the (min, max) of a sample series, or (0.0, 0.0) when empty.
#[must_use]
pub fn series_bounds(values: &[f32]) -> (f32, f32) {
    let mut iter = values.iter().copied();
    let Some(first) = iter.next() else {
        return (0.0, 0.0);
    };
    iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Mutable state behind the demo's widgets.
///
/// Initialized once at viewer construction and mutated every frame in
/// response to widget interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Whether the library-provided demo window is shown.
    pub show_demo_window: bool,
    /// Whether the secondary "Another Window" panel is shown.
    pub show_another_window: bool,
    /// Framebuffer clear color (RGBA), premultiplied by alpha at clear time.
    pub clear_color: [f32; 4],
    /// Value bound to the demo slider, kept in [`SLIDER_MIN`, `SLIDER_MAX`].
    pub slider_value: f32,
    /// Number of times the demo button has been activated.
    pub click_count: u32,
    /// Edge length used by the custom-rendering shapes.
    pub shape_size: f32,
    /// Fill color (RGBA) used by the custom-rendering shapes.
    pub shape_color: [f32; 4],
}

impl UiState {
    /// Creates the state with the given initial clear color.
    #[must_use]
    pub fn new(clear_color: [f32; 4]) -> Self {
        Self {
            show_demo_window: false,
            show_another_window: true,
            clear_color,
            slider_value: SLIDER_MIN,
            click_count: 0,
            shape_size: 36.0,
            shape_color: [1.0, 1.0, 0.4, 1.0],
        }
    }

    /// Records one activation of the demo button.
    pub fn record_click(&mut self) {
        self.click_count = self.click_count.saturating_add(1);
    }

    /// Re-establishes the slider bounds after the widget wrote a new value.
    ///
    /// The slider widget clamps while dragging, but keyboard entry can write
    /// values outside the range.
    pub fn clamp_slider(&mut self) {
        self.slider_value = self.slider_value.clamp(SLIDER_MIN, SLIDER_MAX);
    }

    /// Hides the secondary panel. Used by both of its close affordances.
    pub fn close_secondary(&mut self) {
        self.show_another_window = false;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new([0.45, 0.55, 0.60, 1.00])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_state_default() {
        let state = UiState::default();
        assert!(!state.show_demo_window);
        assert!(state.show_another_window);
        assert_eq!(state.clear_color, [0.45, 0.55, 0.60, 1.00]);
        assert_eq!(state.slider_value, 0.0);
        assert_eq!(state.click_count, 0);
        assert_eq!(state.shape_size, 36.0);
        assert_eq!(state.shape_color, [1.0, 1.0, 0.4, 1.0]);
    }

    #[test]
    fn test_scaled_histogram_bounds() {
        let scaled = scaled_histogram();
        let (lo, hi) = series_bounds(&scaled);
        assert!((lo - 0.0).abs() < f32::EPSILON);
        assert!((hi - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_series_bounds_empty() {
        assert_eq!(series_bounds(&[]), (0.0, 0.0));
    }

    #[test]
    fn test_series_bounds_single() {
        assert_eq!(series_bounds(&[3.5]), (3.5, 3.5));
    }

    #[test]
    fn test_demo_flag_round_trip() {
        let mut state = UiState::default();
        state.show_demo_window = true;
        state.show_demo_window = false;
        assert!(!state.show_demo_window);
    }

    #[test]
    fn test_close_secondary_is_idempotent() {
        let mut state = UiState::default();
        state.close_secondary();
        assert!(!state.show_another_window);
        state.close_secondary();
        assert!(!state.show_another_window);
    }

    proptest! {
        #[test]
        fn prop_click_count_matches_activations(n in 0u32..10_000) {
            let mut state = UiState::default();
            for _ in 0..n {
                state.record_click();
            }
            prop_assert_eq!(state.click_count, n);
        }

        #[test]
        fn prop_slider_always_clamped(v in prop::num::f32::ANY) {
            let mut state = UiState::default();
            state.slider_value = v;
            state.clamp_slider();
            if v.is_nan() {
                // clamp() propagates NaN; the widget never produces one, but
                // the invariant below only makes sense for real inputs.
                return Ok(());
            }
            prop_assert!(state.slider_value >= SLIDER_MIN);
            prop_assert!(state.slider_value <= SLIDER_MAX);
        }

        #[test]
        fn prop_bounds_cover_every_sample(values in prop::collection::vec(-1.0e6f32..1.0e6, 1..64)) {
            let (lo, hi) = series_bounds(&values);
            for v in &values {
                prop_assert!(lo <= *v);
                prop_assert!(hi >= *v);
            }
        }
    }
}
