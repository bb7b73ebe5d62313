//! Small widgets around the chart
//!
//! - [`ControlSlider`] - Labeled slider driven by a [`SliderState`]
//! - [`ModeHint`] - One-line description of the active interaction mode

use crate::config::ViewerMode;
use crate::view::SliderState;
use egui::{Color32, Response, RichText, Ui, Widget};

/// A labeled slider for the scroll position or zoom factor.
///
/// `value` is reset to the state's value and then edited in place.
pub struct ControlSlider<'a> {
    state: &'a SliderState,
    value: &'a mut f64,
}

impl<'a> ControlSlider<'a> {
    pub fn new(state: &'a SliderState, value: &'a mut f64) -> Self {
        *value = state.value;
        Self { state, value }
    }
}

impl Widget for ControlSlider<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let state = self.state;
        ui.horizontal(|ui| {
            ui.label(state.label.as_str());
            // Leave room for the label and the value box
            ui.spacing_mut().slider_width = (ui.available_width() - 80.0).max(100.0);
            ui.add(
                egui::Slider::new(self.value, state.min..=state.max)
                    .step_by(state.step)
                    .clamping(egui::SliderClamping::Always),
            )
        })
        .inner
    }
}

/// Show the slider for `state`, returning the new value if the user moved it
pub fn slider_bar(ui: &mut Ui, state: &SliderState) -> Option<f64> {
    let mut value = state.value;
    let response = ui.add(ControlSlider::new(state, &mut value));
    (response.changed() && value != state.value).then_some(value)
}

/// Usage hint for the active mode
pub struct ModeHint {
    mode: ViewerMode,
}

impl ModeHint {
    pub fn new(mode: ViewerMode) -> Self {
        Self { mode }
    }
}

impl Widget for ModeHint {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.label(
            RichText::new(self.mode.hint())
                .small()
                .color(Color32::GRAY),
        )
    }
}
