//! Slider-driven symmetric zoom
//!
//! A single zoom factor in `[ZOOM_MIN, ZOOM_MAX]`. No drag selection and no
//! hover annotation.

use super::InputController;
use crate::config::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use crate::types::DataSeries;
use crate::view::command::{Axis, RenderCommand, SliderState};
use crate::view::ticks::x_axis_command;
use crate::view::window::{ViewWindow, WindowForm};
use std::sync::Arc;

pub const ZOOM_SLIDER_LABEL: &str = "Zoom";

pub struct SliderZoomController {
    window: ViewWindow,
}

impl SliderZoomController {
    pub fn new(data: Arc<DataSeries>) -> Self {
        Self {
            window: ViewWindow::zoom(data),
        }
    }

    /// Current zoom factor
    pub fn zoom(&self) -> f64 {
        match self.window.form() {
            WindowForm::Zoom { factor } => factor,
            _ => ZOOM_MAX,
        }
    }

    pub fn slider(&self) -> SliderState {
        SliderState {
            label: ZOOM_SLIDER_LABEL.to_string(),
            min: ZOOM_MIN,
            max: ZOOM_MAX,
            step: ZOOM_STEP,
            value: self.zoom(),
        }
    }
}

impl InputController for SliderZoomController {
    fn initial_commands(&mut self) -> Vec<RenderCommand> {
        vec![
            RenderCommand::DrawSeries,
            x_axis_command(self.window.data()),
            RenderCommand::ClearTicks(Axis::Y),
            RenderCommand::SetAxisLimits(self.window.limits()),
            RenderCommand::SetSlider(self.slider()),
        ]
    }

    fn handle_slider_change(&mut self, value: f64) -> Vec<RenderCommand> {
        let limits = self.window.set_by_zoom(value);
        tracing::debug!("Zoom factor {}", self.zoom());
        vec![
            RenderCommand::SetAxisLimits(limits),
            RenderCommand::SetSlider(self.slider()),
        ]
    }

    fn window(&self) -> &ViewWindow {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, Series};
    use crate::view::command::SurfaceState;
    use crate::view::controller::{InputEvent, MouseButton};

    fn controller() -> (SliderZoomController, SurfaceState) {
        let data = Arc::new(
            DataSeries::new(
                "x",
                vec![0.0, 10.0, 20.0],
                vec![Series::new("y", vec![0.0, 100.0, 50.0])],
            )
            .unwrap(),
        );
        let mut controller = SliderZoomController::new(data);
        let mut surface = SurfaceState::new();
        surface.apply_all(controller.initial_commands());
        (controller, surface)
    }

    #[test]
    fn test_zoom_one_matches_initial_view() {
        let (mut controller, mut surface) = controller();
        let initial = surface.limits;
        surface.apply_all(controller.handle_slider_change(0.3));
        surface.apply_all(controller.handle_slider_change(1.0));
        assert!((surface.limits.x.min - initial.x.min).abs() < 1e-9);
        assert!((surface.limits.y.max - initial.y.max).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let (mut controller, mut surface) = controller();
        surface.apply_all(controller.handle_slider_change(0.01));
        assert_eq!(controller.zoom(), ZOOM_MIN);
        assert_eq!(surface.slider.as_ref().map(|s| s.value), Some(ZOOM_MIN));
    }

    #[test]
    fn test_numeric_axis_keeps_automatic_ticks() {
        let (_, surface) = controller();
        assert!(surface.x_ticks.is_none());
    }

    #[test]
    fn test_categorical_axis_gets_label_ticks() {
        let data = Arc::new(
            DataSeries::categorical(
                "day",
                vec!["mon".into(), "tue".into()],
                vec![Series::new("sales", vec![10.0, 12.0])],
            )
            .unwrap(),
        );
        let mut controller = SliderZoomController::new(data);
        let mut surface = SurfaceState::new();
        surface.apply_all(controller.initial_commands());
        assert_eq!(surface.x_ticks.map(|t| t.len()), Some(2));
    }

    #[test]
    fn test_pointer_events_are_ignored() {
        let (mut controller, _) = controller();
        let commands = controller.dispatch(InputEvent::Press {
            button: MouseButton::Secondary,
            pos: Some(Point::new(1.0, 1.0)),
        });
        assert!(commands.is_empty());
        assert_eq!(controller.zoom(), ZOOM_MAX);
    }
}
