//! Input controllers
//!
//! An [`InputController`] owns the [`ViewWindow`] of one variant and turns
//! [`InputEvent`]s into window updates and overlay changes. Handlers run to
//! completion and return the [`RenderCommand`]s the host must apply; nothing
//! here can fail, out-of-range input is clamped or ignored.
//!
//! # Variants
//!
//! - [`ScrollController`] - index window with a scroll slider and drag-to-zoom
//! - [`BoxZoomController`] - free X zoom by dragging a rectangle
//! - [`SliderZoomController`] - symmetric zoom from a single slider
//!
//! # Leaving the plot
//!
//! If the pointer leaves the plot area while a drag is in progress the drag is
//! abandoned: the selection rectangle is removed and nothing is committed.

mod box_zoom;
mod scroll;
mod slider_zoom;

pub use box_zoom::BoxZoomController;
pub use scroll::ScrollController;
pub use slider_zoom::SliderZoomController;

use super::command::RenderCommand;
use super::overlay::HitTolerance;
use super::window::ViewWindow;
use crate::config::{ViewerMode, ViewerOptions};
use crate::types::{DataSeries, Point};
use std::sync::Arc;

/// Pointer button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// Raw input delivered by the host.
///
/// Positions are in data coordinates and `None` when the pointer is outside
/// the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press {
        button: MouseButton,
        pos: Option<Point>,
    },
    Motion {
        pos: Option<Point>,
        tolerance: HitTolerance,
    },
    Release {
        button: MouseButton,
        pos: Option<Point>,
    },
    PointerLeft,
    SliderChanged(f64),
    /// The host legend showed or hid the series at `index`
    SeriesVisibility {
        index: usize,
        visible: bool,
    },
}

/// Event handling for one interaction variant
pub trait InputController {
    /// Commands that set up the surface when the chart opens
    fn initial_commands(&mut self) -> Vec<RenderCommand>;

    fn handle_press(&mut self, _button: MouseButton, _pos: Option<Point>) -> Vec<RenderCommand> {
        Vec::new()
    }

    fn handle_motion(&mut self, _pos: Option<Point>, _tolerance: HitTolerance) -> Vec<RenderCommand> {
        Vec::new()
    }

    fn handle_release(&mut self, _button: MouseButton, _pos: Option<Point>) -> Vec<RenderCommand> {
        Vec::new()
    }

    fn handle_pointer_left(&mut self) -> Vec<RenderCommand> {
        Vec::new()
    }

    fn handle_slider_change(&mut self, _value: f64) -> Vec<RenderCommand> {
        Vec::new()
    }

    fn handle_series_visibility(&mut self, _index: usize, _visible: bool) -> Vec<RenderCommand> {
        Vec::new()
    }

    /// The current window
    fn window(&self) -> &ViewWindow;

    /// Route an event to its handler
    fn dispatch(&mut self, event: InputEvent) -> Vec<RenderCommand> {
        match event {
            InputEvent::Press { button, pos } => self.handle_press(button, pos),
            InputEvent::Motion { pos, tolerance } => self.handle_motion(pos, tolerance),
            InputEvent::Release { button, pos } => self.handle_release(button, pos),
            InputEvent::PointerLeft => self.handle_pointer_left(),
            InputEvent::SliderChanged(value) => self.handle_slider_change(value),
            InputEvent::SeriesVisibility { index, visible } => {
                self.handle_series_visibility(index, visible)
            }
        }
    }
}

/// Build the controller for `mode`
pub fn build_controller(
    mode: ViewerMode,
    data: Arc<DataSeries>,
    options: &ViewerOptions,
) -> Box<dyn InputController> {
    match mode {
        ViewerMode::Scroll => Box::new(ScrollController::new(data, options)),
        ViewerMode::BoxZoom => Box::new(BoxZoomController::new(data)),
        ViewerMode::SliderZoom => Box::new(SliderZoomController::new(data)),
    }
}
