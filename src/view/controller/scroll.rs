//! Scrolling index window
//!
//! The window is `window_size` consecutive rows starting at the scroll
//! position `p`, with `p` in `[0, n - window_size]`. The slider moves `p`,
//! a left-drag selects a new row range and a right-click shows every row.

use super::{InputController, MouseButton};
use crate::config::ViewerOptions;
use crate::types::{AxisRange, DataSeries, Point, Rect};
use crate::view::command::{Axis, RenderCommand, SliderState};
use crate::view::drag::DragState;
use crate::view::overlay::{HitTolerance, OverlayRenderer};
use crate::view::ticks::{x_ticks, y_ticks};
use crate::view::window::ViewWindow;
use std::sync::Arc;

pub const SCROLL_SLIDER_LABEL: &str = "Scroll Position";

pub struct ScrollController {
    data: Arc<DataSeries>,
    window: ViewWindow,
    x_spacing: usize,
    y_spacing: Option<usize>,
    window_size: usize,
    position: usize,
    drag: DragState,
    overlay: OverlayRenderer,
}

impl ScrollController {
    pub fn new(data: Arc<DataSeries>, options: &ViewerOptions) -> Self {
        let window_size = options.initial_window.clamp(1, data.len());
        Self {
            window: ViewWindow::index(data.clone(), window_size),
            data,
            x_spacing: options.x_spacing,
            y_spacing: options.y_spacing,
            window_size,
            position: 0,
            drag: DragState::default(),
            overlay: OverlayRenderer::new(),
        }
    }

    /// Index of the first visible row
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of visible rows
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Largest valid scroll position
    pub fn max_scroll(&self) -> usize {
        self.data.len().saturating_sub(self.window_size)
    }

    pub fn slider(&self) -> SliderState {
        SliderState {
            label: SCROLL_SLIDER_LABEL.to_string(),
            min: 0.0,
            max: self.max_scroll() as f64,
            step: 1.0,
            value: self.position as f64,
        }
    }

    fn apply_window(&mut self) -> RenderCommand {
        let end = self.position + self.window_size - 1;
        RenderCommand::SetAxisLimits(self.window.set_by_indices(self.position, end))
    }

    fn abandon_drag(&mut self) -> Vec<RenderCommand> {
        if self.drag.finish().is_some() {
            tracing::trace!("Drag abandoned outside the plot");
        }
        self.overlay.clear_selection()
    }

    fn reset(&mut self) -> Vec<RenderCommand> {
        self.window_size = self.data.len();
        self.position = 0;
        let limits = self.window.reset();
        tracing::debug!("View reset to all {} rows", self.window_size);
        vec![
            RenderCommand::SetAxisLimits(limits),
            RenderCommand::SetSlider(self.slider()),
        ]
    }
}

impl InputController for ScrollController {
    fn initial_commands(&mut self) -> Vec<RenderCommand> {
        let y_ticks = match self.y_spacing {
            Some(spacing) => RenderCommand::SetTicks {
                axis: Axis::Y,
                ticks: y_ticks(&self.data, spacing),
            },
            None => RenderCommand::ClearTicks(Axis::Y),
        };
        vec![
            RenderCommand::DrawSeries,
            RenderCommand::SetTicks {
                axis: Axis::X,
                ticks: x_ticks(&self.data, self.x_spacing),
            },
            y_ticks,
            RenderCommand::SetAxisLimits(self.window.limits()),
            RenderCommand::SetSlider(self.slider()),
        ]
    }

    fn handle_press(&mut self, button: MouseButton, pos: Option<Point>) -> Vec<RenderCommand> {
        let Some(pos) = pos else {
            return Vec::new();
        };

        match button {
            MouseButton::Secondary if self.drag.is_dragging => Vec::new(),
            MouseButton::Secondary => self.reset(),
            MouseButton::Primary => {
                let mut commands = self.overlay.clear_selection();
                self.drag.begin(pos.x);
                commands.extend(self.overlay.hide_annotation());
                commands
            }
            MouseButton::Middle => Vec::new(),
        }
    }

    fn handle_motion(&mut self, pos: Option<Point>, tolerance: HitTolerance) -> Vec<RenderCommand> {
        let Some(anchor) = self.drag.active_anchor() else {
            return self.overlay.hover(&self.data, pos, tolerance, false);
        };
        let Some(pos) = pos else {
            return self.abandon_drag();
        };

        let rect = Rect::new(AxisRange::new(anchor, pos.x), self.window.limits().y);
        self.drag.selection_rect = Some(rect);
        let mut commands = self.overlay.show_selection(rect);
        commands.extend(self.overlay.hover(&self.data, Some(pos), tolerance, true));
        commands
    }

    fn handle_release(&mut self, button: MouseButton, pos: Option<Point>) -> Vec<RenderCommand> {
        if button != MouseButton::Primary || !self.drag.is_dragging {
            return Vec::new();
        }
        let Some(end) = pos else {
            return self.abandon_drag();
        };
        let Some(anchor) = self.drag.finish() else {
            return Vec::new();
        };

        let mut commands = self.overlay.clear_selection();
        let left_idx = self.data.nearest_index(anchor.min(end.x));
        let right_idx = self.data.nearest_index(anchor.max(end.x));

        if right_idx > left_idx {
            self.window_size = right_idx - left_idx + 1;
            self.position = left_idx;
            commands.push(self.apply_window());
            commands.push(RenderCommand::SetSlider(self.slider()));
            tracing::debug!(
                "Zoomed to rows {}..={} ({} points)",
                left_idx,
                right_idx,
                self.window_size
            );
        } else {
            tracing::trace!("Selection covers fewer than 2 points, ignoring");
        }
        commands
    }

    fn handle_series_visibility(&mut self, index: usize, visible: bool) -> Vec<RenderCommand> {
        self.overlay.set_series_visible(index, visible)
    }

    fn handle_pointer_left(&mut self) -> Vec<RenderCommand> {
        let mut commands = self.abandon_drag();
        commands.extend(self.overlay.hide_annotation());
        commands
    }

    fn handle_slider_change(&mut self, value: f64) -> Vec<RenderCommand> {
        if self.drag.is_dragging || value.is_nan() {
            return Vec::new();
        }
        self.position = value.round().clamp(0.0, self.max_scroll() as f64) as usize;
        vec![
            self.apply_window(),
            RenderCommand::SetSlider(self.slider()),
        ]
    }

    fn window(&self) -> &ViewWindow {
        &self.window
    }
}
