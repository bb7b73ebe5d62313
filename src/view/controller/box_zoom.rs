//! Click-drag zoom on X coordinates
//!
//! Same press/motion/release shape as the scroll variant, but the committed
//! window is the dragged X interval itself with no snapping to rows. Drags
//! narrower than [`MIN_DRAG_FRACTION`] of the X data range count as clicks.

use super::{InputController, MouseButton};
use crate::config::MIN_DRAG_FRACTION;
use crate::types::{AxisRange, DataSeries, Point, Rect};
use crate::view::command::{Axis, RenderCommand};
use crate::view::drag::DragState;
use crate::view::overlay::{HitTolerance, OverlayRenderer};
use crate::view::ticks::x_axis_command;
use crate::view::window::ViewWindow;
use std::sync::Arc;

pub struct BoxZoomController {
    data: Arc<DataSeries>,
    window: ViewWindow,
    drag: DragState,
    overlay: OverlayRenderer,
}

impl BoxZoomController {
    pub fn new(data: Arc<DataSeries>) -> Self {
        Self {
            window: ViewWindow::coordinate(data.clone()),
            data,
            drag: DragState::default(),
            overlay: OverlayRenderer::new(),
        }
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Smallest drag width that commits a zoom
    pub fn min_drag_width(&self) -> f64 {
        MIN_DRAG_FRACTION * self.data.x_bounds().span()
    }

    fn abandon_drag(&mut self) -> Vec<RenderCommand> {
        if self.drag.finish().is_some() {
            tracing::trace!("Drag abandoned outside the plot");
        }
        self.overlay.clear_selection()
    }
}

impl InputController for BoxZoomController {
    fn initial_commands(&mut self) -> Vec<RenderCommand> {
        vec![
            RenderCommand::DrawSeries,
            x_axis_command(&self.data),
            RenderCommand::ClearTicks(Axis::Y),
            RenderCommand::SetAxisLimits(self.window.limits()),
        ]
    }

    fn handle_press(&mut self, button: MouseButton, pos: Option<Point>) -> Vec<RenderCommand> {
        let Some(pos) = pos else {
            return Vec::new();
        };

        match button {
            MouseButton::Secondary if self.drag.is_dragging => Vec::new(),
            MouseButton::Secondary => {
                tracing::debug!("View reset to padded data bounds");
                vec![RenderCommand::SetAxisLimits(self.window.reset())]
            }
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
        if (end.x - anchor).abs() > self.min_drag_width() {
            let limits = self.window.set_by_coords(anchor.min(end.x), anchor.max(end.x));
            tracing::debug!("Zoomed to x in [{}, {}]", limits.x.min, limits.x.max);
            commands.push(RenderCommand::SetAxisLimits(limits));
        } else {
            tracing::trace!("Drag narrower than threshold, ignoring");
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

    fn window(&self) -> &ViewWindow {
        &self.window
    }
}
