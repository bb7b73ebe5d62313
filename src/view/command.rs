//! Render commands issued by the interaction core
//!
//! The core never touches the canvas. Handlers return a list of
//! [`RenderCommand`]s which the host applies to a [`RenderSurface`]. The
//! retained [`SurfaceState`] is the surface the egui frontend draws from and
//! the one tests inspect.

use crate::types::{AxisLimits, Point, Rect};
use std::collections::BTreeMap;

/// Identifier of an overlay shape on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u64);

/// Chart axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A labelled tick mark
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Slider control shown beneath the chart
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

/// A single instruction for the chart surface
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw every series of the loaded table
    DrawSeries,
    SetAxisLimits(AxisLimits),
    SetTicks { axis: Axis, ticks: Vec<Tick> },
    /// Return an axis to automatic tick placement
    ClearTicks(Axis),
    SetSlider(SliderState),
    AddOverlayShape { id: ShapeId, rect: Rect },
    RemoveOverlayShape(ShapeId),
    ShowAnnotation { text: String, anchor: Point },
    HideAnnotation,
}

impl RenderCommand {
    /// Forward this command to the matching surface method
    pub fn apply(self, surface: &mut dyn RenderSurface) {
        match self {
            RenderCommand::DrawSeries => surface.draw_series(),
            RenderCommand::SetAxisLimits(limits) => surface.set_axis_limits(limits),
            RenderCommand::SetTicks { axis, ticks } => surface.set_ticks(axis, ticks),
            RenderCommand::ClearTicks(axis) => surface.clear_ticks(axis),
            RenderCommand::SetSlider(slider) => surface.set_slider(slider),
            RenderCommand::AddOverlayShape { id, rect } => surface.add_overlay_shape(id, rect),
            RenderCommand::RemoveOverlayShape(id) => surface.remove_overlay_shape(id),
            RenderCommand::ShowAnnotation { text, anchor } => surface.show_annotation(text, anchor),
            RenderCommand::HideAnnotation => surface.hide_annotation(),
        }
    }
}

/// The drawing operations the core relies on
pub trait RenderSurface {
    fn draw_series(&mut self);
    fn set_axis_limits(&mut self, limits: AxisLimits);
    fn set_ticks(&mut self, axis: Axis, ticks: Vec<Tick>);
    fn clear_ticks(&mut self, axis: Axis);
    fn set_slider(&mut self, slider: SliderState);
    fn add_overlay_shape(&mut self, id: ShapeId, rect: Rect);
    fn remove_overlay_shape(&mut self, id: ShapeId);
    fn show_annotation(&mut self, text: String, anchor: Point);
    fn hide_annotation(&mut self);
}

/// A visible hover annotation
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub anchor: Point,
}

/// Retained result of every command applied so far
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceState {
    pub series_visible: bool,
    pub limits: AxisLimits,
    pub x_ticks: Option<Vec<Tick>>,
    pub y_ticks: Option<Vec<Tick>>,
    pub slider: Option<SliderState>,
    pub overlays: BTreeMap<ShapeId, Rect>,
    pub annotation: Option<Annotation>,
    /// Number of applied commands that changed the limits
    pub limit_updates: usize,
}

impl SurfaceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a batch of commands in order
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = RenderCommand>) {
        for command in commands {
            command.apply(self);
        }
    }

    /// The selection rectangle, if one is shown
    pub fn selection(&self) -> Option<&Rect> {
        self.overlays.values().next()
    }
}

impl RenderSurface for SurfaceState {
    fn draw_series(&mut self) {
        self.series_visible = true;
    }

    fn set_axis_limits(&mut self, limits: AxisLimits) {
        self.limits = limits;
        self.limit_updates += 1;
    }

    fn set_ticks(&mut self, axis: Axis, ticks: Vec<Tick>) {
        match axis {
            Axis::X => self.x_ticks = Some(ticks),
            Axis::Y => self.y_ticks = Some(ticks),
        }
    }

    fn clear_ticks(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.x_ticks = None,
            Axis::Y => self.y_ticks = None,
        }
    }

    fn set_slider(&mut self, slider: SliderState) {
        self.slider = Some(slider);
    }

    fn add_overlay_shape(&mut self, id: ShapeId, rect: Rect) {
        self.overlays.insert(id, rect);
    }

    fn remove_overlay_shape(&mut self, id: ShapeId) {
        self.overlays.remove(&id);
    }

    fn show_annotation(&mut self, text: String, anchor: Point) {
        self.annotation = Some(Annotation { text, anchor });
    }

    fn hide_annotation(&mut self) {
        self.annotation = None;
    }
}
