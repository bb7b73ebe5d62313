//! Chart widget
//!
//! Draws the retained [`SurfaceState`] with egui_plot and turns raw pointer
//! input over the plot frame into [`InputEvent`]s. egui_plot's own navigation
//! is switched off; all view changes go through the controller.

use crate::config::DisplaySettings;
use crate::types::{DataSeries, Point};
use crate::view::{HitTolerance, InputEvent, MouseButton, SurfaceState, Tick};
use egui::{Color32, FontId, Id, PointerButton, Pos2, Stroke, Ui};
use egui_plot::{
    Corner, GridInput, GridMark, Legend, LegendGrouping, Line, Plot, PlotBounds, PlotMemory,
    PlotPoints, PlotResponse, PlotTransform, Points, Polygon,
};

const BUTTONS: [(PointerButton, MouseButton); 3] = [
    (PointerButton::Primary, MouseButton::Primary),
    (PointerButton::Secondary, MouseButton::Secondary),
    (PointerButton::Middle, MouseButton::Middle),
];

const SELECTION_FILL: Color32 = Color32::from_rgba_premultiplied(40, 80, 160, 60);
const ANNOTATION_FILL: Color32 = Color32::from_rgb(255, 240, 150);

/// Series colors, cycled by series index
const PALETTE: [Color32; 8] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(214, 39, 40),
    Color32::from_rgb(148, 103, 189),
    Color32::from_rgb(140, 86, 75),
    Color32::from_rgb(227, 119, 194),
    Color32::from_rgb(127, 127, 127),
];

pub fn series_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

fn chart_id() -> Id {
    Id::new("csv_chart")
}

/// Plot item id shared by a series' line and its markers
fn series_id(index: usize) -> Id {
    Id::new(("csv_series", index))
}

/// Pointer and legend bookkeeping between frames
#[derive(Debug, Default)]
pub struct ChartView {
    last_pointer: Option<Pos2>,
    was_inside: bool,
    /// Per-series legend state seen last frame, true when hidden
    hidden: Vec<bool>,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the chart and collect this frame's input events
    pub fn show(
        &mut self,
        ui: &mut Ui,
        surface: &SurfaceState,
        data: &DataSeries,
        settings: &DisplaySettings,
    ) -> Vec<InputEvent> {
        let mut plot = Plot::new("csv_chart")
            .id(chart_id())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_axes(true)
            .show_grid(settings.show_grid)
            .x_axis_label(data.x_label().to_string())
            .y_axis_label("Values");

        if settings.show_legend {
            plot = plot.legend(
                Legend::default()
                    .position(Corner::RightTop)
                    .grouping(LegendGrouping::ById)
                    .background_alpha(0.8),
            );
        }

        if let Some(ticks) = &surface.x_ticks {
            let marks = ticks.clone();
            let labels = ticks.clone();
            plot = plot
                .x_grid_spacer(move |input| fixed_marks(&marks, input))
                .x_axis_formatter(move |mark, _range| tick_label(&labels, mark.value));
        }
        if let Some(ticks) = &surface.y_ticks {
            let marks = ticks.clone();
            let labels = ticks.clone();
            plot = plot
                .y_grid_spacer(move |input| fixed_marks(&marks, input))
                .y_axis_formatter(move |mark, _range| tick_label(&labels, mark.value));
        }

        let limits = surface.limits;
        let response = plot.show(ui, |plot_ui| {
            let x = widen(limits.x.min, limits.x.max);
            let y = widen(limits.y.min, limits.y.max);
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([x.0, y.0], [x.1, y.1]));

            if surface.series_visible {
                let xs = data.x();
                for (index, series) in data.series().iter().enumerate() {
                    let color = series_color(index);
                    let points = series.plot_points(xs);
                    plot_ui.line(
                        Line::new(series.name.clone(), PlotPoints::from(points.clone()))
                            .id(series_id(index))
                            .color(color)
                            .width(settings.line_width),
                    );
                    if settings.marker_radius > 0.0 {
                        plot_ui.points(
                            Points::new(series.name.clone(), points)
                                .id(series_id(index))
                                .radius(settings.marker_radius)
                                .color(color),
                        );
                    }
                }
            }

            for rect in surface.overlays.values() {
                plot_ui.polygon(
                    Polygon::new("", PlotPoints::from(rect.corners().to_vec()))
                        .fill_color(SELECTION_FILL),
                );
            }
        });

        if let Some(annotation) = &surface.annotation {
            draw_annotation(ui, &response.transform, annotation.anchor, &annotation.text);
        }

        let mut events = self.legend_changes(ui, data.series().len());
        events.extend(self.translate_input(ui, &response, settings));
        events
    }

    /// Visibility events for series toggled in the legend since last frame
    fn legend_changes(&mut self, ui: &Ui, series_count: usize) -> Vec<InputEvent> {
        let hidden: Vec<bool> = match PlotMemory::load(ui.ctx(), chart_id()) {
            Some(memory) => (0..series_count)
                .map(|i| memory.hidden_items.contains(&series_id(i)))
                .collect(),
            None => vec![false; series_count],
        };
        visibility_changes(&mut self.hidden, hidden)
    }

    fn translate_input(
        &mut self,
        ui: &Ui,
        response: &PlotResponse<()>,
        settings: &DisplaySettings,
    ) -> Vec<InputEvent> {
        let transform = &response.transform;
        let frame = *transform.frame();
        let pointer = ui
            .input(|i| i.pointer.latest_pos())
            .filter(|p| frame.contains(*p));
        let pos = pointer.map(|p| to_data(transform, p));

        let mut events = Vec::new();

        for (egui_button, button) in BUTTONS {
            if ui.input(|i| i.pointer.button_pressed(egui_button)) {
                events.push(InputEvent::Press { button, pos });
            }
        }

        if let Some(p) = pointer {
            if self.last_pointer != Some(p) || !self.was_inside {
                let tolerance = hit_tolerance(transform, p, settings.hit_radius_px);
                events.push(InputEvent::Motion { pos, tolerance });
            }
        }

        for (egui_button, button) in BUTTONS {
            if ui.input(|i| i.pointer.button_released(egui_button)) {
                events.push(InputEvent::Release { button, pos });
            }
        }

        if self.was_inside && pointer.is_none() {
            events.push(InputEvent::PointerLeft);
        }

        self.was_inside = pointer.is_some();
        self.last_pointer = pointer;
        events
    }
}

/// Diff the legend state against `previous` and store the new state
fn visibility_changes(previous: &mut Vec<bool>, hidden: Vec<bool>) -> Vec<InputEvent> {
    previous.resize(hidden.len(), false);
    let events = previous
        .iter()
        .zip(&hidden)
        .enumerate()
        .filter(|(_, (was, now))| was != now)
        .map(|(index, (_, &now))| {
            tracing::debug!("Series {} {} in legend", index, if now { "hidden" } else { "shown" });
            InputEvent::SeriesVisibility {
                index,
                visible: !now,
            }
        })
        .collect();
    *previous = hidden;
    events
}

fn to_data(transform: &PlotTransform, pos: Pos2) -> Point {
    let value = transform.value_from_position(pos);
    Point::new(value.x, value.y)
}

/// Convert a radius in screen pixels to data units at `pos`
fn hit_tolerance(transform: &PlotTransform, pos: Pos2, radius_px: f32) -> HitTolerance {
    let origin = transform.value_from_position(pos);
    let offset = transform.value_from_position(pos + egui::vec2(radius_px, radius_px));
    HitTolerance::new(offset.x - origin.x, offset.y - origin.y)
}

/// egui_plot cannot show an empty range
fn widen(min: f64, max: f64) -> (f64, f64) {
    if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    }
}

/// Grid marks at exactly the given tick values
fn fixed_marks(ticks: &[Tick], input: GridInput) -> Vec<GridMark> {
    let (lo, hi) = input.bounds;
    let fallback = (hi - lo).abs().max(f64::EPSILON);

    ticks
        .iter()
        .enumerate()
        .map(|(i, tick)| {
            let prev = i.checked_sub(1).and_then(|j| ticks.get(j));
            let next = ticks.get(i + 1);
            let step_size = [prev, next]
                .into_iter()
                .flatten()
                .map(|other| (other.value - tick.value).abs())
                .filter(|gap| *gap > 0.0)
                .fold(fallback, f64::min);
            GridMark {
                value: tick.value,
                step_size,
            }
        })
        .collect()
}

fn tick_label(ticks: &[Tick], value: f64) -> String {
    ticks
        .iter()
        .find(|t| t.value == value)
        .map(|t| t.label.clone())
        .unwrap_or_default()
}

fn draw_annotation(ui: &Ui, transform: &PlotTransform, anchor: Point, text: &str) {
    let screen = transform.position_from_point(&egui_plot::PlotPoint::new(anchor.x, anchor.y));
    let painter = ui.painter_at(*transform.frame());

    painter.circle_stroke(screen, 5.0, Stroke::new(1.5, Color32::BLACK));

    let galley = painter.layout_no_wrap(text.to_string(), FontId::proportional(12.0), Color32::BLACK);
    let margin = egui::vec2(4.0, 4.0);
    let min = screen + egui::vec2(10.0, -10.0 - galley.size().y - 2.0 * margin.y);
    let rect = egui::Rect::from_min_size(min, galley.size() + 2.0 * margin);

    painter.rect_filled(rect, 4.0, ANNOTATION_FILL);
    painter.rect_stroke(rect, 4.0, Stroke::new(1.0, Color32::BLACK), egui::StrokeKind::Inside);
    painter.galley(rect.min + margin, galley, Color32::BLACK);
}
