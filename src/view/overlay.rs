//! Selection rectangle and hover annotation
//!
//! [`OverlayRenderer`] only remembers what it currently shows: the id of the
//! selection shape and whether the annotation is visible. The hover query,
//! [`hover_lookup`], is a pure function of the table and the pointer.

use super::command::{RenderCommand, ShapeId};
use super::format::format_sig;
use crate::types::{DataSeries, Point, Rect};
use std::collections::BTreeSet;

/// Radius around the pointer, in data units, within which a point is hit
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HitTolerance {
    pub x: f64,
    pub y: f64,
}

impl HitTolerance {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.abs(),
            y: y.abs(),
        }
    }

    /// Whether an offset lies inside the tolerance ellipse
    pub fn contains(&self, dx: f64, dy: f64) -> bool {
        let nx = normalized(dx, self.x);
        let ny = normalized(dy, self.y);
        nx * nx + ny * ny <= 1.0
    }
}

fn normalized(delta: f64, radius: f64) -> f64 {
    if radius > 0.0 {
        delta / radius
    } else if delta == 0.0 {
        0.0
    } else {
        f64::INFINITY
    }
}

/// A data point under the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct HoverHit {
    pub series_index: usize,
    pub row: usize,
    pub series_name: String,
    pub point: Point,
}

/// Find the point under `pointer`.
///
/// Series are tested in declaration order and the first visible series with
/// any point inside `tolerance` wins, even if a later series is closer in Y.
/// Within that series the first matching row is reported. Series whose index
/// is in `hidden` are not drawn and never match.
pub fn hover_lookup(
    data: &DataSeries,
    pointer: Point,
    tolerance: HitTolerance,
    hidden: &BTreeSet<usize>,
) -> Option<HoverHit> {
    let x = data.x();
    data.series()
        .iter()
        .enumerate()
        .filter(|(series_index, _)| !hidden.contains(series_index))
        .find_map(|(series_index, series)| {
            x.iter()
                .zip(&series.values)
                .position(|(&px, &py)| {
                    py.is_finite()
                        && px.is_finite()
                        && tolerance.contains(px - pointer.x, py - pointer.y)
                })
                .map(|row| HoverHit {
                    series_index,
                    row,
                    series_name: series.name.clone(),
                    point: Point::new(x[row], series.values[row]),
                })
        })
}

/// Annotation text for a hit: series name, X value and Y value
pub fn annotation_text(data: &DataSeries, hit: &HoverHit) -> String {
    format!(
        "{}\n{}: {}\nY: {}",
        hit.series_name,
        data.x_label(),
        data.x_display(hit.row),
        format_sig(hit.point.y, 4)
    )
}

/// Tracks which transient overlays are on the surface
#[derive(Debug, Clone, Default)]
pub struct OverlayRenderer {
    next_shape_id: u64,
    selection: Option<ShapeId>,
    /// Series index of the visible annotation
    annotated_series: Option<usize>,
    hidden_series: BTreeSet<usize>,
}

impl OverlayRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection_visible(&self) -> bool {
        self.selection.is_some()
    }

    pub fn annotation_visible(&self) -> bool {
        self.annotated_series.is_some()
    }

    pub fn hidden_series(&self) -> &BTreeSet<usize> {
        &self.hidden_series
    }

    /// Record that the host showed or hid a series.
    ///
    /// Hiding the series the annotation points at also hides the annotation.
    pub fn set_series_visible(&mut self, index: usize, visible: bool) -> Vec<RenderCommand> {
        if visible {
            self.hidden_series.remove(&index);
            return Vec::new();
        }
        self.hidden_series.insert(index);
        if self.annotated_series == Some(index) {
            self.hide_annotation()
        } else {
            Vec::new()
        }
    }

    /// Replace the selection rectangle
    pub fn show_selection(&mut self, rect: Rect) -> Vec<RenderCommand> {
        let mut commands = self.clear_selection();
        self.next_shape_id += 1;
        let id = ShapeId(self.next_shape_id);
        self.selection = Some(id);
        commands.push(RenderCommand::AddOverlayShape { id, rect });
        commands
    }

    /// Remove the selection rectangle if one is shown
    pub fn clear_selection(&mut self) -> Vec<RenderCommand> {
        self.selection
            .take()
            .map(RenderCommand::RemoveOverlayShape)
            .into_iter()
            .collect()
    }

    /// Hide the annotation if it is shown
    pub fn hide_annotation(&mut self) -> Vec<RenderCommand> {
        if self.annotated_series.take().is_some() {
            vec![RenderCommand::HideAnnotation]
        } else {
            Vec::new()
        }
    }

    /// Update the hover annotation for a pointer position.
    ///
    /// `suppressed` hides the annotation regardless of the pointer, which is
    /// how an active drag silences hover.
    pub fn hover(
        &mut self,
        data: &DataSeries,
        pointer: Option<Point>,
        tolerance: HitTolerance,
        suppressed: bool,
    ) -> Vec<RenderCommand> {
        let hit = match pointer {
            Some(pointer) if !suppressed => {
                hover_lookup(data, pointer, tolerance, &self.hidden_series)
            }
            _ => None,
        };

        match hit {
            Some(hit) => {
                self.annotated_series = Some(hit.series_index);
                vec![RenderCommand::ShowAnnotation {
                    text: annotation_text(data, &hit),
                    anchor: hit.point,
                }]
            }
            None => self.hide_annotation(),
        }
    }
}
