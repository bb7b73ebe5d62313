//! The visible data window
//!
//! A [`ViewWindow`] holds the current axis limits and the form in which the
//! active variant expresses them. Every setter clamps its input and returns the
//! resulting [`AxisLimits`], which callers forward to the surface as the
//! axis-limits-changed signal.

use crate::config::{AXIS_PADDING_FRACTION, ZOOM_MAX, ZOOM_MIN};
use crate::types::{AxisLimits, AxisRange, DataSeries, Point};
use std::sync::Arc;

/// How the window is expressed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowForm {
    /// `window_size` consecutive rows starting at `start_index`
    Index { start_index: usize, window_size: usize },
    /// Free X bounds in data coordinates
    Coordinate,
    /// Full range scaled by `factor` around the fixed data center
    Zoom { factor: f64 },
}

/// Mutable state describing the visible sub-range of the data
#[derive(Debug, Clone)]
pub struct ViewWindow {
    data: Arc<DataSeries>,
    form: WindowForm,
    limits: AxisLimits,
    /// Padded full-data bounds; centers and spans for zooming come from here
    full: AxisLimits,
    center: Point,
}

impl ViewWindow {
    fn with_form(data: Arc<DataSeries>, form: WindowForm) -> Self {
        let full = AxisLimits::new(
            data.x_bounds().padded(AXIS_PADDING_FRACTION),
            data.y_bounds().padded(AXIS_PADDING_FRACTION),
        );
        let center = Point::new(full.x.center(), full.y.center());
        let mut window = Self {
            data,
            form,
            limits: full,
            center,
            full,
        };
        window.reset();
        window
    }

    /// Index-window form starting at row 0
    pub fn index(data: Arc<DataSeries>, window_size: usize) -> Self {
        let mut window = Self::with_form(
            data,
            WindowForm::Index {
                start_index: 0,
                window_size: 0,
            },
        );
        window.set_by_indices(0, window_size.saturating_sub(1));
        window
    }

    /// Coordinate-window form showing the padded full bounds
    pub fn coordinate(data: Arc<DataSeries>) -> Self {
        Self::with_form(data, WindowForm::Coordinate)
    }

    /// Zoom-factor form at factor 1.0
    pub fn zoom(data: Arc<DataSeries>) -> Self {
        Self::with_form(data, WindowForm::Zoom { factor: ZOOM_MAX })
    }

    pub fn form(&self) -> WindowForm {
        self.form
    }

    pub fn limits(&self) -> AxisLimits {
        self.limits
    }

    /// Padded bounds of the whole table
    pub fn full_bounds(&self) -> AxisLimits {
        self.full
    }

    pub fn data(&self) -> &Arc<DataSeries> {
        &self.data
    }

    /// Restore the full-data view.
    ///
    /// The index form shows every row with X limits at the raw data bounds;
    /// the other forms show the padded bounds on both axes.
    pub fn reset(&mut self) -> AxisLimits {
        match self.form {
            WindowForm::Index { .. } => {
                self.form = WindowForm::Index {
                    start_index: 0,
                    window_size: self.data.len(),
                };
                self.limits = AxisLimits::new(self.data.x_bounds(), self.full.y);
            }
            WindowForm::Coordinate => {
                self.limits = self.full;
            }
            WindowForm::Zoom { .. } => {
                return self.set_by_zoom(ZOOM_MAX);
            }
        }
        self.limits
    }

    /// Show rows `start..=end`, clamped to the table.
    ///
    /// X limits become `x[start]..x[end]`; Y limits are left unchanged.
    pub fn set_by_indices(&mut self, start: usize, end: usize) -> AxisLimits {
        let last = self.data.len() - 1;
        let start = start.min(last);
        let end = end.min(last).max(start);
        let x = self.data.x();

        self.form = WindowForm::Index {
            start_index: start,
            window_size: end - start + 1,
        };
        self.limits.x = AxisRange {
            min: x[start].min(x[end]),
            max: x[start].max(x[end]),
        };
        self.limits
    }

    /// Show X in `left..right`; Y limits are left unchanged
    pub fn set_by_coords(&mut self, left: f64, right: f64) -> AxisLimits {
        self.form = WindowForm::Coordinate;
        self.limits.x = AxisRange::new(left, right);
        self.limits
    }

    /// Scale the full view by `factor` around the data center.
    ///
    /// The factor is clamped to `[ZOOM_MIN, ZOOM_MAX]` and applied to X and Y
    /// independently.
    pub fn set_by_zoom(&mut self, factor: f64) -> AxisLimits {
        let factor = if factor.is_nan() {
            ZOOM_MAX
        } else {
            factor.clamp(ZOOM_MIN, ZOOM_MAX)
        };
        self.form = WindowForm::Zoom { factor };
        self.limits = AxisLimits::new(
            AxisRange::centered(self.center.x, self.full.x.span() * factor),
            AxisRange::centered(self.center.y, self.full.y.span() * factor),
        );
        self.limits
    }
}
