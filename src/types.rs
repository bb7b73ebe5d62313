//! Core data types for csvplot-rs
//!
//! This module contains the geometry shared by the interaction core and the
//! immutable table produced by the CSV loader.
//!
//! # Main Types
//!
//! - [`Point`] - A position in data coordinates
//! - [`AxisRange`] - A closed `[min, max]` interval on one axis
//! - [`AxisLimits`] - The visible X and Y ranges of the chart
//! - [`Rect`] - An axis-aligned rectangle in data coordinates
//! - [`Series`] - One named Y column
//! - [`DataSeries`] - The loaded table: X column, Y series and global bounds
//!
//! # Categorical X
//!
//! When the first CSV column is not numeric, X coordinates are the row
//! positions `0..n` and the raw strings are kept in
//! [`DataSeries::x_labels`] for tick and tooltip text.

use crate::error::{CsvPlotError, Result};
use crate::view::format::format_sig;

/// A position in data coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A closed interval on a single axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Create a range, swapping the ends if they are given in reverse
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Width of the range
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the range
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Expand both ends by `fraction` of the span.
    ///
    /// A zero-width range is expanded by `1.0` on each side so that the result
    /// is always drawable.
    pub fn padded(&self, fraction: f64) -> Self {
        let span = self.span();
        let pad = if span > 0.0 { span * fraction } else { 1.0 };
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// A range of `span` width centred on `center`
    pub fn centered(center: f64, span: f64) -> Self {
        let half = span.abs() / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Compute the range of the finite values in an iterator
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }
}

/// Visible bounds of the chart on both axes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisLimits {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl AxisLimits {
    pub fn new(x: AxisRange, y: AxisRange) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in data coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl Rect {
    pub fn new(x: AxisRange, y: AxisRange) -> Self {
        Self { x, y }
    }

    /// Corner points in drawing order, starting bottom-left
    pub fn corners(&self) -> [[f64; 2]; 4] {
        [
            [self.x.min, self.y.min],
            [self.x.max, self.y.min],
            [self.x.max, self.y.max],
            [self.x.min, self.y.max],
        ]
    }
}

/// A named column of Y values
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    /// Values aligned with the X column; missing cells are `NaN`
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Plot points for the finite values of this series
    pub fn plot_points(&self, x: &[f64]) -> Vec<[f64; 2]> {
        x.iter()
            .zip(&self.values)
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}

/// The loaded table: one X column and one or more Y series.
///
/// Immutable after construction. `len() >= 1`, at least one series, and every
/// series has exactly `len()` values.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSeries {
    x_label: String,
    x: Vec<f64>,
    x_labels: Option<Vec<String>>,
    series: Vec<Series>,
    x_bounds: AxisRange,
    y_bounds: AxisRange,
}

impl DataSeries {
    /// Build a table from numeric X values
    pub fn new(x_label: impl Into<String>, x: Vec<f64>, series: Vec<Series>) -> Result<Self> {
        Self::build(x_label.into(), x, None, series)
    }

    /// Build a table whose X column is categorical.
    ///
    /// X coordinates are the row positions and `labels` supplies the text.
    pub fn categorical(
        x_label: impl Into<String>,
        labels: Vec<String>,
        series: Vec<Series>,
    ) -> Result<Self> {
        let x = (0..labels.len()).map(|i| i as f64).collect();
        Self::build(x_label.into(), x, Some(labels), series)
    }

    fn build(
        x_label: String,
        x: Vec<f64>,
        x_labels: Option<Vec<String>>,
        series: Vec<Series>,
    ) -> Result<Self> {
        if x.is_empty() {
            return Err(CsvPlotError::Schema("table has no rows".to_string()));
        }
        if series.is_empty() {
            return Err(CsvPlotError::Schema("no Y series".to_string()));
        }
        if let Some(row) = x.iter().position(|v| !v.is_finite()) {
            return Err(CsvPlotError::Schema(format!("X value in row {} is not finite", row)));
        }
        if let Some(bad) = series.iter().find(|s| s.values.len() != x.len()) {
            return Err(CsvPlotError::Schema(format!(
                "series '{}' has {} values, expected {}",
                bad.name,
                bad.values.len(),
                x.len()
            )));
        }

        let x_bounds = AxisRange::from_values(x.iter().copied()).unwrap_or_default();
        let y_bounds = AxisRange::from_values(series.iter().flat_map(|s| s.values.iter().copied()))
            .unwrap_or_default();

        Ok(Self {
            x_label,
            x,
            x_labels,
            series,
            x_bounds,
            y_bounds,
        })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a constructed table; present for API symmetry
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Header of the X column
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// X coordinates
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Raw strings of a categorical X column
    pub fn x_labels(&self) -> Option<&[String]> {
        self.x_labels.as_deref()
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn x_bounds(&self) -> AxisRange {
        self.x_bounds
    }

    pub fn y_bounds(&self) -> AxisRange {
        self.y_bounds
    }

    /// Index of the row whose X is nearest to `target`.
    ///
    /// Ties go to the first row in table order.
    pub fn nearest_index(&self, target: f64) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (i, &x) in self.x.iter().enumerate() {
            let distance = (x - target).abs();
            if distance < best_distance {
                best_distance = distance;
                best = i;
            }
        }
        best
    }

    /// Display text for the X value of row `index`
    pub fn x_display(&self, index: usize) -> String {
        match self.x_labels.as_ref().and_then(|labels| labels.get(index)) {
            Some(label) => label.clone(),
            None => self
                .x
                .get(index)
                .map(|&x| format_sig(x, 4))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataSeries {
        DataSeries::new(
            "t",
            vec![0.0, 1.0, 2.0, 3.0],
            vec![
                Series::new("a", vec![1.0, 5.0, f64::NAN, 2.0]),
                Series::new("b", vec![-3.0, 0.0, 0.5, 4.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_bounds_skip_missing_values() {
        let data = sample();
        assert_eq!(data.x_bounds(), AxisRange::new(0.0, 3.0));
        assert_eq!(data.y_bounds(), AxisRange::new(-3.0, 5.0));
    }

    #[test]
    fn test_rejects_ragged_series() {
        let err = DataSeries::new("t", vec![0.0, 1.0], vec![Series::new("a", vec![1.0])])
            .unwrap_err();
        assert!(matches!(err, CsvPlotError::Schema(_)));
    }

    #[test]
    fn test_rejects_non_finite_x() {
        let err = DataSeries::new(
            "t",
            vec![f64::NAN, 1.0, 2.0],
            vec![Series::new("a", vec![1.0, 2.0, 3.0])],
        )
        .unwrap_err();
        assert!(matches!(err, CsvPlotError::Schema(_)));
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(DataSeries::new("t", vec![], vec![Series::new("a", vec![])]).is_err());
        assert!(DataSeries::new("t", vec![1.0], vec![]).is_err());
    }

    #[test]
    fn test_nearest_index_ties_go_to_first() {
        let data = sample();
        assert_eq!(data.nearest_index(1.5), 1);
        assert_eq!(data.nearest_index(-10.0), 0);
        assert_eq!(data.nearest_index(2.6), 3);
    }

    #[test]
    fn test_padded_range() {
        let r = AxisRange::new(0.0, 100.0).padded(0.05);
        assert_eq!(r, AxisRange::new(-5.0, 105.0));

        let flat = AxisRange::new(3.0, 3.0).padded(0.05);
        assert_eq!(flat, AxisRange::new(2.0, 4.0));
    }

    #[test]
    fn test_categorical_x() {
        let data = DataSeries::categorical(
            "day",
            vec!["mon".into(), "tue".into()],
            vec![Series::new("v", vec![1.0, 2.0])],
        )
        .unwrap();
        assert_eq!(data.x(), &[0.0, 1.0]);
        assert_eq!(data.x_display(1), "tue");
    }

    #[test]
    fn test_plot_points_skip_nan() {
        let data = sample();
        let points = data.series()[0].plot_points(data.x());
        assert_eq!(points, vec![[0.0, 1.0], [1.0, 5.0], [3.0, 2.0]]);
    }
}
