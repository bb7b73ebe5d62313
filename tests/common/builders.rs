//! Test data builders for creating test objects

use csvplot_rs::{DataSeries, Series};
use std::sync::Arc;

/// Builder for creating test DataSeries
pub struct DataSeriesBuilder {
    x_label: String,
    x: Vec<f64>,
    series: Vec<Series>,
}

impl DataSeriesBuilder {
    pub fn new(x_label: &str) -> Self {
        Self {
            x_label: x_label.to_string(),
            x: Vec::new(),
            series: Vec::new(),
        }
    }

    /// X values `0, 1, ..., n - 1`
    pub fn rows(mut self, n: usize) -> Self {
        self.x = (0..n).map(|i| i as f64).collect();
        self
    }

    pub fn x(mut self, x: Vec<f64>) -> Self {
        self.x = x;
        self
    }

    /// Add a series computed from the X values
    pub fn series_fn(mut self, name: &str, f: impl Fn(f64) -> f64) -> Self {
        let values = self.x.iter().map(|&x| f(x)).collect();
        self.series.push(Series::new(name, values));
        self
    }

    pub fn series(mut self, name: &str, values: Vec<f64>) -> Self {
        self.series.push(Series::new(name, values));
        self
    }

    pub fn build(self) -> Arc<DataSeries> {
        Arc::new(
            DataSeries::new(self.x_label, self.x, self.series).expect("Invalid test data"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_series_builder() {
        let data = DataSeriesBuilder::new("t")
            .rows(4)
            .series_fn("double", |x| 2.0 * x)
            .build();

        assert_eq!(data.len(), 4);
        assert_eq!(data.x_label(), "t");
        assert_eq!(data.series()[0].values, vec![0.0, 2.0, 4.0, 6.0]);
    }
}
