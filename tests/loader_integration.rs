//! Integration tests for CSV loading
//!
//! These tests validate loading from real files:
//! - Missing and empty files
//! - Column count and cell errors
//! - Numeric and categorical X columns

mod common;

use common::{assert_float_eq, write_csv};
use csvplot_rs::data::load_csv;
use csvplot_rs::CsvPlotError;
use std::path::Path;

#[test]
fn test_load_numeric_file() {
    let file = write_csv("time,temp,pressure\n0,20.5,1013\n1,21.0,1012\n2,21.4,1011\n");
    let data = load_csv(file.path()).unwrap();

    assert_eq!(data.len(), 3);
    assert_eq!(data.x_label(), "time");
    assert_eq!(data.x(), &[0.0, 1.0, 2.0]);
    assert_eq!(data.series().len(), 2);
    assert_eq!(data.series()[0].name, "temp");
    assert_eq!(data.series()[1].name, "pressure");
    assert!(data.x_labels().is_none());
    assert_float_eq(data.y_bounds().min, 20.5, 1e-12);
    assert_float_eq(data.y_bounds().max, 1013.0, 1e-12);
}

#[test]
fn test_missing_file() {
    let err = load_csv(Path::new("/nonexistent/data.csv")).unwrap_err();
    assert!(matches!(err, CsvPlotError::FileNotFound { .. }));
    assert_eq!(err.to_string(), "File '/nonexistent/data.csv' not found");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_empty_file() {
    let file = write_csv("");
    let err = load_csv(file.path()).unwrap_err();
    assert!(matches!(err, CsvPlotError::EmptyData { .. }));
    assert!(err.to_string().ends_with("is empty"));
}

#[test]
fn test_header_only_file_is_empty() {
    let file = write_csv("x,y\n");
    let err = load_csv(file.path()).unwrap_err();
    assert!(matches!(err, CsvPlotError::EmptyData { .. }));
}

#[test]
fn test_single_column_is_rejected() {
    let file = write_csv("x\n1\n2\n");
    let err = load_csv(file.path()).unwrap_err();
    assert!(matches!(err, CsvPlotError::Schema(_)));
    assert!(err
        .to_string()
        .starts_with("CSV file must have at least 2 columns"));
}

#[test]
fn test_non_numeric_value_is_parse_error() {
    let file = write_csv("x,y\n1,2\n2,abc\n");
    let err = load_csv(file.path()).unwrap_err();
    assert!(matches!(err, CsvPlotError::Parse(_)));
    let message = err.to_string();
    assert!(message.starts_with("Failed to read CSV file"));
    assert!(message.contains("'abc'"));
    assert!(message.contains("column 'y'"));
}

#[test]
fn test_ragged_row_is_parse_error() {
    let file = write_csv("x,y,z\n1,2,3\n2,3\n");
    let err = load_csv(file.path()).unwrap_err();
    assert!(matches!(err, CsvPlotError::Parse(_)));
}

#[test]
fn test_blank_x_cell_keeps_column_numeric() {
    let file = write_csv("x,y\n0.5,1\n,2\n10,3\n");
    let err = load_csv(file.path()).unwrap_err();
    assert!(matches!(err, CsvPlotError::Parse(_)));
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn test_nan_x_value_is_rejected() {
    let file = write_csv("x,y\nnan,1\n1,2\n2,3\n");
    let err = load_csv(file.path()).unwrap_err();
    assert!(matches!(err, CsvPlotError::Parse(_)));
    assert!(err.to_string().contains("'nan'"));
}

#[test]
fn test_categorical_x_column() {
    let file = write_csv("day,sales\nmon,10\ntue,12\nwed,9\n");
    let data = load_csv(file.path()).unwrap();

    assert_eq!(data.x(), &[0.0, 1.0, 2.0]);
    assert_eq!(
        data.x_labels().map(|l| l.to_vec()),
        Some(vec!["mon".to_string(), "tue".to_string(), "wed".to_string()])
    );
    assert_eq!(data.x_display(1), "tue");
}

#[test]
fn test_blank_value_is_gap() {
    let file = write_csv("x,a,b\n0,1,5\n1,,6\n2,3,7\n");
    let data = load_csv(file.path()).unwrap();

    assert!(data.series()[0].values[1].is_nan());
    // Gaps are skipped when drawing
    assert_eq!(data.series()[0].plot_points(data.x()).len(), 2);
    assert_eq!(data.series()[1].plot_points(data.x()).len(), 3);
}

#[test]
fn test_whitespace_is_trimmed() {
    let file = write_csv(" x , y \n 1 , 2.5 \n");
    let data = load_csv(file.path()).unwrap();
    assert_eq!(data.x_label(), "x");
    assert_eq!(data.series()[0].name, "y");
    assert_eq!(data.series()[0].values, vec![2.5]);
}
