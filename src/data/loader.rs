//! CSV loader built on the `csv` crate

use crate::error::{CsvPlotError, Result};
use crate::types::{DataSeries, Series};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Load a CSV file from disk.
///
/// The first column is X, every further column a Y series.
pub fn load_csv(path: &Path) -> Result<DataSeries> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CsvPlotError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CsvPlotError::Io(e),
    })?;

    let data = parse_csv(path, BufReader::new(file))?;
    tracing::info!(
        "Loaded {} rows x {} series from {:?}",
        data.len(),
        data.series().len(),
        path
    );
    Ok(data)
}

/// Parse CSV content; `source` names the input in error messages
pub fn parse_csv<R: Read>(source: &Path, reader: R) -> Result<DataSeries> {
    let empty = || CsvPlotError::EmptyData {
        path: source.to_path_buf(),
    };

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(empty());
    }
    if headers.len() < 2 {
        return Err(CsvPlotError::Schema(format!(
            "found {} column in {}",
            headers.len(),
            source.display()
        )));
    }

    let series_count = headers.len() - 1;
    let x_header = headers.get(0).unwrap_or_default();
    let mut x_cells: Vec<String> = Vec::new();
    let mut x_lines: Vec<u64> = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); series_count];

    for result in csv_reader.records() {
        let record = result?;
        let line = record_line(&record);

        let x_cell = record.get(0).unwrap_or_default();
        if x_cell.is_empty() {
            return Err(CsvPlotError::Parse(format!(
                "line {}: missing value in column '{}'",
                line, x_header
            )));
        }
        x_cells.push(x_cell.to_string());
        x_lines.push(line);
        for (index, (column, cell)) in columns.iter_mut().zip(record.iter().skip(1)).enumerate() {
            let value = parse_value(cell).ok_or_else(|| {
                CsvPlotError::Parse(format!(
                    "line {}: '{}' in column '{}' is not a number",
                    line,
                    cell,
                    headers.get(index + 1).unwrap_or_default()
                ))
            })?;
            column.push(value);
        }
    }

    if x_cells.is_empty() {
        return Err(empty());
    }

    let series = headers
        .iter()
        .skip(1)
        .zip(columns)
        .map(|(name, values)| Series::new(name, values))
        .collect();

    let numeric_x: Option<Vec<f64>> = x_cells.iter().map(|c| c.parse::<f64>().ok()).collect();
    match numeric_x {
        Some(x) => {
            if let Some(row) = x.iter().position(|v| !v.is_finite()) {
                return Err(CsvPlotError::Parse(format!(
                    "line {}: '{}' in column '{}' is not a finite number",
                    x_lines[row], x_cells[row], x_header
                )));
            }
            DataSeries::new(x_header, x, series)
        }
        None => {
            tracing::debug!("X column '{}' is not numeric, treating as categorical", x_header);
            DataSeries::categorical(x_header, x_cells, series)
        }
    }
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

/// An empty cell is a missing value
fn parse_value(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        Some(f64::NAN)
    } else {
        cell.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<DataSeries> {
        parse_csv(Path::new("test.csv"), content.as_bytes())
    }

    #[test]
    fn test_parse_numeric_table() {
        let data = parse("t,a,b\n0,1.5,2\n1,2.5,-3\n2,3.5,4\n").unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.x_label(), "t");
        assert_eq!(data.series().len(), 2);
        assert_eq!(data.series()[1].name, "b");
        assert_eq!(data.y_bounds().min, -3.0);
        assert!(data.x_labels().is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse(""), Err(CsvPlotError::EmptyData { .. })));
        assert!(matches!(parse("t,a\n"), Err(CsvPlotError::EmptyData { .. })));
    }

    #[test]
    fn test_single_column_is_schema_error() {
        assert!(matches!(parse("t\n1\n2\n"), Err(CsvPlotError::Schema(_))));
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        assert!(matches!(parse("t,a\n1,2\n3\n"), Err(CsvPlotError::Parse(_))));
    }

    #[test]
    fn test_non_numeric_y_names_column() {
        let err = parse("t,a,b\n1,2,3\n2,x,4\n").unwrap_err();
        let text = err.to_string();
        assert!(text.contains("'a'"), "{}", text);
        assert!(text.contains("line 3"), "{}", text);
    }

    #[test]
    fn test_missing_y_cell_is_nan() {
        let data = parse("t,a\n1,2\n2,\n3,4\n").unwrap();
        assert!(data.series()[0].values[1].is_nan());
        assert_eq!(data.y_bounds().max, 4.0);
    }

    #[test]
    fn test_categorical_x_column() {
        let data = parse("day,v\nmon,1\ntue,2\nwed,3\n").unwrap();
        assert_eq!(data.x(), &[0.0, 1.0, 2.0]);
        assert_eq!(data.x_display(2), "wed");
    }

    #[test]
    fn test_blank_x_cell_is_parse_error() {
        let err = parse("x,y\n0.5,1\n,2\n10,3\n").unwrap_err();
        assert!(matches!(err, CsvPlotError::Parse(_)));
        let text = err.to_string();
        assert!(text.contains("line 3"), "{}", text);
        assert!(text.contains("column 'x'"), "{}", text);
    }

    #[test]
    fn test_non_finite_x_is_parse_error() {
        let err = parse("x,y\nnan,1\n1,2\n2,3\n").unwrap_err();
        assert!(matches!(err, CsvPlotError::Parse(_)));
        assert!(err.to_string().contains("line 2"), "{}", err);

        assert!(matches!(parse("x,y\n0,1\ninf,2\n"), Err(CsvPlotError::Parse(_))));
    }

    #[test]
    fn test_cells_are_trimmed() {
        let data = parse("t , a\n 1 , 2 \n").unwrap();
        assert_eq!(data.x(), &[1.0]);
        assert_eq!(data.series()[0].name, "a");
    }
}
