//! Data loading
//!
//! The loader turns a delimited file into an immutable [`DataSeries`]. It is
//! the only place where input can be rejected; see [`CsvPlotError`] for the
//! taxonomy.
//!
//! [`DataSeries`]: crate::types::DataSeries
//! [`CsvPlotError`]: crate::error::CsvPlotError

mod loader;

pub use loader::{load_csv, parse_csv};
