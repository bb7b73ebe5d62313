//! # csvplot-rs: Interactive CSV Chart Viewer
//!
//! Loads a delimited table (first column X, remaining columns Y series) and
//! shows it as a line chart with interactive navigation.
//!
//! ## Architecture
//!
//! - **Data**: [`data::load_csv`] builds an immutable [`DataSeries`]
//! - **View core**: [`view`] holds the navigation state machine. Controllers
//!   consume [`view::InputEvent`]s and emit [`view::RenderCommand`]s
//! - **Frontend**: eframe/egui with egui_plot draws the retained
//!   [`view::SurfaceState`] and feeds pointer input back to the core
//!
//! ## Variants
//!
//! - `scroll` - fixed-spacing ticks, a scroll slider and drag-to-zoom on rows
//! - `box-zoom` - drag a rectangle to zoom on X coordinates
//! - `slider-zoom` - a single symmetric zoom slider
//!
//! ## Example
//!
//! ```no_run
//! use csvplot_rs::config::{ViewerMode, ViewerOptions};
//! use csvplot_rs::data::load_csv;
//! use csvplot_rs::view::{build_controller, InputEvent, SurfaceState};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let data = Arc::new(load_csv(Path::new("data.csv"))?);
//! let mut controller = build_controller(ViewerMode::SliderZoom, data, &ViewerOptions::default());
//! let mut surface = SurfaceState::new();
//! surface.apply_all(controller.initial_commands());
//! surface.apply_all(controller.dispatch(InputEvent::SliderChanged(0.5)));
//! # Ok::<(), csvplot_rs::CsvPlotError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod frontend;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::{CliArgs, CliCommand, DisplaySettings, ViewerMode, ViewerOptions};
pub use error::{CsvPlotError, Result};
pub use frontend::CsvPlotApp;
pub use types::{AxisLimits, AxisRange, DataSeries, Point, Rect, Series};
