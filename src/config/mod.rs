//! Configuration for csvplot-rs
//!
//! This module handles:
//! - The command line surface ([`CliArgs`])
//! - Interaction constants shared by the view core
//! - Display preferences loaded from TOML ([`DisplaySettings`])
//!
//! # Command Line
//!
//! ```text
//! csvplot-rs <csv_file> [--x-spacing N] [--y-spacing N] [--mode MODE] [--config PATH]
//! ```
//!
//! `MODE` is one of `scroll` (default), `box-zoom` or `slider-zoom`.

pub mod settings;

pub use settings::*;

use crate::error::{CsvPlotError, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Application identifier for the preferences directory
pub const APP_ID: &str = "csvplot-rs";

/// Preferences filename inside the config directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// Default number of rows between labelled X ticks
pub const DEFAULT_X_SPACING: usize = 10;

/// Rows shown when the scroll variant opens
pub const INITIAL_WINDOW_POINTS: usize = 50;

/// Smallest zoom factor of the slider variant
pub const ZOOM_MIN: f64 = 0.1;

/// Largest zoom factor (full view)
pub const ZOOM_MAX: f64 = 1.0;

/// Slider step of the zoom control
pub const ZOOM_STEP: f64 = 0.05;

/// Axis padding as a fraction of the data range
pub const AXIS_PADDING_FRACTION: f64 = 0.05;

/// Box-zoom drags narrower than this fraction of the X range are clicks
pub const MIN_DRAG_FRACTION: f64 = 0.01;

/// Default hover hit radius in screen pixels
pub const DEFAULT_HIT_RADIUS_PX: f32 = 5.0;

pub const USAGE: &str = "Usage: csvplot-rs <csv_file> [--x-spacing N] [--y-spacing N] \
[--mode scroll|box-zoom|slider-zoom] [--config PATH]";

/// Interaction variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerMode {
    /// Scrolling index window with drag-to-zoom and fixed ticks
    #[default]
    Scroll,
    /// Free rectangular zoom on X coordinates
    BoxZoom,
    /// Symmetric zoom driven by a slider
    SliderZoom,
}

impl ViewerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewerMode::Scroll => "scroll",
            ViewerMode::BoxZoom => "box-zoom",
            ViewerMode::SliderZoom => "slider-zoom",
        }
    }

    /// Interaction hint shown above the chart
    pub fn hint(&self) -> &'static str {
        match self {
            ViewerMode::Scroll => "Drag to zoom, right-click to reset view, hover for values",
            ViewerMode::BoxZoom => "Drag to zoom, right-click to reset view, hover for values",
            ViewerMode::SliderZoom => "Use the slider to zoom",
        }
    }
}

impl fmt::Display for ViewerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewerMode {
    type Err = CsvPlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "scroll" => Ok(ViewerMode::Scroll),
            "box-zoom" => Ok(ViewerMode::BoxZoom),
            "slider-zoom" => Ok(ViewerMode::SliderZoom),
            other => Err(CsvPlotError::Usage(format!("unknown mode '{}'", other))),
        }
    }
}

/// Options the view core needs from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerOptions {
    pub x_spacing: usize,
    pub y_spacing: Option<usize>,
    pub initial_window: usize,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            x_spacing: DEFAULT_X_SPACING,
            y_spacing: None,
            initial_window: INITIAL_WINDOW_POINTS,
        }
    }
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub csv_file: PathBuf,
    pub x_spacing: usize,
    pub y_spacing: Option<usize>,
    pub mode: ViewerMode,
    pub config_path: Option<PathBuf>,
}

/// What the process should do
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Run(CliArgs),
    Help,
}

impl CliArgs {
    /// Parse arguments, excluding the program name
    pub fn parse_from<I, S>(args: I) -> Result<CliCommand>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut csv_file = None::<PathBuf>;
        let mut x_spacing = DEFAULT_X_SPACING;
        let mut y_spacing = None;
        let mut mode = ViewerMode::default();
        let mut config_path = None;

        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            if arg == "-h" || arg == "--help" {
                return Ok(CliCommand::Help);
            }

            if let Some(flag) = arg.strip_prefix("--") {
                let (name, inline) = match flag.split_once('=') {
                    Some((name, value)) => (name.to_string(), Some(value.to_string())),
                    None => (flag.to_string(), None),
                };
                let value = match inline {
                    Some(value) => value,
                    None => args
                        .next()
                        .ok_or_else(|| CsvPlotError::Usage(format!("--{} requires a value", name)))?,
                };

                match name.as_str() {
                    "x-spacing" => x_spacing = parse_spacing(&name, &value)?,
                    "y-spacing" => y_spacing = Some(parse_spacing(&name, &value)?),
                    "mode" => mode = value.parse()?,
                    "config" => config_path = Some(PathBuf::from(value)),
                    _ => {
                        return Err(CsvPlotError::Usage(format!("unknown option '--{}'", name)));
                    }
                }
            } else if csv_file.is_none() {
                csv_file = Some(PathBuf::from(arg));
            } else {
                return Err(CsvPlotError::Usage(format!("unexpected argument '{}'", arg)));
            }
        }

        let csv_file =
            csv_file.ok_or_else(|| CsvPlotError::Usage("missing <csv_file>".to_string()))?;

        Ok(CliCommand::Run(CliArgs {
            csv_file,
            x_spacing,
            y_spacing,
            mode,
            config_path,
        }))
    }

    pub fn viewer_options(&self) -> ViewerOptions {
        ViewerOptions {
            x_spacing: self.x_spacing,
            y_spacing: self.y_spacing,
            ..Default::default()
        }
    }
}

fn parse_spacing(name: &str, value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(spacing) if spacing >= 1 => Ok(spacing),
        _ => Err(CsvPlotError::Usage(format!(
            "--{} expects a positive integer, got '{}'",
            name, value
        ))),
    }
}
