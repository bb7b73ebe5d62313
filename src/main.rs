//! csvplot-rs - interactive CSV chart viewer
//!
//! Loads a CSV file whose first column is X and whose remaining columns are
//! numeric series, and opens an interactive chart window.

use csvplot_rs::{
    config::{CliArgs, CliCommand, USAGE},
    data::load_csv,
    CsvPlotApp, CsvPlotError, DisplaySettings, Result,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,csvplot_rs=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = match CliArgs::parse_from(std::env::args().skip(1)) {
        Ok(CliCommand::Run(args)) => args,
        Ok(CliCommand::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(e.exit_code());
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: CliArgs) -> Result<()> {
    let settings = DisplaySettings::load_or_default(args.config_path.as_deref())?;
    let data = Arc::new(load_csv(&args.csv_file)?);

    let file_name = args
        .csv_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.csv_file.display().to_string());
    let title = format!("Data from {file_name}");
    let options = args.viewer_options();
    let mode = args.mode;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size([480.0, 320.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    tracing::info!("Opening chart window for {}", args.csv_file.display());

    eframe::run_native(
        "csvplot-rs",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(CsvPlotApp::new(
                cc, data, mode, &options, settings, title,
            )))
        }),
    )
    .map_err(|e| CsvPlotError::Ui(e.to_string()))
}
