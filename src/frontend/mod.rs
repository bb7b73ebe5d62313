//! egui frontend
//!
//! [`CsvPlotApp`] owns the loaded data, the controller for the selected mode and
//! the retained [`SurfaceState`]. Each frame it draws the surface, collects the
//! input events produced by the chart and the slider, and feeds them to the
//! controller in order. The commands that come back are applied to the surface
//! before the next frame is drawn.

mod plot;
mod widgets;

pub use plot::{series_color, ChartView};
pub use widgets::{slider_bar, ControlSlider, ModeHint};

use crate::config::{DisplaySettings, ViewerMode, ViewerOptions};
use crate::types::DataSeries;
use crate::view::{build_controller, InputController, InputEvent, SurfaceState};
use std::sync::Arc;

/// Main application
pub struct CsvPlotApp {
    data: Arc<DataSeries>,
    mode: ViewerMode,
    controller: Box<dyn InputController>,
    surface: SurfaceState,
    chart: ChartView,
    settings: DisplaySettings,
    title: String,
}

impl CsvPlotApp {
    /// Create the app inside eframe's creation hook
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        data: Arc<DataSeries>,
        mode: ViewerMode,
        options: &ViewerOptions,
        settings: DisplaySettings,
        title: impl Into<String>,
    ) -> Self {
        if settings.dark_mode {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }
        Self::with_data(data, mode, options, settings, title)
    }

    /// Build the app state without a window
    pub fn with_data(
        data: Arc<DataSeries>,
        mode: ViewerMode,
        options: &ViewerOptions,
        settings: DisplaySettings,
        title: impl Into<String>,
    ) -> Self {
        let mut controller = build_controller(mode, data.clone(), options);
        let mut surface = SurfaceState::new();
        surface.apply_all(controller.initial_commands());

        tracing::info!(
            "Showing {} rows of {} series in {} mode",
            data.len(),
            data.series().len(),
            mode
        );

        Self {
            data,
            mode,
            controller,
            surface,
            chart: ChartView::new(),
            settings,
            title: title.into(),
        }
    }

    pub fn surface(&self) -> &SurfaceState {
        &self.surface
    }

    pub fn mode(&self) -> ViewerMode {
        self.mode
    }

    /// Feed events to the controller and apply the resulting commands
    pub fn handle_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            let commands = self.controller.dispatch(event);
            if !commands.is_empty() {
                tracing::trace!("{:?} -> {} commands", event, commands.len());
            }
            self.surface.apply_all(commands);
        }
    }
}

impl eframe::App for CsvPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        if let Some(slider) = self.surface.slider.clone() {
            egui::TopBottomPanel::bottom("slider_panel").show(ctx, |ui| {
                ui.add_space(4.0);
                if let Some(value) = slider_bar(ui, &slider) {
                    events.push(InputEvent::SliderChanged(value));
                }
                ui.add_space(4.0);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.title.as_str());
                ui.separator();
                ui.add(ModeHint::new(self.mode));
            });
            events.extend(
                self.chart
                    .show(ui, &self.surface, &self.data, &self.settings),
            );
        });

        self.handle_events(events);
    }
}
