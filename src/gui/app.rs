//! Series Viewer Main Application
//! Main window with control panel, data table and chart.

use crate::config::AppConfig;
use crate::error::{ViewerError, ViewerWarning};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::session::{describe, Outcome, Session};
use egui::SidePanel;

/// Main application window.
pub struct SeriesViewerApp {
    session: Session,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    /// Error waiting to be acknowledged; blocks the rest of the UI
    error: Option<ViewerError>,
}

impl SeriesViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            session: Session::new(config),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            error: None,
        }
    }

    /// Dispatch a button press to its handler.
    fn handle_action(&mut self, action: ControlPanelAction) {
        match action {
            ControlPanelAction::ReadData => self.handle_read_data(),
            ControlPanelAction::SaveData => self.handle_save_data(),
            ControlPanelAction::SavePlot => self.handle_save_plot(),
            ControlPanelAction::Clear => {
                self.session.clear();
                self.control_panel.set_status("Cleared");
            }
            ControlPanelAction::None => {}
        }
    }

    fn handle_read_data(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Open data file")
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return;
        };

        match self.session.read_data(&path) {
            Ok(outcome) => match outcome.warning {
                Some(warning) => self.control_panel.set_warning(warning),
                None if outcome.rejected > 0 => self.control_panel.set_success(format!(
                    "Loaded {} rows ({} lines skipped)",
                    outcome.rows, outcome.rejected
                )),
                None => self
                    .control_panel
                    .set_success(format!("Loaded {} rows", outcome.rows)),
            },
            Err(e) => self.report_error(e),
        }
    }

    fn handle_save_data(&mut self) {
        // Warn before asking for a file name
        if !self.session.has_rows() {
            self.control_panel.set_warning(ViewerWarning::NothingToSave);
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .set_title("Save data file")
            .add_filter("CSV Files", &["csv"])
            .set_file_name("data.csv")
            .save_file()
        else {
            return;
        };

        match self.session.save_data(&path) {
            Ok(outcome) => self.report_outcome(outcome, "Data saved"),
            Err(e) => self.report_error(e),
        }
    }

    fn handle_save_plot(&mut self) {
        if !self.session.has_plot() {
            self.control_panel.set_warning(ViewerWarning::NothingToExport);
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .set_title("Save chart")
            .add_filter("PNG Image", &["png"])
            .add_filter("JPEG Image", &["jpg", "jpeg"])
            .add_filter("BMP Image", &["bmp"])
            .set_file_name("chart.png")
            .save_file()
        else {
            return;
        };

        match self.session.save_plot(&path) {
            Ok(outcome) => self.report_outcome(outcome, "Chart saved"),
            Err(e) => self.report_error(e),
        }
    }

    fn report_outcome(&mut self, outcome: Outcome, done: &str) {
        match outcome {
            Outcome::Done => self.control_panel.set_success(done),
            Outcome::Warning(warning) => self.control_panel.set_warning(warning),
        }
    }

    fn report_error(&mut self, error: ViewerError) {
        tracing::error!("{}", describe(&error));
        self.control_panel.set_status("Ready");
        self.error = Some(error);
    }

    fn show_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(error) = &self.error else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(error.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(error.user_message());
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.error = None;
        }
    }
}

impl eframe::App for SeriesViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let idle = self.error.is_none();

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(240.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(idle, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        let action = self.control_panel.show(ui, self.session.log());
                        self.handle_action(action);
                    });
                });
            });

        // Central panel - table and chart
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(idle, |ui| {
                self.chart_viewer.show(ui, &self.session);
            });
        });

        self.show_error_dialog(ctx);
    }
}
