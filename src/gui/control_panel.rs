//! Control Panel Widget
//! Left side panel with the action buttons, the statistics log and the status line.

use crate::error::ViewerWarning;
use egui::{Color32, RichText};

const WARNING_COLOR: Color32 = Color32::from_rgb(243, 156, 18);
const OK_COLOR: Color32 = Color32::from_rgb(40, 167, 69);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Success,
    Warning,
}

pub struct ControlPanel {
    status: String,
    status_kind: StatusKind,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
            status_kind: StatusKind::Info,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_kind = StatusKind::Info;
    }

    pub fn set_success(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_kind = StatusKind::Success;
    }

    pub fn set_warning(&mut self, warning: ViewerWarning) {
        self.status = warning.to_string();
        self.status_kind = StatusKind::Warning;
    }

    /// Draw the panel. `log` is shown read-only.
    pub fn show(&mut self, ui: &mut egui::Ui, log: &str) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("Data Visualization")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Actions =====
        ui.vertical_centered(|ui| {
            let size = egui::vec2(200.0, 32.0);
            if ui
                .add(egui::Button::new("📂 Read data from file").min_size(size))
                .clicked()
            {
                action = ControlPanelAction::ReadData;
            }
            ui.add_space(4.0);
            if ui
                .add(egui::Button::new("💾 Save data to file").min_size(size))
                .clicked()
            {
                action = ControlPanelAction::SaveData;
            }
            ui.add_space(4.0);
            if ui
                .add(egui::Button::new("🖼 Save chart to image").min_size(size))
                .clicked()
            {
                action = ControlPanelAction::SavePlot;
            }
            ui.add_space(4.0);
            if ui
                .add(egui::Button::new("🗑 Clear").min_size(size))
                .clicked()
            {
                action = ControlPanelAction::Clear;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Statistics =====
        ui.label(RichText::new("📊 Statistics").size(14.0).strong());
        ui.add_space(5.0);

        let mut text = log;
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .font(egui::TextStyle::Monospace)
                        .desired_rows(5)
                        .desired_width(f32::INFINITY),
                );
            });

        ui.add_space(10.0);

        let color = match self.status_kind {
            StatusKind::Info => Color32::GRAY,
            StatusKind::Success => OK_COLOR,
            StatusKind::Warning => WARNING_COLOR,
        };
        ui.label(RichText::new(&self.status).size(11.0).color(color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    ReadData,
    SaveData,
    SavePlot,
    Clear,
}
