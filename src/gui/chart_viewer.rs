//! Chart Viewer Widget
//! Central area: the data table next to the line chart.

use crate::charts::{ChartPlotter, PlotConvention};
use crate::data::TableRow;
use crate::session::Session;
use egui::{RichText, ScrollArea};

const TABLE_WIDTH: f32 = 300.0;

pub struct ChartViewer {
    /// Session view epoch the chart was last fitted to
    seen_epoch: u64,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self { seen_epoch: 0 }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, session: &Session) {
        let reset = session.view_epoch() != self.seen_epoch;
        self.seen_epoch = session.view_epoch();
        let convention: PlotConvention = session.config().plot_convention;

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(TABLE_WIDTH);
                Self::draw_table(ui, session.table());
            });

            ui.separator();

            ui.vertical(|ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(crate::charts::CHART_TITLE).size(16.0).strong());
                });
                ChartPlotter::draw_line_chart(ui, session.dataset(), convention, reset);
            });
        });
    }

    /// Two-column grid with virtual scrolling.
    fn draw_table(ui: &mut egui::Ui, rows: &[TableRow]) {
        egui::Grid::new("data_table_header")
            .num_columns(3)
            .min_col_width(40.0)
            .show(ui, |ui| {
                ui.label(RichText::new("#").strong());
                ui.add_sized([110.0, 18.0], egui::Label::new(RichText::new("X").strong()));
                ui.add_sized([110.0, 18.0], egui::Label::new(RichText::new("Y").strong()));
                ui.end_row();
            });
        ui.separator();

        if rows.is_empty() {
            ui.label(RichText::new("No Data").color(egui::Color32::GRAY));
            return;
        }

        let row_height = ui.text_style_height(&egui::TextStyle::Body) + ui.spacing().item_spacing.y;
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, row_height, rows.len(), |ui, row_range| {
                egui::Grid::new("data_table_rows")
                    .num_columns(3)
                    .min_col_width(40.0)
                    .striped(true)
                    .start_row(row_range.start)
                    .show(ui, |ui| {
                        for i in row_range {
                            let [x, y] = &rows[i];
                            ui.label((i + 1).to_string());
                            ui.add_sized([110.0, 16.0], egui::Label::new(x.as_str()));
                            ui.add_sized([110.0, 16.0], egui::Label::new(y.as_str()));
                            ui.end_row();
                        }
                    });
            });
    }
}
