//! Session state and the command handlers behind the toolbar buttons.
//!
//! The session owns the loaded dataset. Handlers take an already chosen path,
//! so file dialogs stay in the GUI layer.

use crate::charts::StaticChartRenderer;
use crate::config::AppConfig;
use crate::data::{DataLoader, ParseResult, TableRow};
use crate::error::{Result, ViewerError, ViewerWarning};
use crate::stats::format_stats_report;
use std::path::Path;

/// Result of a handler that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Warning(ViewerWarning),
}

/// Summary of a successful read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOutcome {
    pub rows: usize,
    pub rejected: usize,
    pub warning: Option<ViewerWarning>,
}

pub struct Session {
    config: AppConfig,
    dataset: Option<ParseResult>,
    table: Vec<TableRow>,
    log: String,
    view_epoch: u64,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            dataset: None,
            table: Vec::new(),
            log: String::new(),
            view_epoch: 0,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Currently loaded data, if any rows were read.
    pub fn dataset(&self) -> Option<&ParseResult> {
        self.dataset.as_ref().filter(|d| !d.is_empty())
    }

    pub fn table(&self) -> &[TableRow] {
        &self.table
    }

    pub fn log(&self) -> &str {
        &self.log
    }

    /// Changes whenever the chart view has to be refitted.
    pub fn view_epoch(&self) -> u64 {
        self.view_epoch
    }

    pub fn has_rows(&self) -> bool {
        !self.table.is_empty()
    }

    pub fn has_plot(&self) -> bool {
        self.dataset().is_some()
    }

    /// Read a CSV file, replacing the current data.
    ///
    /// On a file error nothing changes. Otherwise the previous data is
    /// cleared first, even if the new file turns out to be empty.
    pub fn read_data(&mut self, path: &Path) -> Result<ReadOutcome> {
        let result = DataLoader::load_csv(path)?;
        self.clear();

        if result.rejected_line_count > 0 {
            tracing::warn!(
                "Skipped {} malformed line(s) in {:?}",
                result.rejected_line_count,
                path
            );
        }

        let outcome = ReadOutcome {
            rows: result.len(),
            rejected: result.rejected_line_count,
            warning: result.is_empty().then_some(ViewerWarning::EmptyDataset),
        };

        if let (Some(x), Some(y)) = (result.stats_x, result.stats_y) {
            tracing::debug!("{}", format_stats_report(&x, "X"));
            tracing::debug!("{}", format_stats_report(&y, "Y"));
        }
        if let Some(report) = result.stats_report(self.config.report_precision) {
            self.log = report;
        }
        self.table = DataLoader::table_rows(&result.samples, self.config.table_precision);
        self.dataset = Some(result);

        tracing::info!(
            "Read {} row(s) from {:?} ({} rejected)",
            outcome.rows,
            path,
            outcome.rejected
        );
        Ok(outcome)
    }

    /// Write the table rows to `path`.
    pub fn save_data(&mut self, path: &Path) -> Result<Outcome> {
        if !self.has_rows() {
            return Ok(Outcome::Warning(ViewerWarning::NothingToSave));
        }

        DataLoader::save_csv(path, &self.table)?;
        self.append_log(&format!("Data saved to: {}", path.display()));
        tracing::info!("Saved {} row(s) to {:?}", self.table.len(), path);
        Ok(Outcome::Done)
    }

    /// Render the chart to an image at `path`.
    pub fn save_plot(&mut self, path: &Path) -> Result<Outcome> {
        let Some(dataset) = self.dataset() else {
            return Ok(Outcome::Warning(ViewerWarning::NothingToExport));
        };

        StaticChartRenderer::export_image(
            path,
            dataset,
            self.config.plot_convention,
            self.config.export_width,
            self.config.export_height,
        )?;
        self.append_log(&format!("Chart saved to: {}", path.display()));
        tracing::info!("Exported chart to {:?}", path);
        Ok(Outcome::Done)
    }

    /// Drop the data, the table and the log, and reset the chart axes.
    pub fn clear(&mut self) {
        self.dataset = None;
        self.table.clear();
        self.log.clear();
        self.view_epoch += 1;
        tracing::debug!("Session cleared");
    }

    fn append_log(&mut self, line: &str) {
        if !self.log.is_empty() {
            self.log.push('\n');
        }
        self.log.push_str(line);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

/// Unwraps the user-facing part of a handler error for logging.
pub fn describe(err: &ViewerError) -> String {
    format!("{}: {}", err.title(), err.user_message())
}
