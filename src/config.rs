//! Application configuration loaded from a JSON file.

use crate::charts::PlotConvention;
use crate::data::DEFAULT_TABLE_PRECISION;
use crate::error::{Result, ViewerError};
use crate::stats::DEFAULT_REPORT_PRECISION;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "SERIES_VIEWER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "series_viewer.json";

const MAX_PRECISION: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub plot_convention: PlotConvention,
    pub table_precision: usize,
    pub report_precision: usize,
    pub export_width: u32,
    pub export_height: u32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plot_convention: PlotConvention::default(),
            table_precision: DEFAULT_TABLE_PRECISION,
            report_precision: DEFAULT_REPORT_PRECISION,
            export_width: 800,
            export_height: 600,
            window_width: 800.0,
            window_height: 600.0,
        }
    }
}

impl AppConfig {
    /// Where the config is read from: `$SERIES_VIEWER_CONFIG` or the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ViewerError::file_access(path, e))?;
        Self::from_json(&contents)
    }

    /// Like [`AppConfig::load`], but any problem falls back to defaults.
    /// A missing file is expected and not logged as a warning.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(ViewerError::FileAccess { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!("No config at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring config {:?}: {e}", path);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.table_precision > MAX_PRECISION || self.report_precision > MAX_PRECISION {
            return Err(ViewerError::Config(format!(
                "precision must be at most {}",
                MAX_PRECISION
            )));
        }
        if self.export_width == 0 || self.export_height == 0 {
            return Err(ViewerError::Config(
                "export size must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
