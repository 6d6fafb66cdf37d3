//! Error and warning types.
//!
//! Errors abort the current action and are shown in a blocking dialog.
//! Warnings leave the application idle and are shown in the status line.
//! Malformed CSV lines are neither: the parser skips and counts them.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the viewer's actions.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// The file could not be opened, read or written
    #[error("Failed to access file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image export to an extension we cannot encode
    #[error("Unsupported image format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Off-screen chart drawing failed
    #[error("Chart rendering failed: {0}")]
    Render(String),

    /// Encoding or writing the rendered image failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration values out of range
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

impl ViewerError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ViewerError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Message shown in the body of the error dialog
    pub fn user_message(&self) -> String {
        match self {
            ViewerError::FileAccess { path, source } => {
                format!("Cannot open file {}: {}", path.display(), source)
            }
            ViewerError::UnsupportedFormat { extension } if extension.is_empty() => {
                "The file name has no image extension (use .png, .jpg or .bmp)".to_string()
            }
            ViewerError::UnsupportedFormat { extension } => {
                format!("Unsupported image format: '.{}'", extension)
            }
            ViewerError::Render(msg) => format!("Could not draw the chart: {}", msg),
            ViewerError::Image(e) => format!("Could not save the image: {}", e),
            ViewerError::Config(msg) => format!("Config error: {}", msg),
            ViewerError::Json(e) => format!("JSON error: {}", e),
        }
    }

    /// Short title for the dialog window
    pub fn title(&self) -> &'static str {
        match self {
            ViewerError::FileAccess { .. } => "File Error",
            ViewerError::UnsupportedFormat { .. } => "Unsupported Format",
            ViewerError::Render(_) => "Render Error",
            ViewerError::Image(_) => "Image Error",
            ViewerError::Config(_) | ViewerError::Json(_) => "Configuration Error",
        }
    }
}

/// Non-blocking conditions reported back to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerWarning {
    #[error("The file contains no valid data")]
    EmptyDataset,
    #[error("There is no data to save")]
    NothingToSave,
    #[error("There is no chart to save")]
    NothingToExport,
}
