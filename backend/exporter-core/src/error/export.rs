use common::{ErrorLocation, ExportFormat};

use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Failures reported by the host's scene-export step.
#[derive(Debug, ThisError)]
pub enum ExportError {
    #[error("Scene Export Error: {format} to {path}: {message} {location}")]
    SceneExport {
        format: ExportFormat,
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Export IO Error: {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl ExportError {
    #[track_caller]
    pub fn scene_export(
        format: ExportFormat,
        path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        ExportError::SceneExport {
            format,
            path: path.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// What went wrong, without the source location, for the log panel.
    pub fn log_line(&self) -> String {
        match self {
            ExportError::SceneExport {
                format,
                path,
                message,
                ..
            } => format!("{format} to {}: {message}", path.display()),
            ExportError::Io { path, source, .. } => format!("{}: {source}", path.display()),
        }
    }
}
