//! Per-scene state lent to the core by the host add-on.

use crate::response::ResponseResult;

use common::{ActivityLog, Credentials, ExportFormat, RequestSpec, ServerConfig};

use std::path::PathBuf;

/// Export panel fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSettings {
    /// Model file name without extension.
    pub filename: String,
    pub format: ExportFormat,
    /// Directory of the saved project; temp files and `textures/` live here.
    pub project_dir: PathBuf,
}

impl ExportSettings {
    pub fn new(
        filename: impl Into<String>,
        format: ExportFormat,
        project_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filename: filename.into(),
            format,
            project_dir: project_dir.into(),
        }
    }

    /// Where the host writes the model before upload.
    pub fn model_path(&self) -> PathBuf {
        self.project_dir
            .join(format!("{}.{}", self.filename, self.format.extension()))
    }

    /// Sibling material file, for formats that write one.
    pub fn material_path(&self) -> Option<PathBuf> {
        self.format
            .material_extension()
            .map(|extension| self.project_dir.join(format!("{}.{extension}", self.filename)))
    }
}

/// Everything the host keeps per scene.
///
/// The core holds no state between calls; each operation borrows this for
/// its duration and writes results back into it.
#[derive(Debug, Default)]
pub struct ExporterContext {
    pub server: ServerConfig,
    pub credentials: Credentials,
    pub request: RequestSpec,
    /// Outcome of the last request, if any was attempted.
    pub response: Option<ResponseResult>,
    pub export: ExportSettings,
    pub log: ActivityLog,
}

impl ExporterContext {
    pub fn new(server: ServerConfig, credentials: Credentials) -> Self {
        Self {
            server,
            credentials,
            ..Self::default()
        }
    }
}
