//! Export the scene to a temp file and upload it with its textures.
//!
//! ```text
//! Idle -> FileWritten -> Uploading -> Uploaded
//!                                 \-> Failed (file kept)
//! ```

pub mod report;
pub mod textures;

use crate::config::ExporterConfig;
use crate::context::{ExportSettings, ExporterContext};
use crate::dispatch::{authorized_headers, record, record_failure, target_url};
use crate::error::export::ExportError;
use crate::executor::{Attachment, RequestExecutor, RequestPayload};
use crate::messages::{
    BODY_PREFIX, CLEANUP_FAILED_PREFIX, DONE_MESSAGE, EXPORT_FAILED_PREFIX, EXPORTING_PREFIX,
    FILENAME_EMPTY_MESSAGE, MATERIAL_MISSING_PREFIX, STATUS_PREFIX, TMP_FILE_SAVED_PREFIX,
};
use crate::response::{HttpResponse, ResponseResult};

use common::{ActivityLog, ExportFormat, HttpMethod, HttpStatusCode};

use report::upload_report;
use textures::{collect_textures, texture_attachments};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};

/// Host side of the export: writes the scene to disk.
pub trait SceneExporter {
    /// Write the current scene to `path` in `format`.
    ///
    /// For OBJ the host also writes the `.mtl` next to `path`.
    fn export_scene(&self, format: ExportFormat, path: &Path) -> Result<(), ExportError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportState {
    /// Nothing written; the export was refused before any file I/O.
    Idle,
    /// Transition marker: the host wrote the model. Only seen in debug logs,
    /// `export_to_api` never returns it.
    FileWritten { model_path: PathBuf },
    /// Transition marker: the upload is in flight. Never returned.
    Uploading { model_path: PathBuf },
    /// Server answered and the temp file was removed.
    Uploaded { status: HttpStatusCode },
    /// `model_path` is the temp file left for inspection, if one exists.
    Failed { model_path: Option<PathBuf> },
}

impl ExportState {
    pub fn is_uploaded(&self) -> bool {
        matches!(self, ExportState::Uploaded { .. })
    }
}

/// Export the scene with `exporter` and POST it to the configured endpoint.
///
/// The outcome of the upload is stored in `context.response`. Paths that
/// never reach the server clear it, so a stale answer is not shown.
pub fn export_to_api(
    executor: &RequestExecutor,
    exporter: &dyn SceneExporter,
    context: &mut ExporterContext,
    config: &ExporterConfig,
) -> ExportState {
    let settings = context.export.clone();

    if settings.filename.trim().is_empty() {
        context.response = None;
        record(&mut context.log, FILENAME_EMPTY_MESSAGE);
        return ExportState::Idle;
    }

    let url = match target_url(&context.server, &context.request.endpoint) {
        Ok(url) => url,
        Err(e) => {
            record_failure(&mut context.log, &e);
            context.response = Some(ResponseResult::Failed(e));
            return ExportState::Idle;
        }
    };

    let model_path = settings.model_path();

    if let Err(e) = exporter.export_scene(settings.format, &model_path) {
        error!("Scene export failed: {e}");
        context.response = None;
        record(
            &mut context.log,
            format!("{EXPORT_FAILED_PREFIX}{}", e.log_line()),
        );
        let retained = model_path.exists().then_some(model_path);
        return ExportState::Failed {
            model_path: retained,
        };
    }

    let mut state = advance(
        ExportState::Idle,
        ExportState::FileWritten {
            model_path: model_path.clone(),
        },
    );

    record(
        &mut context.log,
        format!("{TMP_FILE_SAVED_PREFIX}{}", settings.project_dir.display()),
    );
    record(
        &mut context.log,
        format!("{EXPORTING_PREFIX}{}", settings.filename),
    );

    let payload = upload_payload(&settings, &model_path, config, &mut context.log);
    let headers = authorized_headers(&BTreeMap::new(), &context.credentials);

    state = advance(
        state,
        ExportState::Uploading {
            model_path: model_path.clone(),
        },
    );

    // attachment handles are closed once execute returns
    let result = executor.execute(HttpMethod::Post, &url, &headers, payload);

    let finished = match &result {
        ResponseResult::Successful(response) => {
            record_upload(&mut context.log, response);
            remove_temp_files(&settings, &mut context.log);
            record(&mut context.log, DONE_MESSAGE);
            ExportState::Uploaded {
                status: response.status,
            }
        }
        ResponseResult::Failed(e) => {
            record_failure(&mut context.log, e);
            ExportState::Failed {
                model_path: Some(model_path),
            }
        }
    };

    context.response = Some(result);
    advance(state, finished)
}

fn advance(from: ExportState, to: ExportState) -> ExportState {
    debug!("Export state {from:?} -> {to:?}");
    to
}

/// `name` text field, `model`, optional `assets` material, `textures[i]`.
fn upload_payload(
    settings: &ExportSettings,
    model_path: &Path,
    config: &ExporterConfig,
    log: &mut ActivityLog,
) -> RequestPayload {
    let mut files = vec![Attachment::new("model", model_path)];

    if let Some(material_path) = settings.material_path() {
        if material_path.is_file() {
            files.push(Attachment::new("assets", material_path));
        } else {
            record(
                log,
                format!("{MATERIAL_MISSING_PREFIX}{}", material_path.display()),
            );
        }
    }

    let textures = collect_textures(&settings.project_dir.join(&config.textures_dir), config);
    files.extend(texture_attachments(&textures));

    RequestPayload::Multipart {
        fields: vec![("name".to_string(), settings.filename.clone())],
        files,
    }
}

fn record_upload(log: &mut ActivityLog, response: &HttpResponse) {
    record(log, format!("{STATUS_PREFIX}{}", response.status.bracketed()));

    match response.json().as_ref().and_then(upload_report) {
        Some(lines) => {
            for line in lines {
                record(log, line);
            }
        }
        None => record(log, format!("{BODY_PREFIX}{}", response.body_text())),
    }
}

fn remove_temp_files(settings: &ExportSettings, log: &mut ActivityLog) {
    let candidates = std::iter::once(settings.model_path()).chain(settings.material_path());

    for path in candidates.filter(|path| path.exists()) {
        match fs::remove_file(&path) {
            Ok(()) => debug!("Removed tmp file {}", path.display()),
            Err(e) => record(
                log,
                format!("{CLEANUP_FAILED_PREFIX}{} ({e})", path.display()),
            ),
        }
    }
}
