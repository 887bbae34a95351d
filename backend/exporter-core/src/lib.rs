pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod export;
pub mod logger;
pub mod messages;
pub mod response;

#[cfg(test)]
mod tests;

pub use config::ExporterConfig;
pub use context::{ExportSettings, ExporterContext};
pub use dispatch::{check_connection, do_request};
pub use error::request::{RequestError, RequestErrorKind};
pub use executor::{Attachment, RequestExecutor, RequestPayload};
pub use export::{ExportState, SceneExporter, export_to_api};
pub use response::{HttpResponse, ResponseResult};

use std::time::Duration;

pub const EXPORTER_NAME: &str = "api-exporter";
pub const EXPORTER_USER_AGENT: &str =
    const_format::concatcp!(EXPORTER_NAME, "/", env!("CARGO_PKG_VERSION"));

/// Upper bound on a single request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(100);
