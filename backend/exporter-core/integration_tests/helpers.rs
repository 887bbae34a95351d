//! Test helpers for exporter integration tests.
//!
//! The executor is blocking, so every call into it runs on tokio's blocking
//! pool while wiremock serves from the async side.

use exporter_core::error::ExportError;
use exporter_core::{ExporterContext, RequestExecutor, SceneExporter};

use common::{Credentials, ExportFormat, ServerConfig};

use std::cell::Cell;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;
use std::time::Duration;

pub const TEST_TOKEN: &str = "test-token-12345";
pub const MODEL_BYTES: &[u8] = b"# fake model\nv 0 0 0\n";
pub const MATERIAL_BYTES: &[u8] = b"newmtl wall\n";

/// Run blocking executor code off the async runtime.
pub async fn blocking<F, T>(work: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .expect("Blocking task panicked")
}

pub fn executor(timeout: Duration) -> RequestExecutor {
    RequestExecutor::new(timeout).expect("Failed to build executor")
}

/// Context pointed at `host` with a token set.
pub fn context_for(host: &str) -> ExporterContext {
    ExporterContext::new(
        ServerConfig::new(host, ""),
        Credentials::new("artist", "artist@example.com", TEST_TOKEN),
    )
}

/// A local url with nothing listening behind it.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// A server that answers every connection with bytes that are not HTTP.
pub fn garbage_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    thread::spawn(move || {
        for stream in listener.incoming().take(4) {
            let Ok(mut stream) = stream else { continue };
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(b"this is not http at all\r\n\r\n");
        }
    });
    format!("http://127.0.0.1:{port}")
}

/// Writes the model (and the OBJ material) like the host's export operators.
#[derive(Default)]
pub struct FakeExporter {
    pub calls: Cell<usize>,
}

impl SceneExporter for FakeExporter {
    fn export_scene(&self, format: ExportFormat, path: &Path) -> Result<(), ExportError> {
        self.calls.set(self.calls.get() + 1);
        fs::write(path, MODEL_BYTES).map_err(|e| ExportError::io(path, e))?;
        if let Some(extension) = format.material_extension() {
            let material = path.with_extension(extension);
            fs::write(&material, MATERIAL_BYTES).map_err(|e| ExportError::io(&material, e))?;
        }
        Ok(())
    }
}

/// Host export operator that refuses to write anything.
pub struct FailingExporter;

impl SceneExporter for FailingExporter {
    fn export_scene(&self, format: ExportFormat, path: &Path) -> Result<(), ExportError> {
        Err(ExportError::scene_export(
            format,
            path,
            "no objects in scene",
        ))
    }
}
