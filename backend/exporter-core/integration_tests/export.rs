use crate::helpers::{
    FailingExporter, FakeExporter, MATERIAL_BYTES, TEST_TOKEN, blocking, context_for, executor,
    refused_url,
};

use exporter_core::messages::{DONE_MESSAGE, FILENAME_EMPTY_MESSAGE, INVALID_HOST_MESSAGE};
use exporter_core::{
    ExportSettings, ExportState, ExporterConfig, HttpResponse, RequestErrorKind, ResponseResult,
    export_to_api,
};

use common::{ExportFormat, HttpStatusCode};

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// What an earlier, successful panel request leaves behind.
fn previous_response() -> ResponseResult {
    ResponseResult::Successful(HttpResponse {
        status: HttpStatusCode(200),
        headers: BTreeMap::new(),
        body: b"previous".to_vec(),
    })
}

fn upload_response() -> serde_json::Value {
    json!({
        "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        "model": {
            "id": "507f1f77bcf86cd799439011",
            "filename": "tower.obj",
            "uploadDate": "2019-10-13T15:31:48.507Z",
            "href": "/models/507f1f77bcf86cd799439011"
        },
        "textures": [{
            "id": "507f191e810c19729de860ea",
            "filename": "wall.jpg",
            "uploadDate": "2019-10-13T15:49:46.583Z",
            "href": "/textures/507f191e810c19729de860ea"
        }],
        "status": "preparing"
    })
}

/// **VALUE**: An empty filename aborts with exactly one log line and touches no files.
///
/// **BUG THIS CATCHES**: Would catch the export operator running (and leaving `.obj`
/// junk in the project folder) before the filename check.
#[tokio::test]
async fn given_empty_filename_when_exported_then_idle_with_single_line() {
    let dir = tempfile::tempdir().unwrap();
    let project_dir = dir.path().to_path_buf();

    let (state, context, calls) = blocking(move || {
        let exporter = FakeExporter::default();
        let mut context = context_for("http://127.0.0.1:9");
        context.response = Some(previous_response());
        context.export = ExportSettings::new("", ExportFormat::Obj, &project_dir);
        let state = export_to_api(
            &executor(Duration::from_secs(5)),
            &exporter,
            &mut context,
            &ExporterConfig::default(),
        );
        (state, context, exporter.calls.get())
    })
    .await;

    assert_eq!(state, ExportState::Idle);
    assert_eq!(context.log.chronological(), vec![FILENAME_EMPTY_MESSAGE]);
    assert_eq!(calls, 0, "Exporter must not run");
    assert!(context.response.is_none(), "Stale response must be cleared");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn given_host_without_scheme_when_exported_then_idle_before_file_io() {
    let dir = tempfile::tempdir().unwrap();
    let project_dir = dir.path().to_path_buf();

    let (state, context) = blocking(move || {
        let mut context = context_for("localhost:8080");
        context.export = ExportSettings::new("tower", ExportFormat::Fbx, &project_dir);
        let state = export_to_api(
            &executor(Duration::from_secs(5)),
            &FakeExporter::default(),
            &mut context,
            &ExporterConfig::default(),
        );
        (state, context)
    })
    .await;

    assert_eq!(state, ExportState::Idle);
    assert_eq!(context.log.chronological(), vec![INVALID_HOST_MESSAGE]);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// **VALUE**: The full happy path: OBJ + material + textures uploaded as one multipart
/// POST with the bearer token, breakdown logged, temp files removed.
///
/// **WHY THIS MATTERS**: This is the add-on's main button. Field names (`model`,
/// `assets`, `textures[i]`) are the server contract.
#[tokio::test]
async fn given_obj_with_textures_when_exported_then_uploaded_and_cleaned() {
    // GIVEN: A project with two textures and a server accepting the upload
    let dir = tempfile::tempdir().unwrap();
    let textures = dir.path().join("textures");
    fs::create_dir_all(&textures).unwrap();
    fs::write(textures.join("wall.jpg"), b"jpg-bytes").unwrap();
    fs::write(textures.join("roof.png"), b"png-bytes").unwrap();
    fs::write(textures.join("readme.md"), b"skip me").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3dobjects"))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(201).set_body_json(upload_response()))
        .expect(1)
        .mount(&server)
        .await;
    let uri = server.uri();
    let project_dir = dir.path().to_path_buf();

    // WHEN: Exporting
    let (state, context) = blocking(move || {
        let mut context = context_for(&uri);
        context.request.endpoint = "/3dobjects".to_string();
        context.export = ExportSettings::new("tower", ExportFormat::Obj, &project_dir);
        let state = export_to_api(
            &executor(Duration::from_secs(5)),
            &FakeExporter::default(),
            &mut context,
            &ExporterConfig::default(),
        );
        (state, context)
    })
    .await;

    // THEN: Uploaded, temp files gone, textures untouched
    assert!(state.is_uploaded());
    assert_eq!(
        state,
        ExportState::Uploaded {
            status: HttpStatusCode(201)
        }
    );
    assert!(!dir.path().join("tower.obj").exists());
    assert!(!dir.path().join("tower.mtl").exists());
    assert!(textures.join("wall.jpg").exists());

    // AND: The log walks through the upload
    let lines = context.log.chronological();
    assert!(lines[0].starts_with("Tmp file saved to: "));
    assert_eq!(lines[1], "Exporting...tower");
    assert_eq!(lines[2], "Status: [201]");
    assert_eq!(lines[3], "< ---- Model ---- >");
    assert_eq!(lines[4], "ID: 507f1f77bcf86cd799439011");
    assert!(lines.contains(&"Filename: wall.jpg"));
    assert_eq!(*lines.last().unwrap(), DONE_MESSAGE);

    // AND: The multipart body carries every part
    let received = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body).into_owned();
    assert!(body.contains("name=\"name\""));
    assert!(body.contains("name=\"model\"; filename=\"tower.obj\""));
    assert!(body.contains("name=\"assets\"; filename=\"tower.mtl\""));
    assert!(body.contains(std::str::from_utf8(MATERIAL_BYTES).unwrap()));
    assert!(body.contains("name=\"textures[0]\"; filename=\"roof.png\""));
    assert!(body.contains("name=\"textures[1]\"; filename=\"wall.jpg\""));
    assert!(!body.contains("readme.md"));
}

#[tokio::test]
async fn given_no_textures_directory_when_exported_then_model_only_upload() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("stored"))
        .expect(1)
        .mount(&server)
        .await;
    let uri = server.uri();
    let project_dir = dir.path().to_path_buf();

    let (state, context) = blocking(move || {
        let mut context = context_for(&uri);
        context.export = ExportSettings::new("tower", ExportFormat::Gltf, &project_dir);
        let state = export_to_api(
            &executor(Duration::from_secs(5)),
            &FakeExporter::default(),
            &mut context,
            &ExporterConfig::default(),
        );
        (state, context)
    })
    .await;

    assert!(state.is_uploaded());
    assert!(context.log.chronological().contains(&"Body: stored"));
    assert!(!dir.path().join("tower.glb").exists());

    let received = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body).into_owned();
    assert!(body.contains("filename=\"tower.glb\""));
    assert!(!body.contains("textures["));
    assert!(!body.contains("name=\"assets\""));
}

/// **VALUE**: A failed upload keeps the temp file for inspection.
///
/// **BUG THIS CATCHES**: Would catch cleanup running on every path, which destroys the
/// only copy of what was meant to be sent.
#[tokio::test]
async fn given_unreachable_server_when_exported_then_failed_and_file_retained() {
    let dir = tempfile::tempdir().unwrap();
    let host = refused_url();
    let project_dir = dir.path().to_path_buf();

    let (state, context) = blocking(move || {
        let mut context = context_for(&host);
        context.export = ExportSettings::new("tower", ExportFormat::Blend, &project_dir);
        let state = export_to_api(
            &executor(Duration::from_secs(5)),
            &FakeExporter::default(),
            &mut context,
            &ExporterConfig::default(),
        );
        (state, context)
    })
    .await;

    let model_path: PathBuf = dir.path().join("tower.blend");
    assert_eq!(
        state,
        ExportState::Failed {
            model_path: Some(model_path.clone())
        }
    );
    assert!(model_path.exists());
    assert!(context.log.latest().unwrap().starts_with("Connection Error: "));
    assert_eq!(
        context.response.as_ref().unwrap().error_kind(),
        Some(RequestErrorKind::Connection)
    );
}

/// **VALUE**: A host export failure reads like a sentence in the panel and clears the
/// previous request's answer.
///
/// **BUG THIS CATCHES**: Would catch the panel showing `[src/...:line:col]`, or a green
/// status from an earlier request after the export failed.
#[tokio::test]
async fn given_exporter_failure_when_exported_then_failed_with_plain_line_and_no_stale_response() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let uri = server.uri();
    let project_dir = dir.path().to_path_buf();

    let (state, context) = blocking(move || {
        let mut context = context_for(&uri);
        context.response = Some(previous_response());
        context.export = ExportSettings::new("tower", ExportFormat::Obj, &project_dir);
        let state = export_to_api(
            &executor(Duration::from_secs(5)),
            &FailingExporter,
            &mut context,
            &ExporterConfig::default(),
        );
        (state, context)
    })
    .await;

    // THEN: One readable line with no source location, and no stale response
    let expected = format!(
        "Error: scene export failed: OBJ to {}: no objects in scene",
        dir.path().join("tower.obj").display()
    );
    assert_eq!(state, ExportState::Failed { model_path: None });
    assert_eq!(context.log.latest(), Some(expected.as_str()));
    assert!(!context.log.latest().unwrap().contains(".rs:"));
    assert!(context.response.is_none());
}
