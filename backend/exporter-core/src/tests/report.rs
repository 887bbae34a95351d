use crate::export::report::upload_report;
use crate::messages::{MODEL_SECTION, TEXTURE_SEPARATOR, TEXTURES_SECTION};

use serde_json::json;

#[test]
fn given_upload_response_when_reported_then_model_and_textures_are_listed() {
    let body = json!({
        "id": "3fa85f64",
        "model": {
            "id": "507f1f77",
            "filename": "tower.obj",
            "uploadDate": "2019-10-13T15:31:48.507Z",
            "href": "/models/507f1f77"
        },
        "textures": [
            {"id": "t1", "filename": "wall.jpg", "uploadDate": "2019-10-13", "href": "/textures/t1"},
            {"id": "t2", "filename": "roof.png", "uploadDate": "2019-10-14", "href": "/textures/t2"}
        ]
    });

    let lines = upload_report(&body).unwrap();

    assert_eq!(lines[0], MODEL_SECTION);
    assert_eq!(lines[1], "ID: 507f1f77");
    assert_eq!(lines[2], "Filename: tower.obj");
    assert_eq!(lines[3], "Upload date: 2019-10-13T15:31:48.507Z");
    assert_eq!(lines[4], "Href: /models/507f1f77");
    assert_eq!(lines[5], TEXTURES_SECTION);
    assert_eq!(lines[6], "ID: t1");
    assert_eq!(lines[10], TEXTURE_SEPARATOR);
    assert_eq!(lines[11], "ID: t2");
    assert_eq!(lines.len(), 16);
}

#[test]
fn given_body_without_model_or_textures_when_reported_then_none() {
    assert!(upload_report(&json!({"status": "ok"})).is_none());
    assert!(upload_report(&json!([1, 2, 3])).is_none());
}

/// **BUG THIS CATCHES**: Would catch a panic on servers that omit optional fields or send
/// numeric ids, which the panel must still render.
#[test]
fn given_sparse_fields_when_reported_then_blanks_and_numbers_render() {
    let body = json!({"model": {"id": 42}});

    let lines = upload_report(&body).unwrap();

    assert_eq!(
        lines,
        vec![MODEL_SECTION, "ID: 42", "Filename: ", "Upload date: ", "Href: "]
    );
}
