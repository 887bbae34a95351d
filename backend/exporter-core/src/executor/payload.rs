use std::path::PathBuf;

use serde_json::Value;

/// A file sent as one named part of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Form field name, e.g. `model` or `textures[0]`.
    pub field: String,
    pub path: PathBuf,
    /// File name reported to the server.
    pub file_name: String,
}

impl Attachment {
    pub fn new(field: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            field: field.into(),
            path,
            file_name,
        }
    }
}

/// What goes in the request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestPayload {
    #[default]
    Empty,
    Json(Value),
    Multipart {
        fields: Vec<(String, String)>,
        files: Vec<Attachment>,
    },
}

impl RequestPayload {
    pub fn is_empty(&self) -> bool {
        matches!(self, RequestPayload::Empty)
    }
}

impl From<Option<Value>> for RequestPayload {
    fn from(body: Option<Value>) -> Self {
        body.map_or(RequestPayload::Empty, RequestPayload::Json)
    }
}
