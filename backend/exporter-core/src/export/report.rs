//! Log lines describing what the server stored after an upload.

use crate::messages::{
    FILENAME_PREFIX, HREF_PREFIX, ID_PREFIX, MODEL_SECTION, TEXTURE_SEPARATOR, TEXTURES_SECTION,
    UPLOAD_DATE_PREFIX,
};

use serde_json::Value;

/// Breakdown of the `model` and `textures` fields of an upload response.
///
/// Returns `None` when the body has neither field, so the caller can fall
/// back to logging the raw body.
pub fn upload_report(body: &Value) -> Option<Vec<String>> {
    let model = body.get("model").filter(|model| model.is_object());
    let textures = body.get("textures").and_then(Value::as_array);

    if model.is_none() && textures.is_none() {
        return None;
    }

    let mut lines = Vec::new();

    if let Some(model) = model {
        lines.push(MODEL_SECTION.to_string());
        lines.extend(stored_file_lines(model));
    }

    if let Some(textures) = textures {
        lines.push(TEXTURES_SECTION.to_string());
        for texture in textures {
            lines.extend(stored_file_lines(texture));
            lines.push(TEXTURE_SEPARATOR.to_string());
        }
    }

    Some(lines)
}

fn stored_file_lines(file: &Value) -> [String; 4] {
    [
        format!("{ID_PREFIX}{}", text_field(file, "id")),
        format!("{FILENAME_PREFIX}{}", text_field(file, "filename")),
        format!("{UPLOAD_DATE_PREFIX}{}", text_field(file, "uploadDate")),
        format!("{HREF_PREFIX}{}", text_field(file, "href")),
    ]
}

fn text_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
