use crate::{HttpMethod, MethodError};

use std::collections::BTreeMap;
use std::str::FromStr;

use serde_json::Value;

/// The request currently being composed in the panel.
///
/// Fields hold what the user typed; `method` is only checked when the request
/// is dispatched. After every dispatch the fields are reset so a second click
/// cannot resend stale data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestSpec {
    pub method: String,
    pub endpoint: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Value>,
}

impl RequestSpec {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    /// Parse the stored method string.
    #[track_caller]
    pub fn parsed_method(&self) -> Result<HttpMethod, MethodError> {
        HttpMethod::from_str(&self.method)
    }

    /// Replace headers from the JSON object text the panel stores.
    ///
    /// Blank text clears the headers.
    pub fn set_headers_json(&mut self, text: &str) -> Result<(), serde_json::Error> {
        self.headers = if text.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(text)?
        };
        Ok(())
    }

    /// Replace the body from JSON text. Blank text means no body.
    pub fn set_body_json(&mut self, text: &str) -> Result<(), serde_json::Error> {
        self.body = if text.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(text)?)
        };
        Ok(())
    }

    /// Clear method, headers, body and endpoint.
    pub fn reset(&mut self) {
        self.method.clear();
        self.endpoint.clear();
        self.headers.clear();
        self.body = None;
    }

    pub fn is_blank(&self) -> bool {
        self.method.is_empty()
            && self.endpoint.is_empty()
            && self.headers.is_empty()
            && self.body.is_none()
    }
}
