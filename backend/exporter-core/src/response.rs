use crate::error::request::{RequestError, RequestErrorKind};

use common::HttpStatusCode;

use std::collections::BTreeMap;

/// A response that made it back from the server, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: HttpStatusCode,
    /// Header names are lower-case as received.
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Body as text, replacing invalid UTF-8.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Headers as a JSON object, for the log panel.
    pub fn headers_json(&self) -> String {
        serde_json::to_string(&self.headers).unwrap_or_default()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Body parsed as JSON, when it is JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// Outcome of one request: either every response field or only the error.
#[derive(Debug, Clone)]
pub enum ResponseResult {
    Successful(HttpResponse),
    Failed(RequestError),
}

impl ResponseResult {
    pub fn successful(&self) -> bool {
        matches!(self, ResponseResult::Successful(_))
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            ResponseResult::Successful(response) => Some(response),
            ResponseResult::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&RequestError> {
        match self {
            ResponseResult::Successful(_) => None,
            ResponseResult::Failed(error) => Some(error),
        }
    }

    pub fn status_code(&self) -> Option<HttpStatusCode> {
        self.response().map(|response| response.status)
    }

    /// Status as the panel shows it, e.g. `[200]`.
    pub fn status_label(&self) -> Option<String> {
        self.status_code().map(|status| status.bracketed())
    }

    pub fn headers(&self) -> Option<&BTreeMap<String, String>> {
        self.response().map(|response| &response.headers)
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.response().map(|response| response.body.as_slice())
    }

    pub fn error_kind(&self) -> Option<RequestErrorKind> {
        self.error().map(RequestError::kind)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error().map(RequestError::message)
    }
}

impl From<Result<HttpResponse, RequestError>> for ResponseResult {
    fn from(result: Result<HttpResponse, RequestError>) -> Self {
        match result {
            Ok(response) => ResponseResult::Successful(response),
            Err(error) => ResponseResult::Failed(error),
        }
    }
}
