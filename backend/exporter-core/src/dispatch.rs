//! Entry point behind the panel's request button.

use crate::context::ExporterContext;
use crate::error::request::RequestError;
use crate::executor::{RequestExecutor, RequestPayload};
use crate::messages::{
    BODY_PREFIX, HEADERS_PREFIX, INVALID_HOST_MESSAGE, INVALID_METHOD_MESSAGE,
    INVALID_URL_MESSAGE, STATUS_PREFIX,
};
use crate::response::{HttpResponse, ResponseResult};

use common::{ActivityLog, Credentials, ServerConfig};

use std::collections::BTreeMap;

use log::{debug, info, warn};
use url::Url;

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Validate, send and log the request composed in `context.request`.
///
/// The result is also stored in `context.response`. The request fields are
/// reset afterwards on every path, including validation failures.
pub fn do_request(executor: &RequestExecutor, context: &mut ExporterContext) -> ResponseResult {
    debug!("Dispatching '{}' request", context.request.method);

    let result = prepare_and_send(executor, context);

    context.request.reset();

    match &result {
        ResponseResult::Successful(response) => record_response(&mut context.log, response),
        ResponseResult::Failed(error) => record_failure(&mut context.log, error),
    }

    context.response = Some(result.clone());
    result
}

/// Plain GET against the configured endpoint with no headers or body.
pub fn check_connection(
    executor: &RequestExecutor,
    context: &mut ExporterContext,
) -> ResponseResult {
    context.request.method = "GET".to_string();
    context.request.headers.clear();
    context.request.body = None;

    do_request(executor, context)
}

fn prepare_and_send(executor: &RequestExecutor, context: &ExporterContext) -> ResponseResult {
    let request = &context.request;

    let method = match request.parsed_method() {
        Ok(method) => method,
        Err(e) => {
            return ResponseResult::Failed(RequestError::validation(format!(
                "{INVALID_METHOD_MESSAGE}{}",
                e.method()
            )));
        }
    };

    let url = match target_url(&context.server, &request.endpoint) {
        Ok(url) => url,
        Err(e) => return ResponseResult::Failed(e),
    };

    let headers = authorized_headers(&request.headers, &context.credentials);
    let payload = RequestPayload::from(request.body.clone());

    executor.execute(method, &url, &headers, payload)
}

/// Check the host scheme, then join and parse the request url.
#[track_caller]
pub fn target_url(server: &ServerConfig, endpoint: &str) -> Result<Url, RequestError> {
    if !server.has_valid_scheme() {
        return Err(RequestError::validation(INVALID_HOST_MESSAGE));
    }

    let target = server.target_with(endpoint);
    match Url::parse(&target) {
        Ok(url) => Ok(url),
        Err(e) => Err(RequestError::validation(format!(
            "{INVALID_URL_MESSAGE}{target} ({e})"
        ))),
    }
}

/// User headers with `Authorization: Bearer <token>` when a token is set.
///
/// An existing Authorization header, in any casing, is replaced.
pub fn authorized_headers(
    headers: &BTreeMap<String, String>,
    credentials: &Credentials,
) -> BTreeMap<String, String> {
    let mut merged = headers.clone();
    if let Some(value) = credentials.authorization_header() {
        merged.retain(|name, _| !name.eq_ignore_ascii_case(AUTHORIZATION_HEADER));
        merged.insert(AUTHORIZATION_HEADER.to_string(), value);
    }
    merged
}

fn record_response(log: &mut ActivityLog, response: &HttpResponse) {
    record(log, format!("{STATUS_PREFIX}{}", response.status.bracketed()));
    record(log, format!("{HEADERS_PREFIX}{}", response.headers_json()));
    record(log, format!("{BODY_PREFIX}{}", response.body_text()));
}

pub(crate) fn record(log: &mut ActivityLog, line: impl Into<String>) {
    let line = line.into();
    info!("{line}");
    log.push(line);
}

pub(crate) fn record_failure(log: &mut ActivityLog, error: &RequestError) {
    let line = error.log_line();
    warn!("{line} {}", error.location());
    log.push(line);
}
