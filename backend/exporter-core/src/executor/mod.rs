//! Sends exactly one HTTP request and normalises the outcome.

mod payload;

pub use payload::{Attachment, RequestPayload};

use crate::config::ExporterConfig;
use crate::error::request::RequestError;
use crate::response::{HttpResponse, ResponseResult};
use crate::EXPORTER_USER_AGENT;

use common::{HttpMethod, HttpStatusCode};

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::HeaderMap;
use url::Url;

/// Blocking HTTP executor with a fixed per-request timeout.
///
/// No retries: a failure is returned to the caller straight away so the
/// artist can fix the host, token or endpoint and try again.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    client: Client,
    timeout: Duration,
}

impl RequestExecutor {
    pub fn new(timeout: Duration) -> Result<Self, RequestError> {
        Self::build(timeout, EXPORTER_USER_AGENT)
    }

    pub fn from_config(config: &ExporterConfig) -> Result<Self, RequestError> {
        Self::build(config.timeout(), &config.user_agent)
    }

    fn build(timeout: Duration, user_agent: &str) -> Result<Self, RequestError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send one request and classify whatever happens.
    ///
    /// Never panics and never retries. Any attachment files are opened here
    /// and closed before this returns.
    pub fn execute(
        &self,
        method: HttpMethod,
        url: &Url,
        headers: &BTreeMap<String, String>,
        payload: RequestPayload,
    ) -> ResponseResult {
        debug!("Executing {method} request to {url}");

        let result = self.send(method, url, headers, payload);

        match &result {
            Ok(response) => info!("{method} {url} answered {}", response.status),
            Err(error) => warn!("{method} {url} failed: {error}"),
        }

        ResponseResult::from(result)
    }

    fn send(
        &self,
        method: HttpMethod,
        url: &Url,
        headers: &BTreeMap<String, String>,
        payload: RequestPayload,
    ) -> Result<HttpResponse, RequestError> {
        let mut request = self.request_for(method, url.clone());

        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let payload = if method.carries_body() || payload.is_empty() {
            payload
        } else {
            debug!("Dropping request body: {method} requests are sent without one");
            RequestPayload::Empty
        };

        request = match payload {
            RequestPayload::Empty => request,
            RequestPayload::Json(body) => request.json(&body),
            RequestPayload::Multipart { fields, files } => {
                request.multipart(build_form(fields, files)?)
            }
        };

        let response = request.timeout(self.timeout).send()?;

        let status = HttpStatusCode::from(response.status().as_u16());
        let headers = collect_headers(response.headers());
        let body = response.bytes()?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn request_for(&self, method: HttpMethod, url: Url) -> RequestBuilder {
        match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        }
    }
}

fn build_form(fields: Vec<(String, String)>, files: Vec<Attachment>) -> Result<Form, RequestError> {
    let mut form = Form::new();

    for (name, value) in fields {
        form = form.text(name, value);
    }

    for attachment in files {
        let part = Part::file(&attachment.path).map_err(|e| {
            RequestError::unknown(format!(
                "cannot open attachment {}: {e}",
                attachment.path.display()
            ))
        })?;
        debug!(
            "Attaching {} as '{}'",
            attachment.path.display(),
            attachment.field
        );
        form = form.part(attachment.field, part.file_name(attachment.file_name));
    }

    Ok(form)
}

/// Repeated headers are joined with `, `.
fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        match collected.entry(name.as_str().to_string()) {
            Entry::Occupied(mut existing) => {
                let joined = existing.get_mut();
                joined.push_str(", ");
                joined.push_str(&value);
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
    collected
}
