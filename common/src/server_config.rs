use serde::{Deserialize, Serialize};

/// Schemes a host must start with before anything is sent to it.
pub const ALLOWED_SCHEMES: [&str; 2] = ["https://", "http://"];

/// Where requests go: `host` plus an `endpoint` path suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    #[serde(default)]
    pub endpoint: String,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            endpoint: endpoint.into(),
        }
    }

    /// True when the host starts with `http://` or `https://`.
    pub fn has_valid_scheme(&self) -> bool {
        ALLOWED_SCHEMES
            .iter()
            .any(|scheme| self.host.starts_with(scheme))
    }

    /// Host and endpoint joined verbatim, no separator added.
    pub fn target(&self) -> String {
        format!("{}{}", self.host, self.endpoint)
    }

    /// Like [`ServerConfig::target`], with a per-request endpoint taking
    /// precedence when it is not empty.
    pub fn target_with(&self, endpoint: &str) -> String {
        if endpoint.is_empty() {
            self.target()
        } else {
            format!("{}{}", self.host, endpoint)
        }
    }
}
