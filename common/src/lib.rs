//! Plain data shared by the exporter crates.
//!
//! Everything here is the state a host add-on keeps in its per-scene
//! storage: credentials, server address, the request being composed and the
//! log panel contents. No I/O happens in this crate.
//!
//! ## Architecture
//!
//! - **common** (this crate): data structures and their validation
//! - **exporter-core**: request execution, dispatch and export upload
//!
//! The host adapter owns instances of these types and lends them to
//! `exporter-core` for the duration of a single user action.

pub mod activity_log;
pub mod bearer_token;
pub mod credentials;
pub mod error;
pub mod export_format;
pub mod http_method;
pub mod http_status;
pub mod request_spec;
pub mod server_config;

#[cfg(test)]
mod tests;

pub use activity_log::ActivityLog;
pub use bearer_token::BearerToken;
pub use credentials::Credentials;
pub use error::error_location::ErrorLocation;
pub use error::method_error::MethodError;
pub use error::redact_error::RedactError;
pub use export_format::ExportFormat;
pub use http_method::HttpMethod;
pub use http_status::HttpStatusCode;
pub use request_spec::RequestSpec;
pub use server_config::ServerConfig;
