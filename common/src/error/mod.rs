pub mod error_location;
pub mod method_error;
pub mod redact_error;
