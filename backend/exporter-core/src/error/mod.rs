pub mod config;
pub mod export;
pub mod logger;
pub mod request;

pub use config::ConfigError;
pub use export::ExportError;
pub use logger::LoggerError;
pub use request::{RequestError, RequestErrorKind};
