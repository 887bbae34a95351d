mod config;
mod dispatch;
mod logger;
mod report;
mod request_error;
mod textures;
