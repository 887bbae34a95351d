mod activity_log;
mod bearer_token;
mod error_location;
mod http_method;
mod request_spec;
