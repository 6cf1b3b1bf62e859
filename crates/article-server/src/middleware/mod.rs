//! HTTP middleware: request ids and request/response logging.

pub mod logging;
pub mod request_id;
