//! HTTP API: the carbon-intensity engine behind a single request/response
//! endpoint.

pub mod app;
pub mod config;
