//! The `transport` module exposes the hub over HTTP.
//!
//! - `GET /` streams every published message as a `\r\n`-terminated line
//!   for as long as the client stays connected.
//! - `POST /` publishes the `msg` parameter (query string or urlencoded
//!   form body) and answers `ok`.
//! - `GET /subscribers` reports how many streams are currently open.

pub mod http;
pub mod message;

pub use http::{router, serve, start_http_server};
pub use message::{PublishParams, SubscriberStats};
