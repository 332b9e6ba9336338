//! The `client` module talks to a running hub over HTTP.
//!
//! It backs the `publish` and `subscribe` subcommands of the binary and is
//! what the end-to-end tests drive the server with.

pub mod http_client;
pub mod lines;

pub use http_client::{publish, subscribe, subscriber_count};
pub use lines::LineDecoder;
