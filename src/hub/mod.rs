//! The `hub` module holds the publish/subscribe core.
//!
//! - `Hub`: registry of subscriber channels plus the fan-out used by
//!   publishers.
//! - `Subscription`: RAII guard for one registered channel; yields the
//!   messages published while it is alive.
//! - `Message`: the opaque text value that flows through the hub.
//!
//! Nothing in here knows about HTTP; the transport layer drives it.

pub mod engine;
pub mod error;
pub mod message;
pub mod subscriber;
pub mod subscription;

pub use engine::Hub;
pub use error::HubError;
pub use message::Message;
pub use subscriber::SubscriberId;
pub use subscription::Subscription;

#[cfg(test)]
mod tests;
