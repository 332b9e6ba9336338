//! Message definitions for the hub
//!
//! A `Message` is an opaque piece of text. The hub never inspects it; the
//! streaming responder renders it as one `\r\n`-terminated line.
//!
//! The payload is held behind an `Arc<str>` so fan-out to many subscribers
//! clones a pointer rather than the text itself.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    payload: Arc<str>,
}

impl Message {
    pub fn new(payload: impl Into<Arc<str>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Wire form written to streaming subscribers: `<payload>\r\n`.
    pub fn to_line(&self) -> Bytes {
        let mut line = String::with_capacity(self.payload.len() + 2);
        line.push_str(&self.payload);
        line.push_str("\r\n");
        Bytes::from(line)
    }
}

impl From<String> for Message {
    fn from(payload: String) -> Self {
        Self::new(payload)
    }
}

impl From<&str> for Message {
    fn from(payload: &str) -> Self {
        Self::new(payload)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload)
    }
}
