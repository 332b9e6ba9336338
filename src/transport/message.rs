use serde::{Deserialize, Serialize};

/// Parameters accepted by `POST /`. A missing `msg` publishes an empty line.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct PublishParams {
    pub msg: Option<String>,
}

/// Body of `GET /subscribers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubscriberStats {
    pub subscribers: usize,
}
