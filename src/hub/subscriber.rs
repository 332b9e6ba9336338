//! Subscriber representation
//!
//! `Subscriber` is the hub-side half of one subscription: the id it is
//! registered under and the sending end of its delivery channel. The
//! receiving end lives in the matching `Subscription`.

use tokio::sync::mpsc::Sender;
use uuid::Uuid;

use super::message::Message;

pub type SubscriberId = Uuid;

#[derive(Debug, Clone)]
pub struct Subscriber {
    pub id: SubscriberId,
    pub sender: Sender<Message>,
}

impl Subscriber {
    /// Create a subscriber with a fresh random id.
    pub fn new(sender: Sender<Message>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
        }
    }
}
