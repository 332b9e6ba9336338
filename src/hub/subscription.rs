//! Scoped subscription guard
//!
//! A `Subscription` is registered with its `Hub` from the moment it is
//! created until it is dropped. Whatever ends the owner (a finished
//! response, a failed write, a dropped connection, a cancelled task, a
//! panic) the `Drop` impl takes the channel out of the registry.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc::Receiver;

use super::engine::Hub;
use super::message::Message;
use super::subscriber::SubscriberId;

#[derive(Debug)]
pub struct Subscription {
    hub: Hub,
    id: SubscriberId,
    receiver: Receiver<Message>,
}

impl Subscription {
    pub(crate) fn new(hub: Hub, id: SubscriberId, receiver: Receiver<Message>) -> Self {
        Self { hub, id, receiver }
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Wait for the next published message.
    ///
    /// Returns `None` only once the hub has dropped this subscriber.
    pub async fn recv(&mut self) -> Option<Message> {
        self.receiver.recv().await
    }

    /// Non-blocking variant of [`recv`](Self::recv).
    pub fn try_recv(&mut self) -> Option<Message> {
        self.receiver.try_recv().ok()
    }
}

impl Stream for Subscription {
    type Item = Message;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Message>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.hub.unsubscribe(&self.id);
    }
}
