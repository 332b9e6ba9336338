//! Hub engine
//!
//! The in-memory registry of subscriber channels and the fan-out that
//! pushes every published message into each of them.
//!
//! Concurrency and usage notes:
//! - `Hub` is a cheap handle; clones share one registry. The composition
//!   root creates it once and hands clones to whoever needs to publish or
//!   subscribe.
//! - The registry sits behind a `std::sync::Mutex` which is never held
//!   across an `.await`. `publish` snapshots the registered senders and
//!   releases the lock before delivering, so subscribe/unsubscribe calls
//!   racing with a publish never wait on delivery.
//! - Delivery uses `try_send` on a bounded per-subscriber queue. A full
//!   queue loses that one copy of the message (logged at warn level); the
//!   publisher and every other subscriber are unaffected.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, info, warn};

use super::error::HubError;
use super::message::Message;
use super::subscriber::{Subscriber, SubscriberId};
use super::subscription::Subscription;
use crate::config::HubSettings;

#[derive(Debug, Clone, Default)]
pub struct Hub {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    subscribers: Mutex<HashMap<SubscriberId, Subscriber>>,
    settings: HubSettings,
}

impl Hub {
    pub fn new(settings: HubSettings) -> Self {
        Self {
            inner: Arc::new(Inner {
                subscribers: Mutex::new(HashMap::new()),
                settings,
            }),
        }
    }

    pub fn settings(&self) -> &HubSettings {
        &self.inner.settings
    }

    /// Register a new subscriber and hand back the guard that owns its
    /// receiving end. Dropping the guard deregisters it.
    pub fn subscribe(&self) -> Result<Subscription, HubError> {
        let capacity = self.inner.settings.channel_capacity.max(1);
        let (tx, rx) = mpsc::channel(capacity);
        let subscriber = Subscriber::new(tx);
        let id = subscriber.id;

        let total = {
            let mut subscribers = self.subscribers();
            let limit = self.inner.settings.max_subscribers;
            if limit > 0 && subscribers.len() >= limit {
                warn!(limit, "Rejecting subscriber, hub is full");
                return Err(HubError::Full { limit });
            }
            subscribers.insert(id, subscriber);
            subscribers.len()
        };

        info!(subscriber = %id, subscribers = total, "Subscriber registered");
        Ok(Subscription::new(self.clone(), id, rx))
    }

    /// Remove a subscriber from the registry. Returns `false` if it was not
    /// registered, which makes repeated calls harmless.
    ///
    /// Removing a subscriber drops the hub's sender; once any in-flight
    /// publish snapshot is gone the subscription's `recv` yields `None`.
    pub fn unsubscribe(&self, id: &SubscriberId) -> bool {
        let (removed, total) = {
            let mut subscribers = self.subscribers();
            let removed = subscribers.remove(id).is_some();
            (removed, subscribers.len())
        };

        if removed {
            info!(subscriber = %id, subscribers = total, "Subscriber removed");
        }
        removed
    }

    /// Push `message` onto every registered channel without waiting for any
    /// reader. Returns how many channels accepted it.
    pub fn publish(&self, message: impl Into<Message>) -> usize {
        let message = message.into();
        let snapshot: Vec<Subscriber> = self.subscribers().values().cloned().collect();

        if snapshot.is_empty() {
            debug!("Published with no subscribers");
            return 0;
        }

        let mut delivered = 0;
        for subscriber in &snapshot {
            match subscriber.sender.try_send(message.clone()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!(
                        subscriber = %subscriber.id,
                        capacity = self.inner.settings.channel_capacity,
                        "Subscriber queue full, dropping message"
                    );
                }
                Err(TrySendError::Closed(_)) => {
                    debug!(subscriber = %subscriber.id, "Subscriber went away during publish");
                }
            }
        }

        debug!(delivered, subscribers = snapshot.len(), "Message published");
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers().len()
    }

    pub fn is_subscribed(&self, id: &SubscriberId) -> bool {
        self.subscribers().contains_key(id)
    }

    fn subscribers(&self) -> MutexGuard<'_, HashMap<SubscriberId, Subscriber>> {
        // The map stays consistent even if a holder panicked.
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
