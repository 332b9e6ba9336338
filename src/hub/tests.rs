use super::{Hub, HubError, Message};
use crate::config::HubSettings;
use futures::StreamExt;

fn hub_with(max_subscribers: usize, channel_capacity: usize) -> Hub {
    Hub::new(HubSettings {
        max_subscribers,
        channel_capacity,
    })
}

#[test]
fn test_message_to_line() {
    let msg = Message::from("hello");
    assert_eq!(msg.payload(), "hello");
    assert_eq!(&msg.to_line()[..], b"hello\r\n");
    assert_eq!(&Message::from("").to_line()[..], b"\r\n");
}

#[test]
fn test_hub_new() {
    let hub = Hub::default();
    assert_eq!(hub.subscriber_count(), 0);
}

#[test]
fn test_subscribe_registers_and_drop_unregisters() {
    let hub = Hub::default();
    let sub = hub.subscribe().unwrap();
    let id = sub.id();
    assert!(hub.is_subscribed(&id));
    assert_eq!(hub.subscriber_count(), 1);

    drop(sub);
    assert!(!hub.is_subscribed(&id));
    assert_eq!(hub.subscriber_count(), 0);
}

#[test]
fn test_unsubscribe_is_idempotent() {
    let hub = Hub::default();
    let sub = hub.subscribe().unwrap();
    let id = sub.id();

    assert!(hub.unsubscribe(&id));
    assert!(!hub.unsubscribe(&id));
    // Drop after a manual unsubscribe must not disturb anything.
    drop(sub);
    assert_eq!(hub.subscriber_count(), 0);
}

#[test]
fn test_publish_single_subscriber() {
    let hub = Hub::default();
    let mut sub = hub.subscribe().unwrap();

    assert_eq!(hub.publish("hello"), 1);

    assert_eq!(sub.try_recv(), Some(Message::from("hello")));
    assert_eq!(sub.try_recv(), None);
}

#[test]
fn test_publish_reaches_every_subscriber_once() {
    let hub = Hub::default();
    let mut subs: Vec<_> = (0..5).map(|_| hub.subscribe().unwrap()).collect();

    assert_eq!(hub.publish("fan-out"), 5);

    for sub in subs.iter_mut() {
        assert_eq!(sub.try_recv(), Some(Message::from("fan-out")));
        assert_eq!(sub.try_recv(), None);
    }
}

#[test]
fn test_publish_preserves_order() {
    let hub = Hub::default();
    let mut first = hub.subscribe().unwrap();
    let mut second = hub.subscribe().unwrap();

    hub.publish("A");
    hub.publish("B");

    for sub in [&mut first, &mut second] {
        assert_eq!(sub.try_recv().unwrap().payload(), "A");
        assert_eq!(sub.try_recv().unwrap().payload(), "B");
    }
}

#[test]
fn test_publish_without_subscribers() {
    let hub = Hub::default();
    assert_eq!(hub.publish("nobody listening"), 0);
    assert_eq!(hub.subscriber_count(), 0);
}

#[test]
fn test_publish_skips_dropped_subscriber() {
    let hub = Hub::default();
    let mut kept = hub.subscribe().unwrap();
    let gone = hub.subscribe().unwrap();
    assert_eq!(hub.subscriber_count(), 2);

    drop(gone);
    assert_eq!(hub.subscriber_count(), 1);

    assert_eq!(hub.publish("after"), 1);
    assert_eq!(kept.try_recv().unwrap().payload(), "after");
}

#[test]
fn test_subscriber_limit() {
    let hub = hub_with(2, 8);
    let _a = hub.subscribe().unwrap();
    let b = hub.subscribe().unwrap();

    assert_eq!(hub.subscribe().unwrap_err(), HubError::Full { limit: 2 });

    drop(b);
    assert!(hub.subscribe().is_ok());
}

#[test]
fn test_zero_limit_means_unlimited() {
    let hub = hub_with(0, 8);
    let subs: Vec<_> = (0..50).map(|_| hub.subscribe().unwrap()).collect();
    assert_eq!(hub.subscriber_count(), subs.len());
}

#[test]
fn test_full_queue_drops_only_slow_subscriber_copy() {
    let hub = hub_with(0, 1);
    let mut slow = hub.subscribe().unwrap();
    let mut fast = hub.subscribe().unwrap();

    assert_eq!(hub.publish("one"), 2);
    assert_eq!(fast.try_recv().unwrap().payload(), "one");

    // `slow` still holds "one", so "two" only fits in `fast`.
    assert_eq!(hub.publish("two"), 1);
    assert_eq!(fast.try_recv().unwrap().payload(), "two");

    assert_eq!(slow.try_recv().unwrap().payload(), "one");
    assert_eq!(slow.try_recv(), None);
}

#[test]
fn test_zero_capacity_is_clamped() {
    let hub = hub_with(0, 0);
    let mut sub = hub.subscribe().unwrap();
    assert_eq!(hub.publish("fits"), 1);
    assert_eq!(sub.try_recv().unwrap().payload(), "fits");
}

#[test]
fn test_clones_share_registry() {
    let hub = Hub::default();
    let publisher = hub.clone();
    let mut sub = hub.subscribe().unwrap();

    publisher.publish("shared");
    assert_eq!(sub.try_recv().unwrap().payload(), "shared");
    assert_eq!(publisher.subscriber_count(), 1);
}

#[tokio::test]
async fn test_recv_waits_for_publish() {
    let hub = Hub::default();
    let mut sub = hub.subscribe().unwrap();

    let publisher = hub.clone();
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        publisher.publish("late");
    });

    let msg = sub.recv().await.unwrap();
    assert_eq!(msg.payload(), "late");
}

#[tokio::test]
async fn test_recv_ends_after_forced_unsubscribe() {
    let hub = Hub::default();
    let mut sub = hub.subscribe().unwrap();
    hub.publish("last");

    hub.unsubscribe(&sub.id());

    assert_eq!(sub.recv().await.unwrap().payload(), "last");
    assert_eq!(sub.recv().await, None);
}

#[tokio::test]
async fn test_subscription_as_stream() {
    let hub = Hub::default();
    let sub = hub.subscribe().unwrap();

    hub.publish("x");
    hub.publish("y");
    hub.publish("z");

    let got: Vec<String> = sub
        .take(3)
        .map(|m| m.payload().to_string())
        .collect()
        .await;
    assert_eq!(got, vec!["x", "y", "z"]);
    assert_eq!(hub.subscriber_count(), 0);
}

#[tokio::test]
async fn test_subscription_dropped_in_aborted_task() {
    let hub = Hub::default();
    let sub = hub.subscribe().unwrap();

    let task = tokio::spawn(async move {
        let mut sub = sub;
        while sub.recv().await.is_some() {}
    });
    tokio::task::yield_now().await;
    assert_eq!(hub.subscriber_count(), 1);

    task.abort();
    let _ = task.await;
    assert_eq!(hub.subscriber_count(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_subscribe_and_publish() {
    let hub = Hub::default();
    let mut handles = Vec::new();

    for _ in 0..8 {
        let hub = hub.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..50 {
                let sub = hub.subscribe().unwrap();
                hub.publish("churn");
                drop(sub);
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(hub.subscriber_count(), 0);
}
