//! Thin reqwest wrappers around the hub's HTTP surface.
//!
//! `base_url` is the server root, e.g. `http://127.0.0.1:8080`.

use futures::stream::BoxStream;
use tracing::debug;

use super::lines::lines;
use crate::transport::{PublishParams, SubscriberStats};
use crate::utils::error::{Error, Result};

/// Publish `msg` to every subscriber of the hub at `base_url`.
pub async fn publish(base_url: &str, msg: &str) -> Result<()> {
    let params = PublishParams {
        msg: Some(msg.to_string()),
    };
    let resp = reqwest::Client::new()
        .post(base_url)
        .form(&params)
        .send()
        .await?;
    check_status(&resp)?;
    debug!(url = base_url, "Published message");
    Ok(())
}

/// Open a streaming subscription and yield each received line.
///
/// Returns once the server has registered the subscriber, so anything
/// published afterwards is delivered on the returned stream.
pub async fn subscribe(base_url: &str) -> Result<BoxStream<'static, Result<String>>> {
    let resp = reqwest::get(base_url).await?;
    check_status(&resp)?;
    debug!(url = base_url, "Subscribed");
    Ok(lines(resp.bytes_stream()))
}

pub async fn subscriber_count(base_url: &str) -> Result<usize> {
    let url = format!("{}/subscribers", base_url.trim_end_matches('/'));
    let resp = reqwest::get(url).await?;
    check_status(&resp)?;
    let stats: SubscriberStats = serde_json::from_slice(&resp.bytes().await?)?;
    Ok(stats.subscribers)
}

fn check_status(resp: &reqwest::Response) -> Result<()> {
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::Status(status))
    }
}
