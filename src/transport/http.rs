//! HTTP transport
//!
//! Wires the hub into an axum router. Each streaming response owns a
//! `Subscription`: when hyper drops the body (client gone, write failed,
//! server shutting down) the subscription goes with it and the hub forgets
//! the channel.

use std::convert::Infallible;

use axum::body::Body;
use axum::extract::{Form, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use futures::StreamExt;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::message::{PublishParams, SubscriberStats};
use crate::config::ServerSettings;
use crate::hub::Hub;
use crate::utils::error::Result;

pub fn router(hub: Hub) -> Router {
    Router::new()
        .route("/", get(stream_messages).post(publish_message))
        .route("/subscribers", get(subscriber_stats))
        .with_state(hub)
}

/// Serve the hub on an already bound listener until the server future is dropped.
pub async fn serve(listener: TcpListener, hub: Hub) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "HTTP server listening");
    axum::serve(listener, router(hub)).await
}

pub async fn start_http_server(settings: &ServerSettings, hub: Hub) -> Result<()> {
    let listener = TcpListener::bind(settings.addr()).await?;
    serve(listener, hub).await?;
    Ok(())
}

async fn stream_messages(State(hub): State<Hub>) -> Response {
    let subscription = match hub.subscribe() {
        Ok(subscription) => subscription,
        Err(e) => {
            warn!(error = %e, "Refusing streaming connection");
            return (StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response();
        }
    };

    info!(subscriber = %subscription.id(), "Streaming connection opened");

    let lines = subscription.map(|message| Ok::<_, Infallible>(message.to_line()));
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        Body::from_stream(lines),
    )
        .into_response()
}

// Form must stay the last extractor: it consumes the body.
async fn publish_message(
    State(hub): State<Hub>,
    query: Option<Query<PublishParams>>,
    form: Option<Form<PublishParams>>,
) -> &'static str {
    let msg = query
        .and_then(|Query(params)| params.msg)
        .or_else(|| form.and_then(|Form(params)| params.msg))
        .unwrap_or_default();

    let delivered = hub.publish(msg);
    info!(delivered, "Message published");
    "ok"
}

async fn subscriber_stats(State(hub): State<Hub>) -> Json<SubscriberStats> {
    Json(SubscriberStats {
        subscribers: hub.subscriber_count(),
    })
}
