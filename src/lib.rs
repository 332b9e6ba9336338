//! # PopHub
//!
//! `pophub` is a minimal in-memory publish/subscribe hub served over HTTP.
//! Subscribers hold a streaming `GET /` open and receive every published
//! message as one text line; publishers `POST /` with a `msg` parameter.
//!
//! ## Core Modules
//!
//! - `hub`: the subscriber registry, the scoped `Subscription` guard and fan-out.
//! - `transport`: the axum router and server exposing the hub.
//! - `client`: a small HTTP client for publishing and subscribing.
//! - `config`: loading server and hub settings from file and environment.
//! - `utils`: shared error type and logging setup.

pub mod client;
pub mod config;
pub mod hub;
pub mod transport;
pub mod utils;
