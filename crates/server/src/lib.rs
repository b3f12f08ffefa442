//! Infra as Design webhook server library.
//!
//! This crate provides the Slack webhook receiver as a library, allowing it
//! to be tested end to end and reused by the CLI.
//!
//! # Security
//!
//! Every Slack endpoint verifies the request signature against the app's
//! signing secret before doing anything else. The server refuses to start
//! without a signing secret.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod slack;
pub mod state;

use std::net::SocketAddr;

use tokio::net::TcpListener;

pub use routes::app;

/// Bind the listener and report the address actually bound.
///
/// Differs from `addr` when port 0 asks the OS to pick a port.
///
/// # Errors
///
/// Returns the I/O error if the address cannot be bound.
pub async fn bind(addr: SocketAddr) -> std::io::Result<(TcpListener, SocketAddr)> {
    let listener = TcpListener::bind(addr).await?;
    let bound = listener.local_addr()?;
    Ok((listener, bound))
}
