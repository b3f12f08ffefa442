//! Infra as Design Core - Shared types library.
//!
//! This crate provides the types shared by every Infra as Design component:
//! - `server` - Slack webhook receiver (slash command, result reporting)
//! - `cli` - Operator tools for signing and delivering provisioning results
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps it
//! lightweight so the provisioning side can depend on it without pulling in
//! the web stack.
//!
//! # Modules
//!
//! - [`types`] - Provisioning outcomes and AWS region choices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
