//! HTTP client for the Taskbox API
//!
//! Implements the data-access traits of `taskbox-core` against the remote
//! JSON API. Every call is a `POST` carrying an `action` discriminator.

mod client;
mod config;
mod protocol;

pub use client::RestClient;
pub use config::ApiConfig;
pub use protocol::{Action, Resource};
