//! HTTP client construction and the one-shot fetch operation.
mod client;
mod fetch;

pub use client::build_client;
pub use fetch::{fetch_and_log, fetch_data};
