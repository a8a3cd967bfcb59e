//! Core library for the `scaleprobe` CLI.
//!
//! `scaleprobe` drives a downstream service through two load phases to
//! exercise its autoscaler: a sustained high-frequency burst that should
//! trigger scale-up, then a reduced-rate tail that should allow scale-down.
//! Every request is a fire-and-forget GET whose outcome is only logged; the
//! run ends once all dispatched requests have returned.
pub mod args;
pub mod config;
pub mod driver;
pub mod error;
pub mod http;
pub mod logger;
