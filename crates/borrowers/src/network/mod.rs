//! Network operations
//!
//! HTTP client shared by the remote provider.

pub mod client;

pub use client::HttpClient;
