//! Borrowers — dataset access and search
//!
//! Borrower records, the query engine that filters them, and the data
//! providers that load them from a local file or a remote endpoint.
//!
//! ## Quick start
//!
//! ```no_run
//! use borrowers::providers::{BorrowerProvider, RemoteProvider};
//! use borrowers::query::{filter, Query};
//! ```

pub mod config;
pub mod error;
pub mod network;
pub mod providers;
pub mod query;
pub mod record;
