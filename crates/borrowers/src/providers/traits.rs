//! Borrower provider trait
//!
//! Defines the interface that every source of borrower records implements.

use crate::error::Result;
use crate::record::Collection;

/// A source of borrower records
///
/// Implementations re-acquire the data on every call. Nothing is cached
/// between calls, so each request sees the current state of the source.
pub trait BorrowerProvider: Send + Sync {
    /// Display name for the provider (e.g., "Local file")
    fn name(&self) -> &'static str;

    /// Machine-readable identifier (e.g., "file")
    fn id(&self) -> &'static str;

    /// Load the full collection
    fn fetch(&self) -> Result<Collection>;
}
