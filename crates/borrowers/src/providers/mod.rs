//! Borrower data providers
//!
//! Sources of borrower collections: a local JSON file or the remote API.

pub mod file;
pub mod remote;
pub mod traits;

// Re-exports
pub use file::FileProvider;
pub use remote::RemoteProvider;
pub use traits::BorrowerProvider;
