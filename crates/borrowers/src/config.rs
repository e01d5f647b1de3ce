//! Configuration constants for the borrowers crate

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("borrowers/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Overall request timeout in seconds (covers slow cold starts of the remote API)
    pub const READ_TIMEOUT_SECS: u64 = 60;
}

/// Data provider configuration
pub mod providers {
    /// Remote borrowers API endpoint
    pub const REMOTE_BORROWERS_URL: &str = "https://rag-test-x7m8.onrender.com/api/borrowers";

    /// Default location of the borrowers file, relative to the working directory
    pub const DEFAULT_DATA_PATH: &str = "data/borrowers.json";
}
