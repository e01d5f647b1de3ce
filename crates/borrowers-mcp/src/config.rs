//! Configuration constants for the borrowers MCP server

/// Server identity reported during `initialize`
pub mod server {
    /// Server name
    pub const NAME: &str = "borrowers-api";

    /// Server version
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// MCP protocol revision spoken by this server
    pub const PROTOCOL_VERSION: &str = "2024-11-05";
}

/// Tool names
pub mod tools {
    pub const GET_BORROWERS: &str = "get_borrowers";
    pub const SEARCH_BORROWERS: &str = "search_borrowers";
}
