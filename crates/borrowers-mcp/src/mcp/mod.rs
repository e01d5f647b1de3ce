//! MCP stdio server
//!
//! Manual implementation of the Model Context Protocol over stdin/stdout.
//! No async runtime: requests are handled one at a time on the calling thread.

pub mod server;
pub mod tools;
pub mod types;
