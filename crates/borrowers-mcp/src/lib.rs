//! Borrowers MCP server
//!
//! Exposes the borrowers dataset to agents as MCP tools over stdio.
//! Depends on the `borrowers` crate for records, search and providers.

pub mod config;
pub mod error;
pub mod mcp;
