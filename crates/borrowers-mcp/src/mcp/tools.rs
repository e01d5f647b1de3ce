//! MCP tool definitions and handlers
//!
//! Each tool fetches a fresh collection from the provider and renders it as
//! a count summary followed by the records as pretty-printed JSON.

use serde_json::{json, Value};
use tracing::{debug, error};

use borrowers::providers::BorrowerProvider;
use borrowers::query::{filter, FieldSelector, Query};
use borrowers::record::{self, Collection};

use crate::config::tools::{GET_BORROWERS, SEARCH_BORROWERS};
use crate::error::{AppError, Result};

use super::types::{ToolDefinition, ToolResult};

/// Return all tool definitions for tools/list
pub fn list_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: GET_BORROWERS,
            description: "Get all borrowers from the API",
            input_schema: json!({ "type": "object", "properties": {} }),
        },
        ToolDefinition {
            name: SEARCH_BORROWERS,
            description: "Search borrowers by name, email, or other criteria",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query to filter borrowers"
                    },
                    "field": {
                        "type": "string",
                        "description": "Field to search in (name, email, etc.)",
                        "enum": FieldSelector::KNOWN
                    }
                },
                "required": ["query"]
            }),
        },
    ]
}

/// Dispatch a tool call to the appropriate handler
///
/// Provider failures come back as error-flagged results. Only an unknown
/// tool name fails the call itself.
pub fn call_tool(name: &str, args: &Value, provider: &dyn BorrowerProvider) -> Result<ToolResult> {
    debug!("Calling tool {name} via {}", provider.name());
    match name {
        GET_BORROWERS => Ok(handle_get(provider)),
        SEARCH_BORROWERS => Ok(handle_search(args, provider)),
        _ => Err(AppError::UnknownTool(name.to_string())),
    }
}

fn handle_get(provider: &dyn BorrowerProvider) -> ToolResult {
    match fetch(provider) {
        Ok(borrowers) => ToolResult::text(format!(
            "Found {} borrowers:\n\n{}",
            borrowers.len(),
            to_pretty_json(&borrowers)
        )),
        Err(e) => {
            error!("get_borrowers failed: {e}");
            ToolResult::error(format!("Error fetching borrowers: {e}"))
        }
    }
}

fn handle_search(args: &Value, provider: &dyn BorrowerProvider) -> ToolResult {
    let text = match args.get("query").and_then(|v| v.as_str()) {
        Some(q) => q,
        None => return ToolResult::error("Missing required parameter: query"),
    };
    let field = FieldSelector::from_option(args.get("field").and_then(|v| v.as_str()));
    let query = Query::with_field(text, field);

    match fetch(provider) {
        Ok(borrowers) => {
            let matches = filter(borrowers, &query);
            ToolResult::text(format!(
                "Found {} borrowers matching \"{}\":\n\n{}",
                matches.len(),
                query.text(),
                to_pretty_json(&matches)
            ))
        }
        Err(e) => {
            error!("search_borrowers failed: {e}");
            ToolResult::error(format!("Error searching borrowers: {e}"))
        }
    }
}

fn fetch(provider: &dyn BorrowerProvider) -> Result<Collection> {
    Ok(provider.fetch()?)
}

fn to_pretty_json(records: &Collection) -> String {
    record::to_pretty_json(records).unwrap_or_else(|_| "[]".to_string())
}
