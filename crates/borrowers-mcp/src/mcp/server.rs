//! MCP stdio server
//!
//! Reads JSON-RPC requests line by line, dispatches to handlers, writes
//! responses as single lines. Runs on the calling thread; no async runtime.

use std::io::{self, BufRead, Write};

use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use borrowers::providers::BorrowerProvider;

use crate::config::server::{NAME, PROTOCOL_VERSION, VERSION};
use crate::error::Result;

use super::tools;
use super::types::{
    JsonRpcRequest, JsonRpcResponse, ToolCallParams, INTERNAL_ERROR, INVALID_PARAMS,
    INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};

/// Run the MCP server on stdin/stdout (blocks until stdin closes)
pub fn run(provider: &dyn BorrowerProvider) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    info!("Borrowers MCP server running on stdio");
    run_with(stdin.lock(), stdout.lock(), provider)
}

/// Serve requests from `reader`, writing responses to `writer`
///
/// Returns when the reader hits end of input.
///
/// Lines that are not valid UTF-8 are decoded lossily and answered like any
/// other malformed input; only I/O errors end the loop early.
pub fn run_with<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    provider: &dyn BorrowerProvider,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                warn!("Unparseable request: {e}");
                let resp = JsonRpcResponse::error(Value::Null, PARSE_ERROR, e.to_string());
                write_response(&mut writer, &resp)?;
                continue;
            }
        };

        if request.is_notification() {
            debug!("Notification: {}", request.method);
            continue;
        }

        let response = handle_request(&request, provider);
        write_response(&mut writer, &response)?;
    }
    info!("stdin closed, shutting down");
    Ok(())
}

fn handle_request(req: &JsonRpcRequest, provider: &dyn BorrowerProvider) -> JsonRpcResponse {
    let id = req.id.clone().unwrap_or(Value::Null);

    if req.jsonrpc != "2.0" {
        return JsonRpcResponse::error(id, INVALID_REQUEST, "Invalid JSON-RPC version");
    }

    match req.method.as_str() {
        "initialize" => handle_initialize(id),
        "tools/list" => handle_tools_list(id),
        "tools/call" => handle_tools_call(id, &req.params, provider),
        "ping" => JsonRpcResponse::success(id, json!({})),
        _ => JsonRpcResponse::error(
            id,
            METHOD_NOT_FOUND,
            format!("Unknown method: {}", req.method),
        ),
    }
}

fn handle_initialize(id: Value) -> JsonRpcResponse {
    JsonRpcResponse::success(
        id,
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": NAME,
                "version": VERSION
            }
        }),
    )
}

fn handle_tools_list(id: Value) -> JsonRpcResponse {
    let tool_defs = tools::list_tools();
    JsonRpcResponse::success(id, json!({ "tools": tool_defs }))
}

fn handle_tools_call(id: Value, params: &Value, provider: &dyn BorrowerProvider) -> JsonRpcResponse {
    let call_params: ToolCallParams = match serde_json::from_value(params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return JsonRpcResponse::error(id, INVALID_PARAMS, e.to_string());
        }
    };

    match tools::call_tool(&call_params.name, &call_params.arguments, provider) {
        Ok(result) => JsonRpcResponse::success(
            id,
            serde_json::to_value(result)
                .unwrap_or_else(|_| json!({"error": "serialization failed"})),
        ),
        Err(e) => {
            error!("{e}");
            JsonRpcResponse::error(id, INTERNAL_ERROR, e.to_string())
        }
    }
}

fn write_response<W: Write>(writer: &mut W, response: &JsonRpcResponse) -> Result<()> {
    serde_json::to_writer(&mut *writer, response).map_err(io::Error::from)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
