use crate::tools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{BufRead, Write};
use todo_core::todos::Todos;

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 protocol types
// ---------------------------------------------------------------------------

const PARSE_ERROR: i32 = -32700;
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    fn ok(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn err(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct ToolContent {
    r#type: &'static str,
    text: String,
}

#[derive(Debug, Serialize)]
struct ToolCallResult {
    content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    is_error: bool,
}

// ---------------------------------------------------------------------------
// Server loop
// ---------------------------------------------------------------------------

pub fn run(todos: &Todos) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let tools = tools::all_tools();

    if todos.ensure()? {
        tracing::info!(file = %todos.location().display(), "created todo file");
    }
    tracing::info!(file = %todos.location().display(), tools = tools.len(), "mcp server ready");

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(response) = handle_line(&line, &tools, todos) else {
            continue;
        };
        let mut out = stdout.lock();
        serde_json::to_writer(&mut out, &response)?;
        writeln!(out)?;
        out.flush()?;
    }

    tracing::info!("stdin closed, mcp server exiting");
    Ok(())
}

/// Decode one input line. Blank lines and notifications produce no response.
pub fn handle_line(
    line: &str,
    tools: &[Box<dyn tools::TodoTool>],
    todos: &Todos,
) -> Option<JsonRpcResponse> {
    if line.trim().is_empty() {
        return None;
    }

    let raw: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => return Some(JsonRpcResponse::err(None, PARSE_ERROR, format!("parse error: {e}"))),
    };

    // Notifications have no "id" key; no response
    if !raw
        .as_object()
        .map(|o| o.contains_key("id"))
        .unwrap_or(false)
    {
        return None;
    }

    match serde_json::from_value::<JsonRpcRequest>(raw) {
        Ok(request) => Some(handle_request(&request, tools, todos)),
        Err(e) => Some(JsonRpcResponse::err(
            None,
            INVALID_REQUEST,
            format!("invalid request: {e}"),
        )),
    }
}

// ---------------------------------------------------------------------------
// Request dispatch
// ---------------------------------------------------------------------------

pub fn handle_request(
    req: &JsonRpcRequest,
    tools: &[Box<dyn tools::TodoTool>],
    todos: &Todos,
) -> JsonRpcResponse {
    let id = req.id.clone();
    match req.method.as_str() {
        "initialize" => JsonRpcResponse::ok(
            id,
            serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "todo",
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),

        "tools/list" => {
            let tool_list: Vec<Value> = tools
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "name": t.name(),
                        "description": t.description(),
                        "inputSchema": t.schema()
                    })
                })
                .collect();
            JsonRpcResponse::ok(id, serde_json::json!({ "tools": tool_list }))
        }

        "tools/call" => {
            let Some(params) = &req.params else {
                return JsonRpcResponse::err(id, INVALID_PARAMS, "missing params");
            };
            let Some(tool_name) = params["name"].as_str() else {
                return JsonRpcResponse::err(id, INVALID_PARAMS, "missing tool name in params");
            };
            let Some(tool) = tools.iter().find(|t| t.name() == tool_name) else {
                return JsonRpcResponse::err(
                    id,
                    METHOD_NOT_FOUND,
                    format!("tool not found: {tool_name}"),
                );
            };

            let args = params.get("arguments").cloned().unwrap_or(Value::Null);
            let (text, is_error) = match tool.call(args, todos) {
                Ok(v) => (
                    serde_json::to_string_pretty(&v)
                        .unwrap_or_else(|e| format!("serialization error: {e}")),
                    false,
                ),
                Err(e) => {
                    tracing::debug!(tool = tool_name, error = %e, "tool call failed");
                    (e, true)
                }
            };

            let call_result = ToolCallResult {
                content: vec![ToolContent {
                    r#type: "text",
                    text,
                }],
                is_error,
            };
            JsonRpcResponse::ok(
                id,
                serde_json::to_value(&call_result)
                    .unwrap_or_else(|e| serde_json::json!({"error": e.to_string()})),
            )
        }

        other => JsonRpcResponse::err(id, METHOD_NOT_FOUND, format!("method not found: {other}")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
