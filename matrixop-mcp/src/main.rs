//! Matrixop MCP Server
//!
//! JSON-RPC 2.0 over stdio, one message per line.
//!
//! Tools:
//! - matrix_op: Run an operation over one or two selected matrix texts
//! - list_operations: List available operations
//! - help: Usage for one operation or all
//! - matrix_template: Zero-filled matrix for a shape like `3x2`

use matrixop::{Matrixop, Outcome, DispatchError, PRECISION_ENV};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "matrixop";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn invalid_params(message: impl Into<String>) -> Self {
        Self { code: -32602, message: message.into(), data: None }
    }
}

fn init_logging() {
    // stdout carries the protocol, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    init_logging();

    let engine = Matrixop::from_env();

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Matrixop MCP server started");
    info!(precision = engine.config().precision, env = PRECISION_ENV, "engine configured");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let Some(response) = handle_line(&engine, &line) else {
                    continue;
                };

                let response_json = match serde_json::to_string(&response) {
                    Ok(s) => s,
                    Err(e) => {
                        error!(error = %e, "failed to serialize response");
                        continue;
                    }
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response_json).and_then(|_| stdout.flush()) {
                    error!(error = %e, "failed to write response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    info!("server shutting down");
}

/// Handle one input line. `None` means nothing should be written back.
fn handle_line(engine: &Matrixop, line: &str) -> Option<McpResponse> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let request: McpRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "unparseable request");
            return Some(McpResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(McpError {
                    code: -32700,
                    message: format!("Parse error: {}", e),
                    data: None,
                }),
            });
        }
    };

    debug!(method = %request.method, "processing request");
    let response = handle_request(engine, &request);

    // Notifications (no id) should NOT receive a response
    if request.id.is_none() {
        debug!(method = %request.method, "notification processed");
        return None;
    }
    Some(response)
}

fn handle_request(engine: &Matrixop, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(engine, &request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(engine, &request.params),

        _ => Err(McpError {
            code: -32601,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: None,
            error: Some(e),
        },
    }
}

fn handle_initialize(engine: &Matrixop, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Dense matrix calculator: add, mult, scale, transpose, inv, rref, format"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "config": engine.config(),
        "instructions": "Matrices are plain text: one row per line, entries separated by whitespace. Pass binary operations two selections; the result replaces the selection named by 'target' and the ones in 'cleared' are erased."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "matrix_op",
                "description": "Run a matrix operation over selected matrix texts. Returns the aligned result and which selection it replaces.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "operation": {
                            "type": "string",
                            "description": "Operation name",
                            "enum": ["add", "mult", "scale", "transpose", "inv", "rref", "format"]
                        },
                        "selections": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Matrix texts: rows on separate lines, entries separated by whitespace"
                        },
                        "precision": {
                            "type": "integer",
                            "description": "Decimal places for non-integral values (default: 4)"
                        }
                    },
                    "required": ["operation", "selections"]
                }
            },
            {
                "name": "list_operations",
                "description": "List available operations with the number of selections each needs.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "help",
                "description": "Get usage for an operation, or for all operations.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Operation name. Omit for all."
                        }
                    }
                }
            },
            {
                "name": "matrix_template",
                "description": "Zero-filled matrix of the given shape, ready to edit.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "shape": {
                            "type": "string",
                            "description": "Rows x cols, e.g. 3x2"
                        }
                    },
                    "required": ["shape"]
                }
            }
        ]
    }))
}

fn handle_tool_call(engine: &Matrixop, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "matrix_op" => tool_matrix_op(engine, args),
        "list_operations" => tool_list_operations(engine),
        "help" => tool_help(engine, args),
        "matrix_template" => tool_matrix_template(engine, args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn tool_matrix_op(engine: &Matrixop, args: JsonValue) -> Result<JsonValue, McpError> {
    let operation = args.get("operation")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing operation argument"))?;

    let selections: Vec<String> = args.get("selections")
        .and_then(|v| v.as_array())
        .ok_or_else(|| McpError::invalid_params("Missing selections argument"))?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect::<Option<_>>()
        .ok_or_else(|| McpError::invalid_params("Every selection must be a string"))?;

    let engine = match args.get("precision") {
        None | Some(JsonValue::Null) => *engine,
        Some(v) => {
            let p = v.as_u64()
                .and_then(|p| u32::try_from(p).ok())
                .ok_or_else(|| McpError::invalid_params("precision must be a non-negative integer"))?;
            engine.with_precision(p)
        }
    };

    Ok(match engine.run(operation, &selections) {
        Ok(outcome) => outcome_to_json(&outcome),
        Err(e) => failure_to_json(&e),
    })
}

fn tool_list_operations(engine: &Matrixop) -> Result<JsonValue, McpError> {
    let operations = engine.operations();
    let text = operations.iter()
        .map(|m| format!("{} ({}): {}", m.name, m.selections, m.description))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "operations": operations
    }))
}

fn tool_help(engine: &Matrixop, args: JsonValue) -> Result<JsonValue, McpError> {
    let name = args.get("name").and_then(|v| v.as_str());
    Ok(match engine.help(name) {
        Ok(text) => json!({
            "content": [{ "type": "text", "text": text }],
            "isError": false
        }),
        Err(e) => failure_to_json(&e),
    })
}

fn tool_matrix_template(engine: &Matrixop, args: JsonValue) -> Result<JsonValue, McpError> {
    let shape = args.get("shape")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing shape argument"))?;

    Ok(match engine.template(shape) {
        Ok(text) => json!({
            "content": [{ "type": "text", "text": text }],
            "isError": false
        }),
        Err(e) => failure_to_json(&e),
    })
}

fn outcome_to_json(outcome: &Outcome) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": outcome.text }],
        "operation": outcome.operation,
        "target": outcome.target,
        "cleared": outcome.cleared,
        "rows": outcome.dims.rows,
        "cols": outcome.dims.cols,
        "isError": false
    })
}

fn failure_to_json(err: &DispatchError) -> JsonValue {
    let report = err.to_report();
    json!({
        "content": [{ "type": "text", "text": report.to_string() }],
        "error": report,
        "isError": true
    })
}
