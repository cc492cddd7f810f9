use super::TodoTool;
use todo_core::todos::{Todos, DEFAULT_STATUS_LIMIT, MAX_STATUS_LIMIT};

pub struct StatusTool;

impl TodoTool for StatusTool {
    fn name(&self) -> &str {
        "todo_status"
    }

    fn description(&self) -> &str {
        "Return structured TODO status: file path, open and done counts, open item texts"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "limit": {
                    "type": "number",
                    "minimum": 1,
                    "maximum": MAX_STATUS_LIMIT,
                    "default": DEFAULT_STATUS_LIMIT
                }
            }
        })
    }

    fn call(&self, args: serde_json::Value, todos: &Todos) -> Result<serde_json::Value, String> {
        let limit = match args.get("limit") {
            None | Some(serde_json::Value::Null) => DEFAULT_STATUS_LIMIT,
            Some(v) => v
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| "limit must be a positive integer".to_string())?,
        };
        let status = todos.status(limit).map_err(|e| e.to_string())?;
        serde_json::to_value(status).map_err(|e| e.to_string())
    }
}
