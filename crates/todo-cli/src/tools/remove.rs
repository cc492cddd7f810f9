use super::{index_arg, index_schema, not_found, TodoTool};
use todo_core::todos::Todos;

pub struct RemoveTool;

impl TodoTool for RemoveTool {
    fn name(&self) -> &str {
        "todo_remove"
    }

    fn description(&self) -> &str {
        "Delete an open TODO item from the file"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": { "index": index_schema() },
            "required": ["index"]
        })
    }

    fn call(&self, args: serde_json::Value, todos: &Todos) -> Result<serde_json::Value, String> {
        let index = index_arg(&args)?;
        match todos.remove(index).map_err(|e| e.to_string())? {
            None => Ok(not_found(index)),
            Some(item) => Ok(serde_json::json!({
                "found": true,
                "index": index,
                "removed": item.text,
            })),
        }
    }
}
