use super::{index_arg, index_schema, not_found, text_arg, TodoTool};
use todo_core::todos::Todos;

pub struct EditTool;

impl TodoTool for EditTool {
    fn name(&self) -> &str {
        "todo_edit"
    }

    fn description(&self) -> &str {
        "Replace the text of an open TODO item"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "index": index_schema(),
                "text": {
                    "type": "string",
                    "description": "New item text"
                }
            },
            "required": ["index", "text"]
        })
    }

    fn call(&self, args: serde_json::Value, todos: &Todos) -> Result<serde_json::Value, String> {
        let index = index_arg(&args)?;
        let text = text_arg(&args)?;
        match todos.edit(index, text).map_err(|e| e.to_string())? {
            None => Ok(not_found(index)),
            Some(edited) => Ok(serde_json::json!({
                "found": true,
                "index": index,
                "old_text": edited.old_text,
                "new_text": edited.new_text,
            })),
        }
    }
}
