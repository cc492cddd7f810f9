use super::{text_arg, TodoTool};
use todo_core::todos::Todos;

pub struct AddTool;

impl TodoTool for AddTool {
    fn name(&self) -> &str {
        "todo_add"
    }

    fn description(&self) -> &str {
        "Add an open TODO item"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Item text"
                }
            },
            "required": ["text"]
        })
    }

    fn call(&self, args: serde_json::Value, todos: &Todos) -> Result<serde_json::Value, String> {
        let text = text_arg(&args)?;
        let added = todos.add(text).map_err(|e| e.to_string())?;
        Ok(serde_json::json!({ "added": added }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{read, todos_at};
    use tempfile::TempDir;

    #[test]
    fn add_appends_after_last_item() {
        let dir = TempDir::new().unwrap();
        let todos = todos_at(dir.path(), "# TODO\n- [ ] a");
        let result = AddTool
            .call(serde_json::json!({"text": " b "}), &todos)
            .unwrap();
        assert_eq!(result["added"], "b");
        assert_eq!(read(dir.path()), "# TODO\n- [ ] a\n- [ ] b");
    }

    #[test]
    fn add_requires_text() {
        let dir = TempDir::new().unwrap();
        let todos = todos_at(dir.path(), "");
        assert!(AddTool.call(serde_json::json!({}), &todos).is_err());
        assert_eq!(read(dir.path()), "");
    }
}
