use super::TodoTool;
use todo_core::todos::Todos;

pub struct ListTool;

impl TodoTool for ListTool {
    fn name(&self) -> &str {
        "todo_list"
    }

    fn description(&self) -> &str {
        "List open TODO items with the index used by todo_done, todo_edit and todo_remove"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "additionalProperties": false,
            "properties": {}
        })
    }

    fn call(&self, _args: serde_json::Value, todos: &Todos) -> Result<serde_json::Value, String> {
        let open = todos.list().map_err(|e| e.to_string())?;
        let items: Vec<serde_json::Value> = open
            .items
            .iter()
            .enumerate()
            .map(|(i, t)| serde_json::json!({ "index": i + 1, "text": t.text }))
            .collect();
        Ok(serde_json::json!({ "total": open.total, "items": items }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::todos_at;
    use tempfile::TempDir;

    #[test]
    fn list_numbers_open_items_only() {
        let dir = TempDir::new().unwrap();
        let todos = todos_at(dir.path(), "- [x] old\n- [ ] a\n- [ ] b");
        let result = ListTool.call(serde_json::Value::Null, &todos).unwrap();
        assert_eq!(result["total"], 2);
        assert_eq!(result["items"][0]["index"], 1);
        assert_eq!(result["items"][0]["text"], "a");
        assert_eq!(result["items"][1]["text"], "b");
    }
}
