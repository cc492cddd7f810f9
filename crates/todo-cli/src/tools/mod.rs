use serde_json::Value;
use todo_core::todos::Todos;

pub mod add;
pub mod done;
pub mod edit;
pub mod list;
pub mod remove;
pub mod status;

pub trait TodoTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn schema(&self) -> Value;
    fn call(&self, args: Value, todos: &Todos) -> Result<Value, String>;
}

pub fn all_tools() -> Vec<Box<dyn TodoTool>> {
    vec![
        Box::new(status::StatusTool),
        Box::new(list::ListTool),
        Box::new(add::AddTool),
        Box::new(done::DoneTool),
        Box::new(edit::EditTool),
        Box::new(remove::RemoveTool),
    ]
}

// ---------------------------------------------------------------------------
// Argument helpers
// ---------------------------------------------------------------------------

/// Required 1-based `index` argument.
fn index_arg(args: &Value) -> Result<usize, String> {
    let index = args["index"]
        .as_u64()
        .ok_or_else(|| "missing required argument: index (positive integer)".to_string())?;
    if index < 1 {
        return Err("index must be 1 or greater (see todo_list)".to_string());
    }
    usize::try_from(index).map_err(|e| e.to_string())
}

/// Required, non-blank `text` argument.
fn text_arg(args: &Value) -> Result<&str, String> {
    args["text"]
        .as_str()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| "missing required argument: text".to_string())
}

fn not_found(index: usize) -> Value {
    serde_json::json!({
        "found": false,
        "index": index,
        "message": format!("No open TODO at index {index}."),
    })
}

fn index_schema() -> Value {
    serde_json::json!({
        "type": "integer",
        "minimum": 1,
        "description": "1-based position among open items, as returned by todo_list"
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;
    use todo_core::store::FileStore;
    use todo_core::todos::Todos;

    pub fn todos_at(dir: &Path, md: &str) -> Todos {
        let path = dir.join("TODO.md");
        std::fs::write(&path, md).unwrap();
        Todos::new(Box::new(FileStore::new(path)))
    }

    pub fn read(dir: &Path) -> String {
        std::fs::read_to_string(dir.join("TODO.md")).unwrap()
    }
}
