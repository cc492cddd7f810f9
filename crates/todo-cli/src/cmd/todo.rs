use crate::output::print_json;
use anyhow::Context;
use todo_core::todos::Todos;

pub fn list(todos: &Todos, json: bool) -> anyhow::Result<()> {
    let open = todos.list().context("failed to read todo file")?;

    if json {
        let items: Vec<_> = open
            .items
            .iter()
            .enumerate()
            .map(|(i, t)| serde_json::json!({ "index": i + 1, "text": t.text }))
            .collect();
        print_json(&serde_json::json!({ "total": open.total, "items": items }))?;
        return Ok(());
    }

    if open.items.is_empty() {
        println!("No open TODOs.");
        return Ok(());
    }
    println!("Open TODOs ({}):", open.total);
    for (i, t) in open.items.iter().enumerate() {
        println!("{}. {}", i + 1, t.text);
    }
    Ok(())
}

pub fn add(todos: &Todos, text: &str, json: bool) -> anyhow::Result<()> {
    let text = todos.add(text).context("failed to add todo")?;

    if json {
        print_json(&serde_json::json!({ "added": text }))?;
    } else {
        println!("Added TODO: {text}");
    }
    Ok(())
}

pub fn done(todos: &Todos, index: usize, json: bool) -> anyhow::Result<()> {
    let item = todos.done(index).context("failed to mark todo done")?;

    match (item, json) {
        (None, _) => not_found(index, json),
        (Some(item), true) => print_json(&serde_json::json!({
            "index": index,
            "found": true,
            "text": item.text,
            "done": true,
        })),
        (Some(item), false) => {
            println!("Done: {}", item.text);
            Ok(())
        }
    }
}

pub fn edit(todos: &Todos, index: usize, text: &str, json: bool) -> anyhow::Result<()> {
    let edited = todos.edit(index, text).context("failed to edit todo")?;

    match (edited, json) {
        (None, _) => not_found(index, json),
        (Some(edited), true) => print_json(&serde_json::json!({
            "index": index,
            "found": true,
            "old_text": edited.old_text,
            "new_text": edited.new_text,
        })),
        (Some(edited), false) => {
            println!(
                "Edited TODO #{index}: \"{}\" -> \"{}\"",
                edited.old_text, edited.new_text
            );
            Ok(())
        }
    }
}

pub fn remove(todos: &Todos, index: usize, json: bool) -> anyhow::Result<()> {
    let item = todos.remove(index).context("failed to remove todo")?;

    match (item, json) {
        (None, _) => not_found(index, json),
        (Some(item), true) => print_json(&serde_json::json!({
            "index": index,
            "found": true,
            "removed": item.text,
        })),
        (Some(item), false) => {
            println!("Removed TODO: {}", item.text);
            Ok(())
        }
    }
}

/// A missing index is a normal answer, not a failure.
fn not_found(index: usize, json: bool) -> anyhow::Result<()> {
    if json {
        print_json(&serde_json::json!({ "index": index, "found": false }))?;
    } else {
        println!("No open TODO at index {index}.");
    }
    Ok(())
}
