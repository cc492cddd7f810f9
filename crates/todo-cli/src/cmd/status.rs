use crate::output::print_json;
use anyhow::Context;
use todo_core::todos::Todos;

pub fn run(todos: &Todos, limit: usize, json: bool) -> anyhow::Result<()> {
    let status = todos.status(limit).context("failed to read todo status")?;

    if json {
        print_json(&status)?;
        return Ok(());
    }

    println!("File:  {}", status.todo_file.display());
    println!("Open:  {}", status.open_count);
    println!("Done:  {}", status.done_count);
    for (i, text) in status.open.iter().enumerate() {
        println!("  {}. {}", i + 1, text);
    }
    Ok(())
}
