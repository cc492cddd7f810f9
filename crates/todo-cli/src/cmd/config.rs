use crate::output::print_json;
use std::path::Path;
use todo_core::config::{TodoConfig, WarnLevel};

pub fn run(config_path: &Path, cfg: &TodoConfig, json: bool) -> anyhow::Result<()> {
    let warnings = cfg.validate();

    if json {
        print_json(&serde_json::json!({
            "config_file": config_path,
            "config_file_exists": config_path.exists(),
            "todo_file": cfg.todo_file_path(),
            "brain_store_path": cfg.brain_store_path(),
            "config": cfg,
            "warnings": warnings,
        }))?;
        return Ok(());
    }

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", config_path.display())
    };
    println!("Config:         {source}");
    println!("Enabled:        {}", cfg.enabled);
    println!("Todo file:      {}", cfg.todo_file_path().display());
    println!("Brain log:      {}", cfg.brain_log);
    println!("Brain store:    {}", cfg.brain_store_path().display());
    println!("Max list items: {}", cfg.max_list_items);
    println!(
        "Section header: {}",
        cfg.section_header().unwrap_or("(none)")
    );

    for w in &warnings {
        let tag = match w.level {
            WarnLevel::Warning => "warning",
            WarnLevel::Error => "error",
        };
        println!("{tag}: {}", w.message);
    }
    Ok(())
}
