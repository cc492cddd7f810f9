mod cmd;
mod output;
mod settings;
mod tools;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_core::todos::{Todos, DEFAULT_STATUS_LIMIT, MAX_STATUS_LIMIT};

#[derive(Parser)]
#[command(
    name = "todo",
    about = "Keep a markdown TODO checklist: list, add, complete, edit, and remove items",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ~/.todo/config.yaml)
    #[arg(long, global = true, env = "TODO_CONFIG")]
    config: Option<PathBuf>,

    /// Checklist file, overriding `todo_file` from the config
    #[arg(long, global = true, env = "TODO_FILE")]
    file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List open items
    List,

    /// Add an item
    Add {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Mark an open item done (index as shown by `list`)
    Done {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        index: u32,
    },

    /// Replace the text of an open item
    Edit {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        index: u32,
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Remove an open item
    Remove {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        index: u32,
    },

    /// Show open/done counts and the first open items
    Status {
        /// Maximum number of open items to include
        #[arg(long, default_value_t = DEFAULT_STATUS_LIMIT as u32,
              value_parser = clap::value_parser!(u32).range(1..=MAX_STATUS_LIMIT as i64))]
        limit: u32,
    },

    /// Show the resolved configuration and any warnings
    Config,

    /// Run as an MCP stdio server
    Mcp,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Mcp => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = settings::resolve_config_path(cli.config.as_deref());
    let cfg = settings::load(&config_path, cli.file.as_deref())?;

    let json = cli.json;
    let todos = || Todos::from_config(&cfg);
    match cli.command {
        Commands::Config => cmd::config::run(&config_path, &cfg, json),
        Commands::List => cmd::todo::list(&todos()?, json),
        Commands::Add { text } => cmd::todo::add(&todos()?, &text.join(" "), json),
        Commands::Done { index } => cmd::todo::done(&todos()?, index as usize, json),
        Commands::Edit { index, text } => {
            cmd::todo::edit(&todos()?, index as usize, &text.join(" "), json)
        }
        Commands::Remove { index } => cmd::todo::remove(&todos()?, index as usize, json),
        Commands::Status { limit } => cmd::status::run(&todos()?, limit as usize, json),
        Commands::Mcp => cmd::mcp::run(&todos()?),
    }
}
