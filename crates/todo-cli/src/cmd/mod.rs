pub mod config;
pub mod mcp;
pub mod status;
pub mod todo;
