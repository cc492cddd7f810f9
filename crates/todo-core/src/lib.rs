pub mod checklist;
pub mod config;
pub mod error;
pub mod io;
pub mod memory;
pub mod paths;
pub mod store;
pub mod todos;

pub use error::{Result, TodoError};
