//! Command-line interface for the adcraft binary.

mod commands;
mod handlers;

pub use commands::Cli;
pub use handlers::handle_command;
