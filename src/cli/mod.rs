//! Command-line interface: argument parsing and commands.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, NewArgs, RemoteChoice};
pub use commands::{Command, CommandDispatcher, CommandOutcome};
