//! CLI command implementations.

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod new;

pub use dispatcher::{Command, CommandDispatcher, CommandOutcome};
