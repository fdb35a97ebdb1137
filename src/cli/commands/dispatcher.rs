//! Command trait and dispatch.

use crate::cli::args::{Cli, Commands, NewArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::{completions::CompletionsCommand, list::ListCommand, new::NewCommand};

/// Outcome of running a command.
#[derive(Debug, Clone, Copy)]
pub struct CommandOutcome {
    /// Whether the command completed successfully.
    pub success: bool,
    /// Process exit code.
    pub exit_code: i32,
}

impl CommandOutcome {
    /// A successful outcome.
    pub fn ok() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// A failed outcome with the given exit code.
    pub fn failed(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// A runnable CLI command.
pub trait Command {
    /// Execute the command.
    fn execute(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandOutcome>;
}

/// Routes a parsed CLI invocation to its command.
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Dispatch to the right command. A bare `mkpy` runs `new`.
    pub fn dispatch(cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandOutcome> {
        match &cli.command {
            Some(Commands::New(args)) => NewCommand::new(args.clone()).execute(cli, ui),
            Some(Commands::List(args)) => ListCommand::new(args.clone()).execute(cli, ui),
            Some(Commands::Completions(args)) => {
                CompletionsCommand::new(args.clone()).execute(cli, ui)
            }
            None => NewCommand::new(NewArgs::default()).execute(cli, ui),
        }
    }
}
