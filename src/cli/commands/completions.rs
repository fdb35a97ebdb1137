//! The `completions` command: generate shell completions.

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandOutcome};

pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _cli: &Cli, _ui: &mut dyn UserInterface) -> Result<CommandOutcome> {
        let mut command = Cli::command();
        clap_complete::generate(self.args.shell, &mut command, "mkpy", &mut std::io::stdout());
        Ok(CommandOutcome::ok())
    }
}
