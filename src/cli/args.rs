//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::project::{Manager, Template};

/// Interactive Python project scaffolding.
#[derive(Debug, Parser)]
#[command(
    name = "mkpy",
    version,
    about = "Interactive Python project scaffolding",
    long_about = "Create a ready-to-code Python project: directory, virtual \
                  environment, boilerplate files, git repository, optional \
                  GitHub remote and editor launch."
)]
pub struct Cli {
    /// Parent directory to create the project in (defaults to the
    /// current directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Show the commands being run.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging.
    #[arg(long, global = true, hide = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project (the default when no subcommand is given).
    New(NewArgs),

    /// List available templates and package managers.
    List(ListArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

/// Arguments for `mkpy new`.
#[derive(Debug, Clone, Default, Args)]
pub struct NewArgs {
    /// Project name (prompted for when omitted).
    pub name: Option<String>,

    /// Project template.
    #[arg(short, long, value_enum)]
    pub template: Option<Template>,

    /// Package manager.
    #[arg(short, long, value_enum)]
    pub manager: Option<Manager>,

    /// Quick mode: echo commands, skip the dependency prompt, open the
    /// editor without asking.
    #[arg(short = 'Q', long)]
    pub quick: bool,

    /// Skip git initialization (implies no GitHub remote).
    #[arg(long)]
    pub no_git: bool,

    /// Create a GitHub repository with this visibility, or skip the
    /// question entirely.
    #[arg(long, value_enum, value_name = "VISIBILITY")]
    pub github: Option<RemoteChoice>,

    /// Never launch an editor.
    #[arg(long)]
    pub no_editor: bool,

    /// Extra packages to install (comma-separated or repeated).
    #[arg(long, value_delimiter = ',', value_name = "PACKAGE")]
    pub deps: Option<Vec<String>>,

    /// Show what would be done without doing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Never prompt; fail if required input is missing.
    #[arg(long)]
    pub non_interactive: bool,

    /// Answer yes to the GitHub and editor questions.
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// How `--github` maps onto remote creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RemoteChoice {
    /// Create a private repository.
    Private,
    /// Create a public repository.
    Public,
    /// Do not create a repository.
    Skip,
}

/// Arguments for `mkpy list`.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `mkpy completions`.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
