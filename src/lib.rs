//! mkpy: interactive Python project scaffolding.
//!
//! Creates a ready-to-code Python project in one command: directory
//! layout, virtual environment (pip/venv or uv), boilerplate files,
//! git repository with an initial commit, optional GitHub remote via
//! the `gh` CLI, and an optional editor launch.
//!
//! # Architecture
//!
//! - [`cli`]: argument parsing and the command dispatcher
//! - [`scaffold`]: the staged project creation sequence
//! - [`project`]: project identity (name, template, package manager)
//! - [`templates`]: generated file contents
//! - [`vcs`]: git and GitHub operations
//! - [`tools`]: PATH probes for the external tools involved
//! - [`shell`]: external command execution
//! - [`ui`]: terminal UI with a mockable [`ui::UserInterface`] trait

pub mod cli;
pub mod error;
pub mod project;
pub mod scaffold;
pub mod shell;
pub mod templates;
pub mod tools;
pub mod ui;
pub mod vcs;

pub use error::{MkpyError, Result};
