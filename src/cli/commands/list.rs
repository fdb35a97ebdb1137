//! The `list` command: show templates and package managers.

use serde::Serialize;

use crate::cli::args::{Cli, ListArgs};
use crate::error::Result;
use crate::project::{Manager, Template};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandOutcome};

pub struct ListCommand {
    args: ListArgs,
}

#[derive(Debug, Serialize)]
struct TemplateInfo {
    name: &'static str,
    description: &'static str,
    starter_file: &'static str,
    default_github_visibility: &'static str,
}

#[derive(Debug, Serialize)]
struct ManagerInfo {
    name: &'static str,
    description: &'static str,
    manifest: &'static str,
}

#[derive(Debug, Serialize)]
struct Listing {
    templates: Vec<TemplateInfo>,
    managers: Vec<ManagerInfo>,
}

fn listing() -> Listing {
    Listing {
        templates: vec![
            TemplateInfo {
                name: "script",
                description: Template::Script.label(),
                starter_file: Template::Script.starter_file(),
                default_github_visibility: Template::Script.default_visibility().label(),
            },
            TemplateInfo {
                name: "streamlit",
                description: Template::Streamlit.label(),
                starter_file: Template::Streamlit.starter_file(),
                default_github_visibility: Template::Streamlit.default_visibility().label(),
            },
        ],
        managers: vec![
            ManagerInfo {
                name: "pip",
                description: Manager::Pip.label(),
                manifest: Manager::Pip.manifest(),
            },
            ManagerInfo {
                name: "uv",
                description: Manager::Uv.label(),
                manifest: Manager::Uv.manifest(),
            },
        ],
    }
}

impl ListCommand {
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, _cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandOutcome> {
        let listing = listing();

        if self.args.json {
            // Machine output goes straight to stdout, unstyled
            println!("{}", serde_json::to_string_pretty(&listing)?);
            return Ok(CommandOutcome::ok());
        }

        let template_rows: Vec<(String, String)> = listing
            .templates
            .iter()
            .map(|t| {
                (
                    t.name.to_string(),
                    format!("{} (entry point: {})", t.description, t.starter_file),
                )
            })
            .collect();
        ui.show_panel("Templates", &template_rows);

        let manager_rows: Vec<(String, String)> = listing
            .managers
            .iter()
            .map(|m| {
                (
                    m.name.to_string(),
                    format!("{} (manifest: {})", m.description, m.manifest),
                )
            })
            .collect();
        ui.show_panel("Package managers", &manager_rows);

        Ok(CommandOutcome::ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn listing_covers_both_axes() {
        let listing = listing();
        assert_eq!(listing.templates.len(), 2);
        assert_eq!(listing.managers.len(), 2);
    }

    #[test]
    fn listing_serializes_to_json() {
        let json = serde_json::to_string(&listing()).unwrap();
        assert!(json.contains("\"streamlit\""));
        assert!(json.contains("\"requirements.txt\""));
    }

    #[test]
    fn plain_listing_shows_panels() {
        let cli = Cli::parse_from(["mkpy", "list"]);
        let cmd = ListCommand::new(ListArgs::default());
        let mut ui = MockUI::new();

        let outcome = cmd.execute(&cli, &mut ui).unwrap();

        assert!(outcome.success);
        assert!(ui.has_panel("Templates"));
        assert!(ui.has_panel("Package managers"));
    }
}
