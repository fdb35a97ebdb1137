//! The `new` command: create a project.

use tracing::info;

use crate::cli::args::{Cli, NewArgs, RemoteChoice};
use crate::error::{MkpyError, Result};
use crate::project::{Manager, ProjectName, ProjectSpec, Template};
use crate::scaffold::{
    build_plan, run_scaffold, summary, EditorPolicy, RemotePolicy, ScaffoldRequest,
};
use crate::tools::{find_tool, probe_version};
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::dispatcher::{Command, CommandOutcome};

pub struct NewCommand {
    args: NewArgs,
}

impl NewCommand {
    pub fn new(args: NewArgs) -> Self {
        Self { args }
    }

    fn resolve_name(&self, ui: &mut dyn UserInterface) -> Result<ProjectName> {
        if let Some(name) = &self.args.name {
            return ProjectName::parse(name);
        }

        let raw = ui
            .prompt(&Prompt::input("project_name", "Project name", None))?
            .as_string();
        ProjectName::parse(&raw)
    }

    fn resolve_template(&self, ui: &mut dyn UserInterface) -> Result<Template> {
        if let Some(template) = self.args.template {
            return Ok(template);
        }
        if !ui.is_interactive() || self.args.quick {
            return Ok(Template::Script);
        }

        let choice = ui
            .prompt(&Prompt::select(
                "template",
                "Project template",
                vec![
                    PromptOption::new("Python script", "script"),
                    PromptOption::new("Streamlit app", "streamlit"),
                ],
                "script",
            ))?
            .as_string();

        Ok(match choice.as_str() {
            "streamlit" => Template::Streamlit,
            _ => Template::Script,
        })
    }

    fn resolve_manager(&self, ui: &mut dyn UserInterface) -> Result<Manager> {
        if let Some(manager) = self.args.manager {
            return Ok(manager);
        }
        if !ui.is_interactive() || self.args.quick {
            return Ok(Manager::Pip);
        }

        let choice = ui
            .prompt(&Prompt::select(
                "manager",
                "Package manager",
                vec![
                    PromptOption::new("pip + venv", "pip"),
                    PromptOption::new("uv", "uv"),
                ],
                "pip",
            ))?
            .as_string();

        Ok(match choice.as_str() {
            "uv" => Manager::Uv,
            _ => Manager::Pip,
        })
    }

    fn remote_policy(&self, template: Template, ui: &dyn UserInterface) -> RemotePolicy {
        if self.args.no_git {
            return RemotePolicy::Skip;
        }
        match self.args.github {
            Some(RemoteChoice::Private) => RemotePolicy::Create(crate::vcs::Visibility::Private),
            Some(RemoteChoice::Public) => RemotePolicy::Create(crate::vcs::Visibility::Public),
            Some(RemoteChoice::Skip) => RemotePolicy::Skip,
            None => {
                if self.args.yes {
                    RemotePolicy::Create(template.default_visibility())
                } else if ui.is_interactive() {
                    RemotePolicy::Ask
                } else {
                    RemotePolicy::Skip
                }
            }
        }
    }

    fn editor_policy(&self, ui: &dyn UserInterface) -> EditorPolicy {
        if self.args.no_editor {
            return EditorPolicy::Skip;
        }
        if self.args.quick || self.args.yes {
            return EditorPolicy::Open;
        }
        if ui.is_interactive() {
            EditorPolicy::Ask
        } else {
            EditorPolicy::Skip
        }
    }

    fn build_request(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<ScaffoldRequest> {
        let name = self.resolve_name(ui)?;
        let template = self.resolve_template(ui)?;
        let manager = self.resolve_manager(ui)?;

        let parent = match &cli.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let spec = ProjectSpec::new(name, &parent, template, manager)?;

        let deps = match (&self.args.deps, self.args.quick) {
            (Some(deps), _) => Some(deps.clone()),
            // Quick mode never prompts for dependencies
            (None, true) => Some(vec![]),
            (None, false) => None,
        };

        Ok(ScaffoldRequest {
            remote: self.remote_policy(template, ui),
            editor: self.editor_policy(ui),
            quick: self.args.quick,
            use_git: !self.args.no_git,
            deps,
            spec,
        })
    }

    fn preflight(&self, request: &ScaffoldRequest) -> Result<()> {
        let manager = request.spec.manager;
        if find_tool(manager.program()).is_none() {
            return Err(MkpyError::ToolMissing {
                tool: manager.program().to_string(),
                hint: manager.install_hint().to_string(),
            });
        }
        if let Some(version) = probe_version(manager.program()) {
            info!(tool = manager.program(), %version, "package manager found");
        }
        Ok(())
    }
}

impl Command for NewCommand {
    fn execute(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandOutcome> {
        ui.show_header("Python project scaffolding");

        let request = self.build_request(cli, ui)?;
        info!(
            name = %request.spec.name,
            template = ?request.spec.template,
            manager = ?request.spec.manager,
            "creating project"
        );

        if self.args.dry_run {
            ui.message("Dry run, nothing will be created:");
            for line in build_plan(&request).describe() {
                ui.message(&line);
            }
            return Ok(CommandOutcome::ok());
        }

        self.preflight(&request)?;

        let outcome = run_scaffold(&request, ui)?;
        if !outcome.installed.is_empty() {
            info!(packages = ?outcome.installed, "installed packages");
        }

        summary::show_summary(ui, &request.spec);
        ui.success(&format!("Project {} is ready!", request.spec.name));

        Ok(CommandOutcome::ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Cli;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli_for(dir: &std::path::Path) -> Cli {
        Cli::parse_from(["mkpy", "--dir", &dir.to_string_lossy(), "new"])
    }

    fn new_args(extra: &[&str]) -> NewArgs {
        let mut argv = vec!["mkpy", "new"];
        argv.extend_from_slice(extra);
        let cli = Cli::parse_from(argv);
        match cli.command {
            Some(crate::cli::args::Commands::New(args)) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn resolves_name_from_args() {
        let temp = TempDir::new().unwrap();
        let cli = cli_for(temp.path());
        let cmd = NewCommand::new(new_args(&["demo"]));
        let mut ui = MockUI::new();

        let request = cmd.build_request(&cli, &mut ui).unwrap();
        assert_eq!(request.spec.name.as_str(), "demo");
    }

    #[test]
    fn prompts_for_missing_name() {
        let temp = TempDir::new().unwrap();
        let cli = cli_for(temp.path());
        let cmd = NewCommand::new(new_args(&[]));
        let mut ui = MockUI::new();
        ui.set_prompt_response("project_name", "prompted");
        ui.set_prompt_response("template", "script");
        ui.set_prompt_response("manager", "pip");

        let request = cmd.build_request(&cli, &mut ui).unwrap();
        assert_eq!(request.spec.name.as_str(), "prompted");
        assert!(ui.prompts_shown().contains(&"project_name".to_string()));
    }

    #[test]
    fn quick_mode_uses_defaults_without_prompting() {
        let temp = TempDir::new().unwrap();
        let cli = cli_for(temp.path());
        let cmd = NewCommand::new(new_args(&["demo", "--quick"]));
        let mut ui = MockUI::new();

        let request = cmd.build_request(&cli, &mut ui).unwrap();

        assert_eq!(request.spec.template, Template::Script);
        assert_eq!(request.spec.manager, Manager::Pip);
        assert_eq!(request.deps, Some(vec![]));
        assert_eq!(request.editor, EditorPolicy::Open);
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn no_git_forces_remote_skip() {
        let temp = TempDir::new().unwrap();
        let cli = cli_for(temp.path());
        let cmd = NewCommand::new(new_args(&["demo", "--no-git", "--github", "public"]));
        let mut ui = MockUI::new();

        let request = cmd.build_request(&cli, &mut ui).unwrap();

        assert!(!request.use_git);
        assert_eq!(request.remote, RemotePolicy::Skip);
    }

    #[test]
    fn github_flag_overrides_default_visibility() {
        let temp = TempDir::new().unwrap();
        let cli = cli_for(temp.path());
        let cmd = NewCommand::new(new_args(&[
            "demo",
            "--template",
            "streamlit",
            "--github",
            "private",
        ]));
        let mut ui = MockUI::new();

        let request = cmd.build_request(&cli, &mut ui).unwrap();

        assert_eq!(
            request.remote,
            RemotePolicy::Create(crate::vcs::Visibility::Private)
        );
    }

    #[test]
    fn non_interactive_skips_optional_stages() {
        let temp = TempDir::new().unwrap();
        let cli = cli_for(temp.path());
        let cmd = NewCommand::new(new_args(&["demo"]));
        let mut ui = MockUI::new();
        ui.set_interactive(false);

        let request = cmd.build_request(&cli, &mut ui).unwrap();

        assert_eq!(request.remote, RemotePolicy::Skip);
        assert_eq!(request.editor, EditorPolicy::Skip);
        assert_eq!(request.spec.template, Template::Script);
    }

    #[test]
    fn yes_flag_answers_the_confirmations() {
        let temp = TempDir::new().unwrap();
        let cli = cli_for(temp.path());
        let cmd = NewCommand::new(new_args(&["demo", "--yes"]));
        let mut ui = MockUI::new();
        ui.set_interactive(false);

        let request = cmd.build_request(&cli, &mut ui).unwrap();

        assert_eq!(
            request.remote,
            RemotePolicy::Create(crate::vcs::Visibility::Private)
        );
        assert_eq!(request.editor, EditorPolicy::Open);
    }

    #[test]
    fn existing_directory_is_rejected() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("demo")).unwrap();
        let cli = cli_for(temp.path());
        let cmd = NewCommand::new(new_args(&["demo"]));
        let mut ui = MockUI::new();

        let err = cmd.build_request(&cli, &mut ui).unwrap_err();
        assert!(matches!(err, MkpyError::ProjectExists { .. }));
    }

    #[test]
    fn dry_run_describes_without_creating() {
        let temp = TempDir::new().unwrap();
        let cli = cli_for(temp.path());
        let cmd = NewCommand::new(new_args(&["demo", "--dry-run", "--no-editor"]));
        let mut ui = MockUI::new();

        let outcome = cmd.execute(&cli, &mut ui).unwrap();

        assert!(outcome.success);
        assert!(!temp.path().join("demo").exists());
        assert!(ui.has_message("Dry run"));
        assert!(ui.has_message("git init"));
    }
}
