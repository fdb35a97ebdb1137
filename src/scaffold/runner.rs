//! Scaffold execution.
//!
//! Stages run in a fixed order: layout, environment, dependencies,
//! git, GitHub remote, editor. Layout and environment failures abort
//! with the partial directory left in place for inspection; everything
//! after the environment degrades to a warning so the project is still
//! usable when git, gh or an editor is missing or broken.

use std::fs;

use tracing::{debug, warn};

use crate::error::{MkpyError, Result};
use crate::project::{python_program, Manager, Template};
use crate::shell::{display_command, execute_quiet, CommandResult};
use crate::templates;
use crate::tools::{detect_editor, git_available, github_cli_available, launch_editor};
use crate::ui::{Prompt, UserInterface};
use crate::vcs;

use super::plan::packages_for;
use super::{EditorPolicy, RemotePolicy, ScaffoldRequest};

/// What actually happened during a scaffold run.
#[derive(Debug, Default)]
pub struct ScaffoldOutcome {
    /// Packages that were installed (or added, for uv).
    pub installed: Vec<String>,

    /// Whether a git repository was initialized and committed.
    pub git_done: bool,

    /// Whether a GitHub remote was created and pushed.
    pub remote_created: bool,

    /// Whether an editor was launched.
    pub editor_opened: bool,
}

/// Run a scaffold request to completion.
pub fn run_scaffold(
    request: &ScaffoldRequest,
    ui: &mut dyn UserInterface,
) -> Result<ScaffoldOutcome> {
    let echo = request.quick || ui.output_mode().shows_commands();
    let mut outcome = ScaffoldOutcome::default();

    create_layout(request, ui, echo)?;
    create_environment(request, ui, echo)?;
    install_dependencies(request, ui, echo, &mut outcome)?;

    if request.use_git {
        run_git_stage(request, ui, echo, &mut outcome);
        run_remote_stage(request, ui, echo, &mut outcome)?;
    } else {
        ui.message("Skipping git initialization");
    }

    run_editor_stage(request, ui, echo, &mut outcome)?;

    Ok(outcome)
}

/// Echo a command line when the mode calls for it, then run it.
fn run_command(
    ui: &mut dyn UserInterface,
    echo: bool,
    program: &str,
    args: &[&str],
    cwd: &std::path::Path,
) -> Result<CommandResult> {
    let command_line = display_command(program, args);
    if echo {
        ui.show_command(&command_line);
    }
    debug!(command = %command_line, "running");
    execute_quiet(program, args, Some(cwd))
}

fn stage_err(stage: &str, result: &CommandResult) -> MkpyError {
    MkpyError::StageFailed {
        stage: stage.to_string(),
        message: result
            .failure_detail()
            .unwrap_or("command exited with an error")
            .to_string(),
    }
}

/// Stage 1: project directory and boilerplate files.
fn create_layout(request: &ScaffoldRequest, ui: &mut dyn UserInterface, echo: bool) -> Result<()> {
    let spec = &request.spec;
    let mut spinner = ui.start_spinner("Creating project layout");

    // uv init lays down the directory, pyproject.toml and a starter
    // main.py; everything else gets the directory made by hand.
    if spec.manager == Manager::Uv && spec.template == Template::Script {
        spinner.set_message("Running uv init");
        let parent = spec.path.parent().unwrap_or(std::path::Path::new("."));
        let result = run_command(ui, echo, "uv", &["init", spec.name.as_str()], parent)?;
        if !result.success {
            spinner.finish_error("uv init failed");
            return Err(stage_err("layout", &result));
        }
    } else {
        fs::create_dir_all(&spec.path)?;
        if spec.manager == Manager::Uv {
            // streamlit + uv: pyproject written by hand so the entry
            // point stays app.py instead of uv's main.py
            fs::write(
                spec.path.join("pyproject.toml"),
                templates::pyproject(spec.name.as_str()),
            )?;
        } else {
            fs::write(
                spec.path.join("requirements.txt"),
                templates::requirements(&[]),
            )?;
        }
    }

    spinner.set_message("Writing boilerplate files");
    fs::write(
        spec.path.join(spec.template.starter_file()),
        templates::starter(spec.template),
    )?;
    fs::write(spec.path.join("README.md"), templates::readme(spec))?;
    fs::write(
        spec.path.join(".gitignore"),
        templates::gitignore(spec.template, spec.manager),
    )?;

    if spec.template == Template::Streamlit {
        let streamlit_dir = spec.path.join(".streamlit");
        fs::create_dir_all(&streamlit_dir)?;
        fs::write(
            streamlit_dir.join("secrets.toml"),
            templates::streamlit_secrets(),
        )?;
    }

    spinner.finish_success("Project layout created");
    Ok(())
}

/// Stage 2: virtual environment (pip only; uv provisions during sync).
fn create_environment(
    request: &ScaffoldRequest,
    ui: &mut dyn UserInterface,
    echo: bool,
) -> Result<()> {
    let spec = &request.spec;
    if spec.manager != Manager::Pip {
        return Ok(());
    }

    let mut spinner = ui.start_spinner("Creating virtual environment");
    let result = run_command(
        ui,
        echo,
        python_program(),
        &["-m", "venv", ".venv"],
        &spec.path,
    )?;
    if !result.success {
        spinner.finish_error("Failed to create virtual environment");
        return Err(stage_err("environment", &result));
    }

    spinner.finish_success("Virtual environment created");
    Ok(())
}

/// Resolve the packages to install, prompting when the request left
/// them open and the session is interactive.
fn resolve_packages(request: &ScaffoldRequest, ui: &mut dyn UserInterface) -> Result<Vec<String>> {
    if request.deps.is_some() || request.quick || !ui.is_interactive() {
        return Ok(packages_for(request));
    }

    let wants = ui
        .prompt(&Prompt::confirm(
            "add_deps",
            "Add extra dependencies?",
            false,
        ))?
        .as_bool()
        .unwrap_or(false);

    let mut resolved = request.clone();
    if wants {
        let raw = ui
            .prompt(&Prompt::input(
                "deps",
                "Packages (space-separated)",
                Some(""),
            ))?
            .as_string();
        resolved.deps = Some(raw.split_whitespace().map(String::from).collect());
    } else {
        resolved.deps = Some(vec![]);
    }

    Ok(packages_for(&resolved))
}

/// Stage 3: install or add dependencies, then (uv) sync.
fn install_dependencies(
    request: &ScaffoldRequest,
    ui: &mut dyn UserInterface,
    echo: bool,
    outcome: &mut ScaffoldOutcome,
) -> Result<()> {
    let spec = &request.spec;
    let packages = resolve_packages(request, ui)?;

    for package in &packages {
        let mut spinner = ui.start_spinner(&format!("Installing {package}"));

        let result = match spec.manager {
            Manager::Pip => {
                let pip = Manager::venv_tool_path(&spec.path, "pip");
                run_command(
                    ui,
                    echo,
                    &pip.to_string_lossy(),
                    &["install", package],
                    &spec.path,
                )?
            }
            Manager::Uv => run_command(ui, echo, "uv", &["add", package], &spec.path)?,
        };

        if result.success {
            spinner.finish_success(&format!("{package} installed"));
            outcome.installed.push(package.clone());
        } else {
            // The template cannot run without its baseline package;
            // extras just get reported.
            let baseline = spec.template.baseline_package() == Some(package.as_str());
            spinner.finish_error(&format!("Failed to install {package}"));
            if baseline {
                return Err(stage_err("dependencies", &result));
            }
            warn!(package, "package install failed");
            ui.warning(&format!("Skipping {package}, install it manually later"));
        }
    }

    match spec.manager {
        Manager::Pip => {
            // Only packages that actually installed land in the manifest.
            let pinned: Vec<String> = outcome
                .installed
                .iter()
                .map(|p| {
                    if p == "streamlit" {
                        "streamlit>=1.30.0".to_string()
                    } else {
                        p.clone()
                    }
                })
                .collect();
            fs::write(
                spec.path.join("requirements.txt"),
                templates::requirements(&pinned),
            )?;
        }
        Manager::Uv => {
            let mut spinner = ui.start_spinner("Syncing environment");
            let result = run_command(ui, echo, "uv", &["sync"], &spec.path)?;
            if !result.success {
                spinner.finish_error("uv sync failed");
                return Err(stage_err("environment", &result));
            }
            spinner.finish_success("Environment synced");
        }
    }

    Ok(())
}

/// Stage 4: git init + initial commit. Degrades to a warning.
fn run_git_stage(
    request: &ScaffoldRequest,
    ui: &mut dyn UserInterface,
    echo: bool,
    outcome: &mut ScaffoldOutcome,
) {
    let spec = &request.spec;

    if !git_available() {
        ui.warning("git is not installed, skipping repository setup");
        return;
    }

    let mut spinner = ui.start_spinner("Initializing git repository");

    type GitStep = fn(&std::path::Path) -> Result<CommandResult>;
    let steps: [(&str, GitStep); 3] = [
        ("git init", vcs::init_repo),
        ("git add .", vcs::stage_all),
        ("git commit -m \"Initial commit\"", vcs::initial_commit),
    ];

    for (label, step) in steps {
        if echo {
            ui.show_command(label);
        }
        debug!(command = label, "running");
        match step(&spec.path) {
            Ok(result) if result.success => {}
            Ok(result) => {
                let detail = result.failure_detail().unwrap_or("git command failed");
                spinner.finish_error("Git setup incomplete");
                ui.warning(&format!("Git setup failed: {detail}"));
                return;
            }
            Err(err) => {
                spinner.finish_error("Git setup incomplete");
                ui.warning(&format!("Git setup failed: {err}"));
                return;
            }
        }
    }

    spinner.finish_success("Git repository initialized");
    outcome.git_done = true;
}

/// Stage 5: GitHub remote via gh. Degrades to a warning.
fn run_remote_stage(
    request: &ScaffoldRequest,
    ui: &mut dyn UserInterface,
    echo: bool,
    outcome: &mut ScaffoldOutcome,
) -> Result<()> {
    let spec = &request.spec;

    if matches!(request.remote, RemotePolicy::Skip) {
        return Ok(());
    }

    // No local repo means nothing to push
    if !outcome.git_done {
        return Ok(());
    }

    if !github_cli_available() {
        if matches!(request.remote, RemotePolicy::Create(_)) {
            ui.warning("GitHub CLI (gh) is not installed, skipping remote");
        }
        return Ok(());
    }

    let visibility = match request.remote {
        RemotePolicy::Create(v) => v,
        _ => spec.template.default_visibility(),
    };

    if matches!(request.remote, RemotePolicy::Ask) {
        let confirmed = ui
            .prompt(&Prompt::confirm(
                "create_remote",
                &format!("Create a {} GitHub repository?", visibility.label()),
                false,
            ))?
            .as_bool()
            .unwrap_or(false);
        if !confirmed {
            return Ok(());
        }
    }

    if echo {
        ui.show_command(&display_command(
            "gh",
            &[
                "repo",
                "create",
                spec.name.as_str(),
                visibility.flag(),
                "--source",
                ".",
                "--remote",
                "origin",
                "--push",
            ],
        ));
    }

    let mut spinner = ui.start_spinner("Creating GitHub repository");
    match vcs::create_remote(spec.name.as_str(), &spec.path, visibility) {
        Ok(result) if result.success => {
            spinner.finish_success("GitHub repository created and pushed");
            outcome.remote_created = true;
        }
        Ok(result) => {
            let detail = result.failure_detail().unwrap_or("gh repo create failed");
            spinner.finish_error("Could not create GitHub repository");
            ui.warning(&format!("GitHub repository not created: {detail}"));
        }
        Err(err) => {
            spinner.finish_error("Could not create GitHub repository");
            ui.warning(&format!("GitHub repository not created: {err}"));
        }
    }

    Ok(())
}

/// Stage 6: editor launch. Degrades to a warning.
fn run_editor_stage(
    request: &ScaffoldRequest,
    ui: &mut dyn UserInterface,
    echo: bool,
    outcome: &mut ScaffoldOutcome,
) -> Result<()> {
    if matches!(request.editor, EditorPolicy::Skip) {
        return Ok(());
    }

    let Some(editor) = detect_editor() else {
        if matches!(request.editor, EditorPolicy::Open) {
            ui.warning("No supported editor found (looked for cursor, code)");
        }
        return Ok(());
    };

    if matches!(request.editor, EditorPolicy::Ask) {
        let confirmed = ui
            .prompt(&Prompt::confirm(
                "open_editor",
                &format!("Open the project in {}?", editor.label()),
                false,
            ))?
            .as_bool()
            .unwrap_or(false);
        if !confirmed {
            return Ok(());
        }
    }

    if echo {
        ui.show_command(&format!(
            "{} {}",
            editor.program(),
            request.spec.path.display()
        ));
    }

    match launch_editor(editor, &request.spec.path) {
        Ok(()) => {
            ui.success(&format!("Opening in {}", editor.label()));
            outcome.editor_opened = true;
        }
        Err(err) => {
            warn!(%err, "editor launch failed");
            ui.warning(&format!("Could not open {}: {err}", editor.label()));
        }
    }

    Ok(())
}
