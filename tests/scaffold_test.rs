//! Integration tests for the scaffold sequence, driven through the
//! library API with a mock UI.

use mkpy::project::{Manager, ProjectName, ProjectSpec, Template};
use mkpy::scaffold::{build_plan, run_scaffold, EditorPolicy, RemotePolicy, ScaffoldRequest};
use mkpy::tools::tool_available;
use mkpy::ui::MockUI;
use tempfile::TempDir;

fn request(
    parent: &std::path::Path,
    template: Template,
    manager: Manager,
) -> ScaffoldRequest {
    let name = ProjectName::parse("demo").unwrap();
    let spec = ProjectSpec::new(name, parent, template, manager).unwrap();
    ScaffoldRequest {
        spec,
        quick: false,
        use_git: false,
        remote: RemotePolicy::Skip,
        editor: EditorPolicy::Skip,
        deps: Some(vec![]),
    }
}

#[test]
fn full_pip_scaffold_creates_a_usable_project() {
    // Needs a Python interpreter for the venv stage
    if !tool_available("python3") {
        eprintln!("skipping: python3 not available");
        return;
    }

    let temp = TempDir::new().unwrap();
    let req = request(temp.path(), Template::Script, Manager::Pip);
    let mut ui = MockUI::new();

    let outcome = run_scaffold(&req, &mut ui).unwrap();

    let project = temp.path().join("demo");
    assert!(project.join("main.py").exists());
    assert!(project.join("README.md").exists());
    assert!(project.join(".gitignore").exists());
    assert!(project.join("requirements.txt").exists());
    assert!(project.join(".venv").exists());

    assert!(outcome.installed.is_empty());
    assert!(!outcome.remote_created);
    assert!(!outcome.editor_opened);
}

#[test]
fn full_pip_scaffold_with_git() {
    if !tool_available("python3") || !tool_available("git") {
        eprintln!("skipping: python3 or git not available");
        return;
    }

    let temp = TempDir::new().unwrap();
    let mut req = request(temp.path(), Template::Script, Manager::Pip);
    req.use_git = true;
    let mut ui = MockUI::new();

    // Git stage degrades to a warning when commits are impossible
    // (e.g. no user.email configured), so the run always succeeds.
    let outcome = run_scaffold(&req, &mut ui).unwrap();

    let project = temp.path().join("demo");
    if outcome.git_done {
        assert!(project.join(".git").exists());
    } else {
        assert!(!ui.warnings().is_empty());
    }
}

#[test]
fn streamlit_plan_includes_secrets_and_baseline_install() {
    // Plan-level check only: actually running the streamlit scaffold
    // would install packages from the network.
    let temp = TempDir::new().unwrap();
    let req = request(temp.path(), Template::Streamlit, Manager::Pip);

    let lines = build_plan(&req).describe();

    assert!(lines.iter().any(|l| l.contains(".streamlit/secrets.toml")));
    assert!(lines.iter().any(|l| l.contains("install streamlit")));
    assert!(!temp.path().join("demo").exists());
}

#[test]
fn quick_mode_echoes_commands() {
    if !tool_available("python3") {
        eprintln!("skipping: python3 not available");
        return;
    }

    let temp = TempDir::new().unwrap();
    let mut req = request(temp.path(), Template::Script, Manager::Pip);
    req.quick = true;
    let mut ui = MockUI::new();

    run_scaffold(&req, &mut ui).unwrap();

    assert!(ui.has_command("-m venv .venv"));
}

#[test]
fn plan_matches_runner_for_pip_script() {
    let temp = TempDir::new().unwrap();
    let req = request(temp.path(), Template::Script, Manager::Pip);

    let lines = build_plan(&req).describe();

    assert!(lines.iter().any(|l| l.contains("mkdir demo")));
    assert!(lines.iter().any(|l| l.contains("write main.py")));
    assert!(lines.iter().any(|l| l.contains("venv")));
    // No git stage in this request
    assert!(!lines.iter().any(|l| l.contains("git init")));
}
