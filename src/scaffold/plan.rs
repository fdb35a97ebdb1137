//! Scaffold planning.
//!
//! The plan is a display-oriented view of what a request will do,
//! rendered verbatim by `--dry-run` and used for stage titles.

use crate::project::{python_program, Manager, Template};
use crate::shell::display_command;
use crate::tools::detect_editor;
use crate::vcs::Visibility;

use super::{EditorPolicy, RemotePolicy, ScaffoldRequest};

/// One step of the scaffold, with the commands (or file writes) it
/// performs.
#[derive(Debug, Clone)]
pub struct PlanStep {
    /// Short stage title.
    pub title: String,
    /// Commands run or files written, one per line.
    pub details: Vec<String>,
}

/// The full ordered plan for a request.
#[derive(Debug, Clone)]
pub struct Plan {
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// Render the plan as indented lines for `--dry-run` output.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, step) in self.steps.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, step.title));
            for detail in &step.details {
                lines.push(format!("   {detail}"));
            }
        }
        lines
    }
}

/// Packages a request will install: the template baseline plus any
/// explicitly requested extras.
pub fn packages_for(request: &ScaffoldRequest) -> Vec<String> {
    let mut packages = Vec::new();
    if let Some(baseline) = request.spec.template.baseline_package() {
        packages.push(baseline.to_string());
    }
    if let Some(extra) = &request.deps {
        for pkg in extra {
            if !packages.iter().any(|p| p == pkg) {
                packages.push(pkg.clone());
            }
        }
    }
    packages
}

/// Build the plan for a scaffold request.
pub fn build_plan(request: &ScaffoldRequest) -> Plan {
    let spec = &request.spec;
    let name = spec.name.as_str();
    let mut steps = Vec::new();

    // Layout
    let mut layout = Vec::new();
    if spec.manager == Manager::Uv && spec.template == Template::Script {
        layout.push(display_command("uv", &["init", name]));
    } else {
        layout.push(format!("mkdir {name}"));
    }
    layout.push(format!("write {}", spec.template.starter_file()));
    layout.push("write README.md".to_string());
    layout.push("write .gitignore".to_string());
    match spec.manager {
        Manager::Pip => layout.push("write requirements.txt".to_string()),
        Manager::Uv => layout.push("write pyproject.toml".to_string()),
    }
    if spec.template == Template::Streamlit {
        layout.push("write .streamlit/secrets.toml".to_string());
    }
    steps.push(PlanStep {
        title: "Create project layout".to_string(),
        details: layout,
    });

    // Environment + dependencies
    let packages = packages_for(request);
    match spec.manager {
        Manager::Pip => {
            steps.push(PlanStep {
                title: "Create virtual environment".to_string(),
                details: vec![display_command(python_program(), &["-m", "venv", ".venv"])],
            });
            if !packages.is_empty() {
                steps.push(PlanStep {
                    title: "Install dependencies".to_string(),
                    details: packages
                        .iter()
                        .map(|p| format!(".venv pip install {p}"))
                        .collect(),
                });
            }
        }
        Manager::Uv => {
            if !packages.is_empty() {
                steps.push(PlanStep {
                    title: "Add dependencies".to_string(),
                    details: packages
                        .iter()
                        .map(|p| display_command("uv", &["add", p]))
                        .collect(),
                });
            }
            steps.push(PlanStep {
                title: "Sync environment".to_string(),
                details: vec![display_command("uv", &["sync"])],
            });
        }
    }

    // Version control
    if request.use_git {
        steps.push(PlanStep {
            title: "Initialize git repository".to_string(),
            details: vec![
                display_command("git", &["init"]),
                display_command("git", &["add", "."]),
                display_command("git", &["commit", "-m", "Initial commit"]),
            ],
        });

        match request.remote {
            RemotePolicy::Skip => {}
            RemotePolicy::Ask | RemotePolicy::Create(_) => {
                let visibility = match request.remote {
                    RemotePolicy::Create(v) => v,
                    _ => spec.template.default_visibility(),
                };
                let optional = matches!(request.remote, RemotePolicy::Ask);
                steps.push(PlanStep {
                    title: if optional {
                        "Create GitHub repository (if confirmed)".to_string()
                    } else {
                        "Create GitHub repository".to_string()
                    },
                    details: vec![remote_command(name, visibility)],
                });
            }
        }
    }

    // Editor
    match request.editor {
        EditorPolicy::Skip => {}
        EditorPolicy::Ask | EditorPolicy::Open => {
            if let Some(editor) = detect_editor() {
                let optional = matches!(request.editor, EditorPolicy::Ask);
                steps.push(PlanStep {
                    title: if optional {
                        format!("Open in {} (if confirmed)", editor.label())
                    } else {
                        format!("Open in {}", editor.label())
                    },
                    details: vec![format!("{} {}", editor.program(), name)],
                });
            }
        }
    }

    Plan { steps }
}

fn remote_command(name: &str, visibility: Visibility) -> String {
    display_command(
        "gh",
        &[
            "repo",
            "create",
            name,
            visibility.flag(),
            "--source",
            ".",
            "--remote",
            "origin",
            "--push",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::super::tests::request;
    use super::super::{EditorPolicy, RemotePolicy};
    use super::*;
    use crate::project::{Manager, Template};

    #[test]
    fn pip_plan_creates_venv() {
        let (_t, req) = request(Template::Script, Manager::Pip);
        let plan = build_plan(&req);

        let titles: Vec<_> = plan.steps.iter().map(|s| s.title.as_str()).collect();
        assert!(titles.contains(&"Create project layout"));
        assert!(titles.contains(&"Create virtual environment"));
        assert!(titles.contains(&"Initialize git repository"));
    }

    #[test]
    fn uv_plan_syncs() {
        let (_t, req) = request(Template::Streamlit, Manager::Uv);
        let plan = build_plan(&req);

        let titles: Vec<_> = plan.steps.iter().map(|s| s.title.as_str()).collect();
        assert!(titles.contains(&"Sync environment"));
        assert!(titles.contains(&"Add dependencies"));
        assert!(!titles.contains(&"Create virtual environment"));
    }

    #[test]
    fn uv_script_uses_uv_init() {
        let (_t, req) = request(Template::Script, Manager::Uv);
        let plan = build_plan(&req);

        assert!(plan.steps[0].details[0].contains("uv init demo"));
    }

    #[test]
    fn streamlit_baseline_package_is_planned() {
        let (_t, req) = request(Template::Streamlit, Manager::Pip);
        assert_eq!(packages_for(&req), vec!["streamlit".to_string()]);
    }

    #[test]
    fn extra_packages_dedupe_against_baseline() {
        let (_t, mut req) = request(Template::Streamlit, Manager::Pip);
        req.deps = Some(vec!["streamlit".to_string(), "pandas".to_string()]);

        assert_eq!(
            packages_for(&req),
            vec!["streamlit".to_string(), "pandas".to_string()]
        );
    }

    #[test]
    fn no_git_drops_vcs_steps() {
        let (_t, mut req) = request(Template::Script, Manager::Pip);
        req.use_git = false;
        req.remote = RemotePolicy::Create(crate::vcs::Visibility::Private);

        let plan = build_plan(&req);
        let titles: Vec<_> = plan.steps.iter().map(|s| s.title.as_str()).collect();
        assert!(!titles.iter().any(|t| t.contains("git")));
        assert!(!titles.iter().any(|t| t.contains("GitHub")));
    }

    #[test]
    fn describe_numbers_steps() {
        let (_t, mut req) = request(Template::Script, Manager::Pip);
        req.editor = EditorPolicy::Skip;

        let lines = build_plan(&req).describe();
        assert!(lines[0].starts_with("1. "));
        assert!(lines.iter().any(|l| l.contains("git init")));
    }
}
