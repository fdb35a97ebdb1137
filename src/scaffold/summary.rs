//! Final summary panels: next steps and useful commands.

use crate::project::{Manager, ProjectSpec, Template};
use crate::templates::run_command;
use crate::ui::UserInterface;

/// Rows for the "Next steps" panel.
pub fn next_steps(spec: &ProjectSpec) -> Vec<(String, String)> {
    let mut rows = vec![(
        "1.".to_string(),
        format!("cd {}", spec.name),
    )];

    match spec.manager {
        Manager::Pip => {
            rows.push(("2.".to_string(), spec.manager.activate_hint().to_string()));
            rows.push((
                "3.".to_string(),
                run_command(spec.template, spec.manager),
            ));
        }
        Manager::Uv => {
            rows.push(("2.".to_string(), run_command(spec.template, spec.manager)));
        }
    }

    rows
}

/// Rows for the "Useful commands" panel.
pub fn useful_commands(spec: &ProjectSpec) -> Vec<(String, String)> {
    match spec.manager {
        Manager::Pip => {
            let mut rows = vec![
                (
                    "pip install <package>".to_string(),
                    "Install a dependency".to_string(),
                ),
                (
                    "pip freeze > requirements.txt".to_string(),
                    "Pin installed dependencies".to_string(),
                ),
                (
                    "deactivate".to_string(),
                    "Leave the virtual environment".to_string(),
                ),
            ];
            if spec.template == Template::Streamlit {
                rows.push((
                    "streamlit run app.py".to_string(),
                    "Run the Streamlit app".to_string(),
                ));
            }
            rows
        }
        Manager::Uv => {
            let mut rows = vec![
                (
                    "uv add <package>".to_string(),
                    "Add a dependency".to_string(),
                ),
                ("uv sync".to_string(), "Sync the environment".to_string()),
            ];
            match spec.template {
                Template::Script => rows.push((
                    "uv run <script>".to_string(),
                    "Run a script".to_string(),
                )),
                Template::Streamlit => rows.push((
                    "uv run streamlit run app.py".to_string(),
                    "Run the Streamlit app".to_string(),
                )),
            }
            rows
        }
    }
}

/// Show the closing panels after a successful scaffold.
pub fn show_summary(ui: &mut dyn UserInterface, spec: &ProjectSpec) {
    ui.show_panel("Next steps", &next_steps(spec));
    ui.show_panel("Useful commands", &useful_commands(spec));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{Manager, ProjectName, Template};
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn spec(template: Template, manager: Manager) -> (TempDir, ProjectSpec) {
        let temp = TempDir::new().unwrap();
        let name = ProjectName::parse("demo").unwrap();
        let spec = ProjectSpec::new(name, temp.path(), template, manager).unwrap();
        (temp, spec)
    }

    #[test]
    fn next_steps_start_with_cd() {
        let (_t, spec) = spec(Template::Script, Manager::Pip);
        let rows = next_steps(&spec);

        assert_eq!(rows[0].1, "cd demo");
        assert!(rows.iter().any(|(_, cmd)| cmd.contains("activate")));
        assert!(rows.iter().any(|(_, cmd)| cmd == "python main.py"));
    }

    #[test]
    fn uv_next_steps_skip_activation() {
        let (_t, spec) = spec(Template::Streamlit, Manager::Uv);
        let rows = next_steps(&spec);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].1, "uv run streamlit run app.py");
    }

    #[test]
    fn useful_commands_match_manager() {
        let (_t, pip_spec) = spec(Template::Script, Manager::Pip);
        assert!(useful_commands(&pip_spec)
            .iter()
            .any(|(cmd, _)| cmd.starts_with("pip install")));

        let (_t2, uv_spec) = spec(Template::Script, Manager::Uv);
        assert!(useful_commands(&uv_spec)
            .iter()
            .any(|(cmd, _)| cmd == "uv sync"));
    }

    #[test]
    fn summary_shows_both_panels() {
        let (_t, spec) = spec(Template::Script, Manager::Pip);
        let mut ui = MockUI::new();

        show_summary(&mut ui, &spec);

        assert!(ui.has_panel("Next steps"));
        assert!(ui.has_panel("Useful commands"));
    }
}
