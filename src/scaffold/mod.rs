//! Project scaffolding: planning and execution.
//!
//! The scaffold runs as a fixed sequence of stages. Layout and
//! environment stages abort on failure; git, GitHub and editor stages
//! degrade to warnings so a half-configured machine still gets a
//! usable project directory.

pub mod plan;
pub mod runner;
pub mod summary;

pub use plan::{build_plan, Plan, PlanStep};
pub use runner::{run_scaffold, ScaffoldOutcome};

use crate::project::ProjectSpec;
use crate::vcs::Visibility;

/// What to do about a GitHub remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemotePolicy {
    /// Ask the user (only when gh is installed and a repo was made).
    Ask,
    /// Create a remote with the given visibility without asking.
    Create(Visibility),
    /// Never create a remote.
    Skip,
}

/// What to do about launching an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPolicy {
    /// Ask the user (only when an editor is installed).
    Ask,
    /// Open without asking.
    Open,
    /// Never open an editor.
    Skip,
}

/// A fully-resolved scaffolding request.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// The project to create.
    pub spec: ProjectSpec,

    /// Quick mode: echo every command, single confirmations, no
    /// dependency prompt.
    pub quick: bool,

    /// Whether to initialize a git repository.
    pub use_git: bool,

    /// GitHub remote policy.
    pub remote: RemotePolicy,

    /// Editor launch policy.
    pub editor: EditorPolicy,

    /// Extra packages to install. `None` means ask (in interactive
    /// full mode); `Some(vec![])` means none.
    pub deps: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{Manager, ProjectName, Template};
    use tempfile::TempDir;

    pub(crate) fn request(template: Template, manager: Manager) -> (TempDir, ScaffoldRequest) {
        let temp = TempDir::new().unwrap();
        let name = ProjectName::parse("demo").unwrap();
        let spec = ProjectSpec::new(name, temp.path(), template, manager).unwrap();
        (
            temp,
            ScaffoldRequest {
                spec,
                quick: false,
                use_git: true,
                remote: RemotePolicy::Skip,
                editor: EditorPolicy::Skip,
                deps: Some(vec![]),
            },
        )
    }

    #[test]
    fn request_defaults_hold_spec() {
        let (_t, req) = request(Template::Script, Manager::Pip);
        assert_eq!(req.spec.name.as_str(), "demo");
        assert!(req.use_git);
    }
}
