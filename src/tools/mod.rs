//! Presence checks for the external tools mkpy drives.
//!
//! Every scaffold stage is a pass-through to a third-party tool (git,
//! the GitHub CLI, an editor, a Python package manager). This module
//! answers one question per tool: is it on PATH right now?

pub mod probe;

pub use probe::{find_tool, probe_version, tool_available};

/// Editors mkpy knows how to launch, in preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Editor {
    /// Cursor IDE (`cursor`).
    Cursor,
    /// Visual Studio Code (`code`).
    Code,
}

impl Editor {
    /// The executable name on PATH.
    pub fn program(&self) -> &'static str {
        match self {
            Editor::Cursor => "cursor",
            Editor::Code => "code",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Editor::Cursor => "Cursor",
            Editor::Code => "VS Code",
        }
    }
}

/// Find an available editor, preferring Cursor over VS Code.
pub fn detect_editor() -> Option<Editor> {
    [Editor::Cursor, Editor::Code]
        .into_iter()
        .find(|e| tool_available(e.program()))
}

/// Launch an editor on the project directory.
///
/// The editor CLI detaches on its own, so the child is spawned and not
/// waited on. On Windows the launch goes through `cmd /C` because the
/// editor entry points are batch scripts.
pub fn launch_editor(editor: Editor, path: &std::path::Path) -> std::io::Result<()> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = std::process::Command::new("cmd");
        c.arg("/C").arg(editor.program());
        c
    } else {
        std::process::Command::new(editor.program())
    };

    cmd.arg(path)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .map(|_| ())
}

/// Check if git is installed.
pub fn git_available() -> bool {
    tool_available("git")
}

/// Check if the GitHub CLI is installed.
pub fn github_cli_available() -> bool {
    tool_available("gh")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_programs() {
        assert_eq!(Editor::Cursor.program(), "cursor");
        assert_eq!(Editor::Code.program(), "code");
    }

    #[test]
    fn editor_labels() {
        assert_eq!(Editor::Cursor.label(), "Cursor");
        assert_eq!(Editor::Code.label(), "VS Code");
    }

    #[test]
    fn availability_checks_do_not_panic() {
        let _ = git_available();
        let _ = github_cli_available();
        let _ = detect_editor();
    }
}
