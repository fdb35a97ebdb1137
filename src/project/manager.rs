//! Python package manager selection.

use std::path::{Path, PathBuf};

use crate::tools::find_tool;

/// The package manager used to provision the project environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Manager {
    /// `python -m venv` + pip.
    Pip,
    /// The uv project manager.
    Uv,
}

impl Manager {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Manager::Pip => "pip + venv",
            Manager::Uv => "uv",
        }
    }

    /// The executable that must be on PATH before scaffolding starts.
    pub fn program(&self) -> &'static str {
        match self {
            Manager::Pip => "python3",
            Manager::Uv => "uv",
        }
    }

    /// The dependency manifest this manager maintains.
    pub fn manifest(&self) -> &'static str {
        match self {
            Manager::Pip => "requirements.txt",
            Manager::Uv => "pyproject.toml",
        }
    }

    /// Installation hint shown when the manager is missing.
    pub fn install_hint(&self) -> &'static str {
        match self {
            Manager::Pip => "Install Python 3 from https://www.python.org/downloads/ \
                             (pip ships with it; run `python3 -m ensurepip` if needed)",
            Manager::Uv => "Install uv:\n  \
                            curl -LsSf https://astral.sh/uv/install.sh | sh    (Linux/macOS)\n  \
                            powershell -c \"irm https://astral.sh/uv/install.ps1 | iex\"    (Windows)",
        }
    }

    /// How to activate the environment after scaffolding, for the
    /// next-steps panel.
    pub fn activate_hint(&self) -> &'static str {
        match self {
            Manager::Pip => {
                if cfg!(windows) {
                    ".venv\\Scripts\\activate"
                } else {
                    "source .venv/bin/activate"
                }
            }
            // uv manages activation itself
            Manager::Uv => "uv sync",
        }
    }

    /// Path to a tool inside the project virtualenv.
    pub fn venv_tool_path(project: &Path, tool: &str) -> PathBuf {
        if cfg!(windows) {
            project.join(".venv").join("Scripts").join(format!("{tool}.exe"))
        } else {
            project.join(".venv").join("bin").join(tool)
        }
    }
}

/// Resolve the Python interpreter to drive `-m venv` with.
///
/// Prefers `python3`, falling back to `python` (the only name present
/// on stock Windows installs).
pub fn python_program() -> &'static str {
    if find_tool("python3").is_some() {
        "python3"
    } else {
        "python"
    }
}
