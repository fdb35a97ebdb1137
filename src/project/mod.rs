//! Project identity: name, location, template and package manager.

pub mod manager;
pub mod name;
pub mod template;

pub use manager::{python_program, Manager};
pub use name::ProjectName;
pub use template::Template;

use std::path::{Path, PathBuf};

use crate::error::{MkpyError, Result};

/// Everything needed to identify the project being created.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    /// Validated project name.
    pub name: ProjectName,

    /// Absolute-ish path of the project directory (parent + name).
    pub path: PathBuf,

    /// Project template.
    pub template: Template,

    /// Package manager.
    pub manager: Manager,
}

impl ProjectSpec {
    /// Build a project spec under `parent`, rejecting paths that
    /// already exist.
    pub fn new(
        name: ProjectName,
        parent: &Path,
        template: Template,
        manager: Manager,
    ) -> Result<Self> {
        let path = parent.join(name.as_str());

        if path.exists() {
            return Err(MkpyError::ProjectExists { path });
        }

        Ok(ProjectSpec {
            name,
            path,
            template,
            manager,
        })
    }
}
