//! Project name validation.

use std::fmt;

use crate::error::{MkpyError, Result};

/// A validated project name.
///
/// The name becomes both a directory name and (for uv projects) the
/// package name in `pyproject.toml`, so anything that could escape the
/// parent directory or break a path is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Parse and validate a raw name.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(MkpyError::InvalidName {
                name: raw.to_string(),
                reason: "name cannot be empty".to_string(),
            });
        }

        if name.contains('/') || name.contains('\\') {
            return Err(MkpyError::InvalidName {
                name: name.to_string(),
                reason: "name cannot contain path separators".to_string(),
            });
        }

        if name == "." || name == ".." {
            return Err(MkpyError::InvalidName {
                name: name.to_string(),
                reason: "name cannot be a relative path component".to_string(),
            });
        }

        if name.contains(char::is_whitespace) {
            return Err(MkpyError::InvalidName {
                name: name.to_string(),
                reason: "name cannot contain whitespace".to_string(),
            });
        }

        Ok(ProjectName(name.to_string()))
    }

    /// The validated name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_names() {
        assert_eq!(ProjectName::parse("my-app").unwrap().as_str(), "my-app");
        assert_eq!(ProjectName::parse("app_2").unwrap().as_str(), "app_2");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(ProjectName::parse("  demo  ").unwrap().as_str(), "demo");
    }

    #[test]
    fn rejects_empty() {
        assert!(ProjectName::parse("").is_err());
        assert!(ProjectName::parse("   ").is_err());
    }

    #[test]
    fn rejects_path_separators() {
        assert!(ProjectName::parse("a/b").is_err());
        assert!(ProjectName::parse("a\\b").is_err());
    }

    #[test]
    fn rejects_dot_components() {
        assert!(ProjectName::parse(".").is_err());
        assert!(ProjectName::parse("..").is_err());
    }

    #[test]
    fn rejects_inner_whitespace() {
        assert!(ProjectName::parse("my app").is_err());
    }

    #[test]
    fn displays_as_name() {
        let name = ProjectName::parse("demo").unwrap();
        assert_eq!(format!("{name}"), "demo");
    }
}
