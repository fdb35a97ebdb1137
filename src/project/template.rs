//! Project template selection.

use crate::vcs::Visibility;

/// The kind of project being scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Template {
    /// Plain Python script project.
    Script,
    /// Streamlit web application.
    Streamlit,
}

impl Template {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Template::Script => "Python script",
            Template::Streamlit => "Streamlit app",
        }
    }

    /// The entry-point file the template writes.
    pub fn starter_file(&self) -> &'static str {
        match self {
            Template::Script => "main.py",
            Template::Streamlit => "app.py",
        }
    }

    /// Package the template depends on out of the box.
    pub fn baseline_package(&self) -> Option<&'static str> {
        match self {
            Template::Script => None,
            Template::Streamlit => Some("streamlit"),
        }
    }

    /// Default visibility for a GitHub remote.
    ///
    /// Scripts start private; Streamlit apps are usually meant to be
    /// deployed, so they start public.
    pub fn default_visibility(&self) -> Visibility {
        match self {
            Template::Script => Visibility::Private,
            Template::Streamlit => Visibility::Public,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_files() {
        assert_eq!(Template::Script.starter_file(), "main.py");
        assert_eq!(Template::Streamlit.starter_file(), "app.py");
    }

    #[test]
    fn baseline_packages() {
        assert_eq!(Template::Script.baseline_package(), None);
        assert_eq!(Template::Streamlit.baseline_package(), Some("streamlit"));
    }

    #[test]
    fn default_visibility() {
        assert_eq!(Template::Script.default_visibility(), Visibility::Private);
        assert_eq!(Template::Streamlit.default_visibility(), Visibility::Public);
    }
}
