//! Generated file contents.
//!
//! Every boilerplate file a new project receives is rendered here as a
//! plain string, so the scaffold runner only deals with paths and the
//! tests can assert on content without touching the filesystem.

use crate::project::{Manager, ProjectSpec, Template};

/// Render the project README.
pub fn readme(spec: &ProjectSpec) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", spec.name));
    out.push_str("## Description\n");
    match spec.template {
        Template::Script => out.push_str("A Python project.\n\n"),
        Template::Streamlit => out.push_str("A Streamlit application.\n\n"),
    }

    out.push_str("## Requirements\n");
    out.push_str("- Python 3.8 or newer\n");
    match spec.manager {
        Manager::Pip => out.push_str("- Dependencies listed in requirements.txt\n\n"),
        Manager::Uv => out.push_str(
            "- [uv](https://docs.astral.sh/uv/) for dependency and environment management\n\n",
        ),
    }

    out.push_str("## Setup\n\n");
    out.push_str(&format!(
        "1. Clone this repository and enter it:\n   ```bash\n   git clone <repository-url>\n   cd {}\n   ```\n\n",
        spec.name
    ));
    match spec.manager {
        Manager::Pip => {
            out.push_str("2. Create a virtual environment:\n   ```bash\n   python -m venv .venv\n   ```\n\n");
            out.push_str("3. Activate it:\n   ```bash\n   # Windows\n   .venv\\Scripts\\activate\n\n   # Linux/macOS\n   source .venv/bin/activate\n   ```\n\n");
            out.push_str("4. Install the dependencies:\n   ```bash\n   pip install -r requirements.txt\n   ```\n\n");
        }
        Manager::Uv => {
            out.push_str("2. Sync the environment:\n   ```bash\n   uv sync\n   ```\n\n");
        }
    }

    out.push_str("## Usage\n\n```bash\n");
    out.push_str(&run_command(spec.template, spec.manager));
    out.push_str("\n```\n\n");

    out.push_str("## Project layout\n```\n");
    out.push_str(&format!("{}/\n", spec.name));
    out.push_str(&format!(
        "├── {:<20} # Application entry point\n",
        spec.template.starter_file()
    ));
    if spec.template == Template::Streamlit {
        out.push_str("├── .streamlit/          # Streamlit configuration\n");
        out.push_str("│   └── secrets.toml     # Secrets (kept out of git)\n");
    }
    out.push_str("├── .venv/               # Virtual environment (generated)\n");
    out.push_str(&format!(
        "├── {:<20} # Dependency manifest\n",
        spec.manager.manifest()
    ));
    out.push_str("└── README.md            # This file\n```\n\n");

    out.push_str("## License\nMIT\n");
    out
}

/// The command that runs the project, for READMEs and panels.
pub fn run_command(template: Template, manager: Manager) -> String {
    match (template, manager) {
        (Template::Script, Manager::Pip) => "python main.py".to_string(),
        (Template::Script, Manager::Uv) => "uv run main.py".to_string(),
        (Template::Streamlit, Manager::Pip) => "streamlit run app.py".to_string(),
        (Template::Streamlit, Manager::Uv) => "uv run streamlit run app.py".to_string(),
    }
}

/// Render the project `.gitignore`.
pub fn gitignore(template: Template, manager: Manager) -> String {
    let mut out = String::from(
        "# Python\n\
         __pycache__/\n\
         *.py[cod]\n\
         *$py.class\n\
         .Python\n\
         env/\n\
         venv/\n\
         .env\n\
         .venv/\n",
    );

    if manager == Manager::Uv {
        out.push_str("\n# uv\n.uv/\nuv.lock\n");
    }

    if template == Template::Streamlit {
        out.push_str("\n# Streamlit\n.streamlit/secrets.toml\n");
    }

    out.push_str(
        "\n# IDEs\n\
         .vscode/\n\
         .idea/\n\
         *.swp\n\
         *.swo\n\
         \n\
         # Testing\n\
         .pytest_cache/\n\
         .coverage\n\
         htmlcov/\n\
         \n\
         # Build\n\
         build/\n\
         dist/\n\
         *.egg-info/\n",
    );
    out
}

/// Render the starter entry-point file for a template.
pub fn starter(template: Template) -> String {
    match template {
        Template::Script => String::from(
            "\"\"\"Application entry point.\"\"\"\n\
             \n\
             \n\
             def main():\n\
             \x20   \"\"\"Main function.\"\"\"\n\
             \x20   print(\"Hello, world!\")\n\
             \n\
             \n\
             if __name__ == \"__main__\":\n\
             \x20   main()\n",
        ),
        Template::Streamlit => String::from(
            r####"import streamlit as st

st.set_page_config(
    page_title="My Streamlit App",
    page_icon="🚀",
    layout="wide",
    initial_sidebar_state="auto",
)

st.title("My Streamlit App")

with st.sidebar:
    st.header("Settings")
    name = st.text_input("Your name")
    color = st.color_picker("Pick a color", "#0066ff")

st.header("Welcome to Streamlit!")

if name:
    st.markdown(f"### Hello, {name}! 👋")
    st.write(f"Your chosen color is: {color}")

    tab1, tab2, tab3 = st.tabs(["Data", "Charts", "About"])

    with tab1:
        st.subheader("Sample data table")
        st.dataframe({
            "Column 1": [1, 2, 3, 4],
            "Column 2": [10, 20, 30, 40],
            "Column 3": ["a", "b", "c", "d"],
        })

    with tab2:
        st.subheader("Sample chart")
        st.line_chart({"data": [1, 5, 2, 6, 2, 8, 3]})

    with tab3:
        st.subheader("About this app")
        st.info("This is a starter application built with Streamlit.")
else:
    st.info("👈 Enter your name in the sidebar to get started")

st.divider()
st.caption("Built with Streamlit 🚀")
"####,
        ),
    }
}

/// Render a `pyproject.toml` for uv-managed projects.
pub fn pyproject(name: &str) -> String {
    format!(
        "[project]\n\
         name = \"{name}\"\n\
         version = \"0.1.0\"\n\
         description = \"\"\n\
         readme = \"README.md\"\n\
         requires-python = \">=3.8\"\n\
         dependencies = []\n"
    )
}

/// Render a `requirements.txt` listing the installed packages.
pub fn requirements(packages: &[String]) -> String {
    let mut out = String::from("# Project dependencies\n");
    for package in packages {
        out.push_str(package);
        out.push('\n');
    }
    out
}

/// Render the `.streamlit/secrets.toml` placeholder.
pub fn streamlit_secrets() -> String {
    String::from(
        "# Streamlit secrets file\n\
         # Add your secret variables here\n\
         \n\
         API_KEY = \"\"\n",
    )
}
