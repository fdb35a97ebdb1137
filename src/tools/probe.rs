//! Tool discovery and version probing.

use std::path::PathBuf;

use crate::shell::execute_quiet;

/// Find a tool on PATH.
pub fn find_tool(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Check if a tool is on PATH.
pub fn tool_available(name: &str) -> bool {
    find_tool(name).is_some()
}

/// Run `<program> --version` and extract a version number.
pub fn probe_version(program: &str) -> Option<String> {
    let result = execute_quiet(program, &["--version"], None).ok()?;
    if !result.success {
        return None;
    }

    let combined = if result.stdout.trim().is_empty() {
        result.stderr
    } else {
        result.stdout
    };

    extract_version(&combined)
}

/// Extract a version number from command output.
///
/// The bare `maj.min` pattern comes last so it only applies to output
/// like pip's `pip 24.0 from ...`, which has no three-part version,
/// `version` keyword or `v` prefix.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [
        r"(\d+\.\d+\.\d+)",
        r"version\s+(\d+\.\d+)",
        r"v(\d+\.\d+)",
        r"(\d+\.\d+)",
    ];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
