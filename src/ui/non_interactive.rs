//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{MkpyError, Result};

use super::theme::MkpyTheme;
use super::{OutputMode, Prompt, PromptResult, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `MKPY_PROMPT_*` environment variables or
/// the prompt's default; prompts without either fail the run.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        // Collect MKPY_PROMPT_* env vars
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("MKPY_PROMPT_"))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let is_confirm = matches!(prompt.prompt_type, super::PromptType::Confirm);

        // Check environment override
        let env_key = format!("MKPY_PROMPT_{}", prompt.key.to_uppercase());
        let value = self
            .env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .ok_or_else(|| MkpyError::PromptUnavailable {
                key: prompt.key.clone(),
            })?;

        if is_confirm {
            let val = matches!(value.as_str(), "true" | "yes" | "y" | "1");
            return Ok(PromptResult::Bool(val));
        }
        Ok(PromptResult::String(value.clone()))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_status() {
            println!("  {}", command);
        }
    }

    fn show_panel(&mut self, title: &str, rows: &[(String, String)]) {
        if !self.mode.shows_status() {
            return;
        }

        println!();
        println!("  ┌─ {} ──────────────────────────", title);
        for (left, right) in rows {
            println!("  │ {:<4} {}", left, right);
        }
        println!("  └────────────────────────────────────");
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        let theme = MkpyTheme::plain();
        println!("{}", theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        let theme = MkpyTheme::plain();
        println!("{}", theme.format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        let theme = MkpyTheme::plain();
        println!("{}", theme.format_skipped(msg));
    }
}
