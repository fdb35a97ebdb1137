//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, MkpyTheme, NonInteractiveUI, OutputMode, ProgressSpinner,
    Prompt, PromptResult, SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: MkpyTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            MkpyTheme::new()
        } else {
            MkpyTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", self.theme.command.apply_to(command)).ok();
        }
    }

    fn show_panel(&mut self, title: &str, rows: &[(String, String)]) {
        if !self.mode.shows_status() {
            return;
        }

        let b = &self.theme.border;
        let left_width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        let inner_width = rows
            .iter()
            .map(|(_, r)| left_width + r.len() + 1)
            .max()
            .unwrap_or(0)
            .max(title.len() + 2)
            + 2;

        writeln!(self.term).ok();
        writeln!(
            self.term,
            "  {} {} {}",
            b.apply_to("┌─"),
            self.theme.highlight.apply_to(title),
            b.apply_to("─".repeat(inner_width.saturating_sub(title.len()))),
        )
        .ok();
        for (left, right) in rows {
            writeln!(
                self.term,
                "  {} {:<width$} {}",
                b.apply_to("│"),
                self.theme.hint.apply_to(left),
                self.theme.info.apply_to(right),
                width = left_width,
            )
            .ok();
        }
        writeln!(
            self.term,
            "  {}",
            b.apply_to(format!("└{}", "─".repeat(inner_width + 4))),
        )
        .ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
