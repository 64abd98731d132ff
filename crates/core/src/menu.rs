//! The interface shared by every menu backend.

use std::fmt::Display;

use crate::error::{Error, Result};
use crate::execution::{join_items, pipe_input, Captured};
use crate::selection::{interpret, Acceptance, Selection};

/// An external menu program that shows a list of items and reports the
/// user's choice.
///
/// Implementors only describe their program: its name, its version flag and
/// how their options translate into arguments. Running the program is shared.
pub trait Menu {
    /// Name or path of the program to run.
    fn program(&self) -> &str;

    /// Flag that makes the program print its version.
    fn version_flag(&self) -> &'static str;

    /// Arguments for the current options and items, in the program's order.
    fn arguments(&self) -> Vec<String>;

    fn items(&self) -> &[String];

    /// Replaces the items to display.
    fn set_items(&mut self, items: Vec<String>);

    /// Adds items at the bottom of the list.
    fn add_items(&mut self, items: Vec<String>);

    fn acceptance(&self) -> Acceptance;

    /// The program and arguments that [`Menu::prompt_user`] would run.
    fn command(&self) -> (String, Vec<String>) {
        (self.program().to_string(), self.arguments())
    }

    /// Shows the menu and blocks until the program exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be started or exits with a
    /// failure other than the user dismissing the menu.
    fn prompt_user(&self) -> Result<Selection> {
        let (program, arguments) = self.command();
        let captured = pipe_input(&program, &arguments, &join_items(self.items()))?;

        interpret(&program, &captured, self.items(), self.acceptance())
    }

    /// Raw version output of the program.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be started or does not exit
    /// successfully.
    fn version(&self) -> Result<String> {
        let program = self.program();
        let captured = pipe_input(program, &[self.version_flag().to_string()], "")?;

        if captured.success() {
            Ok(captured.stdout)
        } else {
            Err(exit_error(program, captured))
        }
    }
}

pub(crate) fn exit_error(program: &str, captured: Captured) -> Error {
    Error::SubProcessExit {
        program: program.to_string(),
        code: captured.code,
        stderr: captured.stderr,
    }
}

/// Number of lines to request from the program.
///
/// The item count replaces `lines` when `use_item_lines` is set, and a
/// positive `max_lines` caps the result.
#[must_use]
pub fn resolve_lines(
    lines: Option<u32>,
    max_lines: Option<u32>,
    use_item_lines: bool,
    item_count: usize,
) -> Option<u32> {
    let lines = if use_item_lines {
        Some(u32::try_from(item_count).unwrap_or(u32::MAX))
    } else {
        lines
    };

    match (lines, max_lines) {
        (Some(lines), Some(max_lines)) if max_lines > 0 && lines > max_lines => Some(max_lines),
        (lines, _) => lines,
    }
}

/// Accumulates command-line arguments in order.
#[derive(Debug, Default)]
pub(crate) struct Arguments {
    arguments: Vec<String>,
}

impl Arguments {
    pub(crate) fn flag(&mut self, flag: &str, present: bool) -> &mut Self {
        if present {
            self.arguments.push(flag.to_string());
        }
        self
    }

    /// `-name` when enabled, `-no-name` when disabled, nothing when unset.
    pub(crate) fn toggle(&mut self, name: &str, value: Option<bool>) -> &mut Self {
        match value {
            Some(true) => self.arguments.push(format!("-{name}")),
            Some(false) => self.arguments.push(format!("-no-{name}")),
            None => {}
        }
        self
    }

    pub(crate) fn value<T: Display>(&mut self, flag: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.arguments.push(flag.to_string());
            self.arguments.push(value.to_string());
        }
        self
    }

    pub(crate) fn extend(&mut self, arguments: &[String]) -> &mut Self {
        self.arguments.extend_from_slice(arguments);
        self
    }

    pub(crate) fn build(&mut self) -> Vec<String> {
        std::mem::take(&mut self.arguments)
    }
}
