//! Turning a finished menu process into a selection.
//!
//! dmenu-style programs agree on a small convention: the chosen text is
//! printed on stdout followed by a newline, and exit code 1 without any
//! error output means the user dismissed the menu.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::execution::Captured;

/// Exit code used by menu programs when the user closes the menu.
pub const CANCELLED_EXIT_CODE: i32 = 1;

/// Outcome of a menu run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Item(String),
    Nothing,
}

impl Selection {
    #[must_use]
    pub fn item(&self) -> Option<&str> {
        match self {
            Selection::Item(item) => Some(item),
            Selection::Nothing => None,
        }
    }

    #[must_use]
    pub fn into_item(self) -> Option<String> {
        match self {
            Selection::Item(item) => Some(item),
            Selection::Nothing => None,
        }
    }
}

/// Which printed text counts as a selection.
///
/// Menu programs let the user type text that matches no item and accept it.
/// `AnyOutput` passes that text through; `KnownItems` treats it as no
/// selection.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Acceptance {
    #[default]
    AnyOutput,
    KnownItems,
}

/// Removes the single line terminator a menu program prints after the
/// selected text.
#[must_use]
pub fn strip_line_ending(output: &str) -> &str {
    output
        .strip_suffix("\r\n")
        .or_else(|| output.strip_suffix('\n'))
        .unwrap_or(output)
}

/// Interprets the captured result of a menu program.
///
/// # Errors
///
/// Returns [`Error::SubProcessExit`] for any exit other than success or the
/// cancellation convention (code 1 with nothing on stderr).
pub fn interpret(
    program: &str,
    captured: &Captured,
    items: &[String],
    acceptance: Acceptance,
) -> Result<Selection> {
    match captured.code {
        Some(0) => {}
        Some(CANCELLED_EXIT_CODE) if captured.stderr.is_empty() => {
            info!("`{program}` was dismissed without a selection");
            return Ok(Selection::Nothing);
        }
        code => {
            return Err(Error::SubProcessExit {
                program: program.to_string(),
                code,
                stderr: captured.stderr.clone(),
            })
        }
    }

    let text = strip_line_ending(&captured.stdout);

    if text.is_empty() {
        return Ok(Selection::Nothing);
    }

    if acceptance == Acceptance::KnownItems && !items.iter().any(|item| item == text) {
        warn!("`{program}` returned `{text}`, which is not one of the menu items");
        return Ok(Selection::Nothing);
    }

    Ok(Selection::Item(text.to_string()))
}
