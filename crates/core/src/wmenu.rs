//! wmenu, the dmenu clone for wlroots compositors.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::menu::{resolve_lines, Arguments, Menu};
use crate::selection::Acceptance;

/// Prompt shown to the left of the input field.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WmenuPrompt {
    pub text: Option<String>,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct WmenuOptions {
    pub bottom: bool,
    pub case_insensitive: bool,
    /// Show asterisks instead of the typed text.
    pub password: bool,
    /// Pango font description, e.g. `monospace 10`.
    pub font: Option<String>,
    pub lines: Option<u32>,
    /// Caps the line count; zero means no cap.
    pub max_lines: Option<u32>,
    /// Show one line per item.
    pub use_item_lines: bool,
    /// Name of the output to show on, e.g. `eDP-1`.
    pub output: Option<String>,
    pub prompt: Option<WmenuPrompt>,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub selection_background: Option<Color>,
    pub selection_foreground: Option<Color>,
    pub custom_args: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Wmenu {
    program: String,
    items: Vec<String>,
    options: WmenuOptions,
    acceptance: Acceptance,
}

impl Wmenu {
    pub const PROGRAM: &'static str = "wmenu";

    #[must_use]
    pub fn new(options: WmenuOptions, items: Vec<String>) -> Self {
        Self {
            program: Self::PROGRAM.to_string(),
            items,
            options,
            acceptance: Acceptance::default(),
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    #[must_use]
    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    #[must_use]
    pub fn options(&self) -> &WmenuOptions {
        &self.options
    }
}

fn hex(color: Option<&Color>) -> Option<String> {
    color.map(Color::to_hex)
}

impl Menu for Wmenu {
    fn program(&self) -> &str {
        &self.program
    }

    fn version_flag(&self) -> &'static str {
        "-v"
    }

    fn arguments(&self) -> Vec<String> {
        let options = &self.options;
        let lines = resolve_lines(
            options.lines,
            options.max_lines,
            options.use_item_lines,
            self.items.len(),
        );

        let mut arguments = Arguments::default();
        arguments
            .flag("-b", options.bottom)
            .flag("-i", options.case_insensitive)
            .flag("-P", options.password)
            .value("-f", options.font.as_ref())
            .value("-N", hex(options.background.as_ref()))
            .value("-n", hex(options.foreground.as_ref()))
            .value("-S", hex(options.selection_background.as_ref()))
            .value("-s", hex(options.selection_foreground.as_ref()))
            .value("-l", lines)
            .value("-o", options.output.as_ref());

        if let Some(prompt) = &options.prompt {
            arguments
                .value("-M", hex(prompt.background.as_ref()))
                .value("-m", hex(prompt.foreground.as_ref()))
                .value("-p", prompt.text.as_ref());
        }

        arguments.extend(&options.custom_args).build()
    }

    fn items(&self) -> &[String] {
        &self.items
    }

    fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
    }

    fn add_items(&mut self, items: Vec<String>) {
        self.items.extend(items);
    }

    fn acceptance(&self) -> Acceptance {
        self.acceptance
    }
}
