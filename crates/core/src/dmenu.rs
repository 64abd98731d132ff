//! The suckless dmenu for X11.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::execution::pipe_input;
use crate::menu::{exit_error, resolve_lines, Arguments, Menu};
use crate::selection::{Acceptance, CANCELLED_EXIT_CODE};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct DmenuOptions {
    pub bottom: bool,
    /// Grab the keyboard before reading stdin.
    pub fast: bool,
    pub case_insensitive: bool,
    pub lines: Option<u32>,
    pub max_lines: Option<u32>,
    pub use_item_lines: bool,
    /// Xinerama screen number, starting at 0.
    pub monitor: Option<i32>,
    pub prompt: Option<String>,
    /// Xft font pattern.
    pub font: Option<String>,
    pub normal_background: Option<Color>,
    pub normal_foreground: Option<Color>,
    pub selected_background: Option<Color>,
    pub selected_foreground: Option<Color>,
    /// Embed into this X window.
    pub window_id: Option<String>,
    pub custom_args: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Dmenu {
    program: String,
    items: Vec<String>,
    options: DmenuOptions,
    acceptance: Acceptance,
}

impl Dmenu {
    pub const PROGRAM: &'static str = "dmenu";

    #[must_use]
    pub fn new(options: DmenuOptions, items: Vec<String>) -> Self {
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
    pub fn options(&self) -> &DmenuOptions {
        &self.options
    }
}

// dmenu has no alpha channel.
fn rgb(color: Option<&Color>) -> Option<String> {
    color.map(Color::to_rgb_hex)
}

impl Menu for Dmenu {
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

        Arguments::default()
            .flag("-b", options.bottom)
            .flag("-f", options.fast)
            .flag("-i", options.case_insensitive)
            .value("-l", lines)
            .value("-m", options.monitor)
            .value("-p", options.prompt.as_ref())
            .value("-fn", options.font.as_ref())
            .value("-nb", rgb(options.normal_background.as_ref()))
            .value("-nf", rgb(options.normal_foreground.as_ref()))
            .value("-sb", rgb(options.selected_background.as_ref()))
            .value("-sf", rgb(options.selected_foreground.as_ref()))
            .value("-w", options.window_id.as_ref())
            .extend(&options.custom_args)
            .build()
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

    /// dmenu prints its version to stderr and exits with 1, so both streams
    /// are accepted here. A successful run that prints nothing yields an
    /// empty version.
    fn version(&self) -> Result<String> {
        let program = self.program();
        let captured = pipe_input(program, &[self.version_flag().to_string()], "")?;

        match captured.code {
            Some(0) if captured.stdout.is_empty() => Ok(captured.stderr),
            Some(0) => Ok(captured.stdout),
            Some(CANCELLED_EXIT_CODE) if !captured.stderr.is_empty() => Ok(captured.stderr),
            _ => Err(exit_error(program, captured)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_have_no_arguments() {
        let dmenu = Dmenu::new(DmenuOptions::default(), vec!["a".to_string()]);
        assert_eq!(dmenu.command(), ("dmenu".to_string(), vec![]));
    }

    #[test]
    fn test_colors_render_without_alpha() {
        let options = DmenuOptions {
            normal_background: Some(Color::new(255, 0, 0, 255)),
            selected_foreground: Some(Color::new(0x12, 0x34, 0x56, 0x00)),
            ..DmenuOptions::default()
        };
        let dmenu = Dmenu::new(options, vec![]);
        assert_eq!(dmenu.arguments(), vec!["-nb", "#ff0000", "-sf", "#123456"]);
    }

    #[test]
    fn test_full_options_in_flag_order() {
        let options = DmenuOptions {
            bottom: true,
            fast: true,
            case_insensitive: true,
            use_item_lines: true,
            max_lines: Some(15),
            monitor: Some(1),
            prompt: Some("run:".to_string()),
            font: Some("monospace:size=10".to_string()),
            normal_background: Some(Color::rgb(0x22, 0x22, 0x22)),
            normal_foreground: Some(Color::rgb(0xbb, 0xbb, 0xbb)),
            selected_background: Some(Color::rgb(0x00, 0x55, 0x77)),
            selected_foreground: Some(Color::rgb(0xee, 0xee, 0xee)),
            window_id: Some("0x1e00003".to_string()),
            custom_args: vec!["-extra".to_string()],
            ..DmenuOptions::default()
        };
        let dmenu = Dmenu::new(options, vec!["a".to_string(), "b".to_string()]);

        assert_eq!(
            dmenu.arguments(),
            vec![
                "-b",
                "-f",
                "-i",
                "-l",
                "2",
                "-m",
                "1",
                "-p",
                "run:",
                "-fn",
                "monospace:size=10",
                "-nb",
                "#222222",
                "-nf",
                "#bbbbbb",
                "-sb",
                "#005577",
                "-sf",
                "#eeeeee",
                "-w",
                "0x1e00003",
                "-extra",
            ]
        );
    }
}
