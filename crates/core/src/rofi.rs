//! rofi, run in dmenu mode.
//!
//! Boolean rofi settings are tri-state: `Some(true)` passes `-setting`,
//! `Some(false)` passes `-no-setting` and `None` leaves rofi's own
//! configuration alone.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::config::expand_path;
use crate::menu::{resolve_lines, Arguments, Menu};
use crate::selection::Acceptance;

/// Matching algorithms rofi can cycle through.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Matching {
    Normal,
    Regex,
    Glob,
    Fuzzy,
    Prefix,
}

impl Display for Matching {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            Matching::Normal => "normal",
            Matching::Regex => "regex",
            Matching::Glob => "glob",
            Matching::Fuzzy => "fuzzy",
            Matching::Prefix => "prefix",
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortingMethod {
    Levenshtein,
    Fzf,
}

impl Display for SortingMethod {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            SortingMethod::Levenshtein => "levenshtein",
            SortingMethod::Fzf => "fzf",
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScrollMethod {
    PerPage,
    Continuous,
}

impl Display for ScrollMethod {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            ScrollMethod::PerPage => "0",
            ScrollMethod::Continuous => "1",
        })
    }
}

/// Either a theme file (or installed theme name) or an inline theme string.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RofiTheme {
    Path(String),
    Inline(String),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct RofiOptions {
    /// 0 autodetects, 1 disables threading, more sets the pool size.
    pub threads: Option<u32>,
    /// X display to show on.
    pub display: Option<String>,
    pub case_sensitive: Option<bool>,
    /// Vim-like smartcase; rofi lets it override `case_sensitive`.
    pub case_smart: Option<bool>,
    /// Predefined content of the input field.
    pub filter: Option<String>,
    pub config: Option<String>,
    /// Directory for temporary files such as history.
    pub cache_dir: Option<String>,
    pub scroll_method: Option<ScrollMethod>,
    pub normalize_match: Option<bool>,
    /// Grab the keyboard before the window is shown.
    pub no_lazy_grab: bool,
    pub no_plugins: bool,
    pub plugin_path: Option<String>,
    pub markup: Option<bool>,
    pub normal_window: bool,
    pub transient_window: bool,
    pub steal_focus: Option<bool>,
    pub matching: Vec<Matching>,
    pub tokenize: Option<bool>,
    pub sort: Option<bool>,
    pub sorting_method: Option<SortingMethod>,
    pub theme: Option<RofiTheme>,
    pub dpi: Option<u32>,
    pub selected_row: Option<u32>,
    /// PID file that keeps a single rofi instance running.
    pub pid: Option<String>,
    /// Kill the instance named by the PID file instead of giving up.
    pub replace: bool,
    pub click_to_exit: Option<bool>,
    pub prompt: Option<String>,
    pub lines: Option<u32>,
    pub max_lines: Option<u32>,
    pub use_item_lines: bool,
    /// Message shown below the input field.
    pub message: Option<String>,
    pub password: bool,
    /// Only accept listed items.
    pub no_custom: bool,
    pub custom_args: Vec<String>,
}

impl RofiOptions {
    /// Expands `~` in every path-valued option.
    pub fn expand_paths(&mut self) {
        for path in [
            &mut self.config,
            &mut self.cache_dir,
            &mut self.plugin_path,
            &mut self.pid,
        ]
        .into_iter()
        .flatten()
        {
            *path = expand_path(path);
        }

        if let Some(RofiTheme::Path(path)) = &mut self.theme {
            *path = expand_path(path);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rofi {
    program: String,
    items: Vec<String>,
    options: RofiOptions,
    acceptance: Acceptance,
}

impl Rofi {
    pub const PROGRAM: &'static str = "rofi";

    #[must_use]
    pub fn new(options: RofiOptions, items: Vec<String>) -> Self {
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
    pub fn options(&self) -> &RofiOptions {
        &self.options
    }
}

impl Menu for Rofi {
    fn program(&self) -> &str {
        &self.program
    }

    fn version_flag(&self) -> &'static str {
        "-version"
    }

    fn arguments(&self) -> Vec<String> {
        let options = &self.options;
        let mut arguments = Arguments::default();

        arguments
            .flag("-dmenu", true)
            .value("-threads", options.threads)
            .value("-display", options.display.as_ref())
            .toggle("case-sensitive", options.case_sensitive)
            .toggle("case-smart", options.case_smart)
            .value("-filter", options.filter.as_ref())
            .value("-config", options.config.as_ref())
            .value("-cache-dir", options.cache_dir.as_ref())
            .value("-scroll-method", options.scroll_method)
            .toggle("normalize-match", options.normalize_match)
            .flag("-no-lazy-grab", options.no_lazy_grab)
            .flag("-no-plugins", options.no_plugins)
            .value("-plugin-path", options.plugin_path.as_ref())
            .toggle("markup", options.markup)
            .flag("-normal-window", options.normal_window)
            .flag("-transient-window", options.transient_window)
            .toggle("steal-focus", options.steal_focus);

        if !options.matching.is_empty() {
            let matching: Vec<String> = options.matching.iter().map(ToString::to_string).collect();
            arguments.value("-matching", Some(matching.join(",")));
        }

        arguments
            .toggle("tokenize", options.tokenize)
            .toggle("sort", options.sort)
            .value("-sorting-method", options.sorting_method);

        match &options.theme {
            Some(RofiTheme::Path(path)) => arguments.value("-theme", Some(path)),
            Some(RofiTheme::Inline(theme)) => arguments.value("-theme-str", Some(theme)),
            None => &mut arguments,
        };

        let lines = resolve_lines(
            options.lines,
            options.max_lines,
            options.use_item_lines,
            self.items.len(),
        );

        arguments
            .value("-dpi", options.dpi)
            .value("-selected-row", options.selected_row)
            .value("-pid", options.pid.as_ref())
            .flag("-replace", options.replace)
            .toggle("click-to-exit", options.click_to_exit)
            .value("-p", options.prompt.as_ref())
            .value("-l", lines)
            .value("-mesg", options.message.as_ref())
            .flag("-password", options.password)
            .flag("-no-custom", options.no_custom)
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
}
