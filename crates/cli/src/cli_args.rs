//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure and provides
//! validation for CLI arguments using the `clap` crate.

use clap::Parser;
use rmenu_core::profiles::BackendKind;

/// Command-line arguments for the `rmenu` binary.
///
/// Items are taken from the trailing arguments, or from stdin (one per line)
/// when no items are given and stdin is not a terminal.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rmenu_cli::cli_args::Args;
///
/// let args = Args::parse_from(["rmenu", "-b", "wmenu", "lock", "reboot"]);
/// assert_eq!(args.items, vec!["lock", "reboot"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to the menu profiles config file YAML.
    ///
    /// If not provided, defaults to `~/.config/rmenu/config.yml`, which may
    /// be absent.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Name of the profile to use from the config file.
    ///
    /// If not provided, the config's `default_profile` is used, then its
    /// first profile, then rofi with default options.
    #[arg(long, short = 'P', conflicts_with = "backend")]
    pub profile: Option<String>,

    /// Use this menu program with default options: rofi, wmenu or dmenu.
    #[arg(long, short = 'b')]
    pub backend: Option<BackendKind>,

    /// Prompt text, replacing the profile's prompt.
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,

    /// Number of lines to show, replacing the profile's line settings.
    #[arg(long, short = 'l')]
    pub lines: Option<u32>,

    /// Only accept one of the given items, never typed text.
    #[arg(long, short = 's', action)]
    pub strict: bool,

    /// Print the menu command line instead of running it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Print the version reported by the menu program.
    #[arg(long, action)]
    pub menu_version: bool,

    /// List the profiles defined in the config file.
    #[arg(long, action)]
    pub list_profiles: bool,

    /// Items to show in the menu.
    #[arg(trailing_var_arg = true)]
    pub items: Vec<String>,
}
