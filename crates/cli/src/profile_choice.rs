//! Picking the profile to run from the config file and command-line flags.

use log::debug;
use rmenu_core::error::Result;
use rmenu_core::profiles::{BackendKind, MenuConfig, Profile};
use rmenu_core::selection::Acceptance;

use crate::cli_args::Args;

/// Backend used when neither the command line nor the config names one.
pub const DEFAULT_BACKEND: BackendKind = BackendKind::Rofi;

/// Resolves the profile to run and applies command-line overrides to it.
///
/// The profile comes from, in order: `--profile`, `--backend`, the config's
/// default (or first) profile, and finally [`DEFAULT_BACKEND`].
///
/// # Errors
///
/// Returns an error if `--profile` names a profile missing from the config.
pub fn choose_profile(args: &Args, config: &MenuConfig) -> Result<Profile> {
    let mut profile = if let Some(name) = &args.profile {
        config.profile(name)?.clone()
    } else if let Some(kind) = args.backend {
        debug!("Using `{kind}` with default options");
        Profile::new(kind)
    } else if let Some((name, profile)) = config.default_choice() {
        debug!("Using profile `{name}`");
        profile.clone()
    } else {
        Profile::new(DEFAULT_BACKEND)
    };

    if let Some(prompt) = &args.prompt {
        profile.set_prompt(prompt.clone());
    }

    if let Some(lines) = args.lines {
        profile.set_lines(lines);
    }

    if args.strict {
        profile.acceptance = Acceptance::KnownItems;
    }

    Ok(profile)
}
