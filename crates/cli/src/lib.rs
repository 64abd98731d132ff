//! rmenu CLI Library
//!
//! This crate provides the command-line interface for rmenu, a dmenu-style
//! front end that hands a list of items to rofi, wmenu or dmenu and prints
//! the user's choice.
//!
//! # Architecture
//!
//! The CLI is organized into several key modules:
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`items`]: Collecting menu items from arguments or stdin
//! - [`profile_choice`]: Choosing a profile and applying command-line overrides
//! - [`output`]: Dry-run command lines and profile listings
//!
//! # Examples
//!
//! The CLI binary (`rmenu`) can be used in several ways:
//!
//! ```bash
//! # Items from stdin, default profile
//! ls ~/projects | rmenu
//!
//! # Items as arguments, with a specific profile and prompt
//! rmenu -P power -p "power:" lock suspend reboot
//!
//! # Use wmenu with default options and only accept listed items
//! rmenu -b wmenu --strict yes no
//!
//! # Show the command that would run
//! rmenu --dry-run -b dmenu a b c
//! ```
//!
//! The exit status is 0 when an item was selected, 1 when the menu was
//! dismissed and 2 on errors.

pub mod cli_args;
pub mod items;
pub mod output;
pub mod profile_choice;
