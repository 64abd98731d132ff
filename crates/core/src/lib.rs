//! rmenu Core Library
//!
//! This crate provides a uniform interface over external menu programs such
//! as `rofi`, `wmenu` and `dmenu`. A list of items is piped to the program,
//! and whatever the user picks comes back as a [`selection::Selection`].
//!
//! # Key Features
//!
//! - **Menu Backends**: Typed options for rofi, wmenu and dmenu, translated into each program's flags
//! - **Subprocess Runner**: Feeds items on stdin and captures output and exit status
//! - **Selection Interpretation**: Tells a choice apart from a dismissed menu or a failure
//! - **Profiles**: Named menu setups loaded from a YAML configuration file
//! - **Error Handling**: One error type for every failure mode
//!
//! # Examples
//!
//! ```no_run
//! use rmenu_core::menu::Menu;
//! use rmenu_core::selection::Selection;
//! use rmenu_core::wmenu::{Wmenu, WmenuOptions};
//!
//! let options = WmenuOptions {
//!     use_item_lines: true,
//!     max_lines: Some(10),
//!     ..WmenuOptions::default()
//! };
//! let wmenu = Wmenu::new(options, vec!["suspend".to_string(), "reboot".to_string()]);
//!
//! match wmenu.prompt_user()? {
//!     Selection::Item(item) => println!("Selected {item}"),
//!     Selection::Nothing => println!("Nothing selected"),
//! }
//! # Ok::<(), rmenu_core::error::Error>(())
//! ```

pub mod color;
pub mod config;
pub mod dmenu;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod menu;
pub mod profiles;
pub mod rofi;
pub mod selection;
pub mod wmenu;
