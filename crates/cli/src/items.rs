//! Gathering the items to show in the menu.

use std::io::BufRead;

use log::debug;
use rmenu_core::error::{Error, Result};

/// Collects menu items from the command line or from `input`.
///
/// Items given as arguments win. Otherwise, when `read_input` is set, every
/// line of `input` becomes an item, in order; blank lines are kept since
/// they are valid dmenu entries. Invalid UTF-8 is replaced rather than
/// rejected, as menu output is.
///
/// # Errors
///
/// Returns [`Error::Stdio`] if reading `input` fails.
pub fn collect_items<R: BufRead>(
    arguments: &[String],
    input: R,
    read_input: bool,
) -> Result<Vec<String>> {
    if !arguments.is_empty() {
        return Ok(arguments.to_vec());
    }

    if !read_input {
        debug!("No items given and stdin is a terminal, showing an empty menu");
        return Ok(Vec::new());
    }

    input
        .split(b'\n')
        .map(|line| -> Result<String> {
            let mut line = line.map_err(Error::Stdio)?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            Ok(String::from_utf8_lossy(&line).into_owned())
        })
        .collect()
}
