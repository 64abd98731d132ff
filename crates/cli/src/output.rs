//! Text printed by the CLI besides the selection itself.

use itertools::Itertools;
use rmenu_core::profiles::MenuConfig;

/// Quotes an argument for a POSIX shell when it needs quoting.
#[must_use]
pub fn shell_quote(argument: &str) -> String {
    let is_plain = !argument.is_empty()
        && argument
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,+@%".contains(c));

    if is_plain {
        argument.to_string()
    } else {
        format!("'{}'", argument.replace('\'', r"'\''"))
    }
}

/// The command line as it could be pasted into a shell.
#[must_use]
pub fn format_command(program: &str, arguments: &[String]) -> String {
    std::iter::once(program)
        .chain(arguments.iter().map(String::as_str))
        .map(shell_quote)
        .join(" ")
}

/// One line per profile, in file order, marking the one used by default.
#[must_use]
pub fn describe_profiles(config: &MenuConfig) -> Vec<String> {
    let default_name = config.default_choice().map(|(name, _)| name);

    config
        .profiles
        .iter()
        .map(|(name, profile)| {
            let marker = if Some(name.as_str()) == default_name {
                " (default)"
            } else {
                ""
            };
            format!("{name}\t{}{marker}", profile.kind())
        })
        .collect()
}
