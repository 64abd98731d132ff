//! Configuration path utilities for rmenu.
//!
//! This module provides functions for resolving the configuration file path
//! and expanding shell variables like `~` in paths.

/// Default path for the menu profiles configuration file
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/rmenu/config.yml";

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `config_path_arg` - Optional custom configuration file path
///
/// # Returns
///
/// The resolved path to the configuration file
///
/// # Examples
///
/// ```
/// use rmenu_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(&None);
///
/// // Use custom path
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    expand_path(config_path)
}

/// Expands a leading `~` to the home directory.
///
/// ```
/// use rmenu_core::config::expand_path;
///
/// assert_eq!(expand_path("/usr/share/rofi"), "/usr/share/rofi");
/// assert!(!expand_path("~/themes").starts_with('~'));
/// ```
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/config.yml".to_string());
        let result = get_config_path(&custom_path);
        assert_eq!(result, "/custom/path/config.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with("rmenu/config.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let tilde_path = Some("~/my-config.yml".to_string());
        let result = get_config_path(&tilde_path);
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-config.yml"));
    }

    #[test]
    fn test_expand_path_without_tilde() {
        assert_eq!(expand_path("relative/theme.rasi"), "relative/theme.rasi");
    }
}
