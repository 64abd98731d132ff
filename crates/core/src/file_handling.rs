//! Reading and validating the menu configuration file.

use std::fs::File;
use std::path::Path;

use log::{debug, warn};

use crate::error::Error::{EmptyId, IdWithSpace, UnknownProfile};
use crate::error::{Error, Result};
use crate::profiles::MenuConfig;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(EmptyId);
    }

    if id.chars().any(char::is_whitespace) {
        return Err(IdWithSpace(id.to_string()));
    }

    Ok(())
}

fn validate_config(config: &MenuConfig) -> Result<()> {
    for name in config.profiles.keys() {
        validate_id(name)?;
    }

    if let Some(default_profile) = &config.default_profile {
        if !config.profiles.contains_key(default_profile) {
            return Err(UnknownProfile(default_profile.clone()));
        }
    }

    Ok(())
}

/// Loads and validates the menu configuration file.
///
/// Path-valued options are tilde expanded once loaded.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The configuration defines no profiles
/// - A profile name is empty or contains whitespace
/// - `default_profile` names a profile that does not exist
///
/// # Examples
///
/// ```no_run
/// use rmenu_core::file_handling::get_menu_config;
///
/// let config = get_menu_config("/home/me/.config/rmenu/config.yml")?;
/// println!("Loaded {} profiles", config.profiles.len());
/// # Ok::<(), rmenu_core::error::Error>(())
/// ```
pub fn get_menu_config(config_path: &str) -> Result<MenuConfig> {
    let config_reader = get_reader("config", config_path)?;

    let mut config: MenuConfig = serde_yaml::from_reader(config_reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    if config.profiles.is_empty() {
        return Err(Error::empty_config(config_path.to_string()));
    }

    validate_config(&config)?;

    for profile in config.profiles.values_mut() {
        profile.expand_paths();
    }

    debug!(
        "Loaded profiles {:?} from `{config_path}`",
        config.profiles.keys().collect::<Vec<_>>()
    );

    Ok(config)
}

/// Loads the configuration if the file exists, otherwise an empty one.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be loaded, see
/// [`get_menu_config`].
pub fn get_optional_menu_config(config_path: &str) -> Result<MenuConfig> {
    if !Path::new(config_path).exists() {
        warn!("No configuration at `{config_path}`, using built-in defaults");
        return Ok(MenuConfig::default());
    }

    get_menu_config(config_path)
}
