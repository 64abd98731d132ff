use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::dmenu::{Dmenu, DmenuOptions};
use crate::error::{Error, Result};
use crate::menu::Menu;
use crate::rofi::{Rofi, RofiOptions};
use crate::selection::Acceptance;
use crate::wmenu::{Wmenu, WmenuOptions, WmenuPrompt};

/// The menu programs rmenu knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Rofi,
    Wmenu,
    Dmenu,
}

impl Display for BackendKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            BackendKind::Rofi => "rofi",
            BackendKind::Wmenu => "wmenu",
            BackendKind::Dmenu => "dmenu",
        })
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "rofi" => Ok(BackendKind::Rofi),
            "wmenu" => Ok(BackendKind::Wmenu),
            "dmenu" => Ok(BackendKind::Dmenu),
            _ => Err(Error::UnknownBackend(value.to_string())),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum BackendOptions {
    Rofi(RofiOptions),
    Wmenu(WmenuOptions),
    Dmenu(DmenuOptions),
}

impl BackendOptions {
    #[must_use]
    pub fn kind(&self) -> BackendKind {
        match self {
            BackendOptions::Rofi(_) => BackendKind::Rofi,
            BackendOptions::Wmenu(_) => BackendKind::Wmenu,
            BackendOptions::Dmenu(_) => BackendKind::Dmenu,
        }
    }
}

/// A named way of showing a menu: which program, and with what options.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Overrides the program name looked up on `PATH`.
    pub program: Option<String>,
    #[serde(default)]
    pub acceptance: Acceptance,
    #[serde(flatten)]
    pub options: BackendOptions,
}

impl Profile {
    /// A profile with the backend's default options.
    #[must_use]
    pub fn new(kind: BackendKind) -> Self {
        let options = match kind {
            BackendKind::Rofi => BackendOptions::Rofi(RofiOptions::default()),
            BackendKind::Wmenu => BackendOptions::Wmenu(WmenuOptions::default()),
            BackendKind::Dmenu => BackendOptions::Dmenu(DmenuOptions::default()),
        };

        Self {
            program: None,
            acceptance: Acceptance::default(),
            options,
        }
    }

    #[must_use]
    pub fn kind(&self) -> BackendKind {
        self.options.kind()
    }

    pub fn set_prompt(&mut self, text: String) {
        match &mut self.options {
            BackendOptions::Rofi(options) => options.prompt = Some(text),
            BackendOptions::Wmenu(options) => {
                options.prompt.get_or_insert_with(WmenuPrompt::default).text = Some(text);
            }
            BackendOptions::Dmenu(options) => options.prompt = Some(text),
        }
    }

    /// Shows exactly `lines` lines, dropping any item-count sizing.
    pub fn set_lines(&mut self, lines: u32) {
        let (current, use_item_lines) = match &mut self.options {
            BackendOptions::Rofi(options) => (&mut options.lines, &mut options.use_item_lines),
            BackendOptions::Wmenu(options) => (&mut options.lines, &mut options.use_item_lines),
            BackendOptions::Dmenu(options) => (&mut options.lines, &mut options.use_item_lines),
        };

        *current = Some(lines);
        *use_item_lines = false;
    }

    pub fn expand_paths(&mut self) {
        if let BackendOptions::Rofi(options) = &mut self.options {
            options.expand_paths();
        }
    }

    /// Creates the menu described by this profile.
    #[must_use]
    pub fn build(&self, items: Vec<String>) -> Box<dyn Menu> {
        match &self.options {
            BackendOptions::Rofi(options) => {
                let mut rofi = Rofi::new(options.clone(), items).with_acceptance(self.acceptance);
                if let Some(program) = &self.program {
                    rofi = rofi.with_program(program.clone());
                }
                Box::new(rofi)
            }
            BackendOptions::Wmenu(options) => {
                let mut wmenu = Wmenu::new(options.clone(), items).with_acceptance(self.acceptance);
                if let Some(program) = &self.program {
                    wmenu = wmenu.with_program(program.clone());
                }
                Box::new(wmenu)
            }
            BackendOptions::Dmenu(options) => {
                let mut dmenu = Dmenu::new(options.clone(), items).with_acceptance(self.acceptance);
                if let Some(program) = &self.program {
                    dmenu = dmenu.with_program(program.clone());
                }
                Box::new(dmenu)
            }
        }
    }
}

/// Contents of the configuration file.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuConfig {
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: IndexMap<String, Profile>,
}

impl MenuConfig {
    /// Looks up a profile by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProfile`] if no profile has that name.
    pub fn profile(&self, name: &str) -> Result<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| Error::UnknownProfile(name.to_string()))
    }

    /// The configured default profile, or the first one in the file.
    #[must_use]
    pub fn default_choice(&self) -> Option<(&str, &Profile)> {
        if let Some(name) = &self.default_profile {
            if let Some((name, profile)) = self.profiles.get_key_value(name) {
                return Some((name.as_str(), profile));
            }
        }

        self.profiles
            .first()
            .map(|(name, profile)| (name.as_str(), profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Profile {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_backend_kind_round_trip_names() {
        for kind in [BackendKind::Rofi, BackendKind::Wmenu, BackendKind::Dmenu] {
            assert_eq!(kind.to_string().parse::<BackendKind>().unwrap(), kind);
        }
        assert_eq!("ROFI".parse::<BackendKind>().unwrap(), BackendKind::Rofi);
    }

    #[test]
    fn test_backend_kind_unknown() {
        let result = "fzf".parse::<BackendKind>();
        assert!(matches!(result, Err(Error::UnknownBackend(name)) if name == "fzf"));
    }

    #[test]
    fn test_profile_deserializes_flattened_options() {
        let profile = parse(
            r##"
backend: wmenu
program: /usr/local/bin/wmenu
acceptance: known_items
bottom: true
use_item_lines: true
max_lines: 12
background: "#1e1e2e"
prompt:
  text: "open:"
"##,
        );

        assert_eq!(profile.kind(), BackendKind::Wmenu);
        assert_eq!(profile.program, Some("/usr/local/bin/wmenu".to_string()));
        assert_eq!(profile.acceptance, Acceptance::KnownItems);

        let BackendOptions::Wmenu(options) = &profile.options else {
            panic!("Expected wmenu options");
        };
        assert!(options.bottom);
        assert!(options.use_item_lines);
        assert_eq!(options.max_lines, Some(12));
        assert_eq!(options.background.unwrap().to_hex(), "1e1e2eff");
        assert_eq!(
            options.prompt.as_ref().unwrap().text,
            Some("open:".to_string())
        );
    }

    #[test]
    fn test_profile_rofi_enums() {
        let profile = parse(
            r#"
backend: rofi
matching: [fuzzy, prefix]
sorting_method: fzf
scroll_method: continuous
case_sensitive: false
theme:
  inline: "window { width: 40%; }"
"#,
        );

        let menu = profile.build(vec![]);
        assert_eq!(
            menu.arguments(),
            vec![
                "-dmenu",
                "-no-case-sensitive",
                "-scroll-method",
                "1",
                "-matching",
                "fuzzy,prefix",
                "-sorting-method",
                "fzf",
                "-theme-str",
                "window { width: 40%; }",
            ]
        );
    }

    #[test]
    fn test_profile_rejects_bad_color() {
        let result: serde_yaml::Result<Profile> =
            serde_yaml::from_str("backend: dmenu\nnormal_background: \"#12\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_requires_backend() {
        let result: serde_yaml::Result<Profile> = serde_yaml::from_str("bottom: true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_build_uses_program_and_acceptance() {
        let mut profile = Profile::new(BackendKind::Dmenu);
        profile.program = Some("dmenu-custom".to_string());
        profile.acceptance = Acceptance::KnownItems;

        let menu = profile.build(vec!["a".to_string()]);
        assert_eq!(menu.program(), "dmenu-custom");
        assert_eq!(menu.acceptance(), Acceptance::KnownItems);
        assert_eq!(menu.items(), ["a"]);
    }

    #[test]
    fn test_set_prompt_per_backend() {
        let mut rofi = Profile::new(BackendKind::Rofi);
        rofi.set_prompt("go".to_string());
        assert_eq!(rofi.build(vec![]).arguments(), vec!["-dmenu", "-p", "go"]);

        let mut wmenu = Profile::new(BackendKind::Wmenu);
        wmenu.set_prompt("go".to_string());
        assert_eq!(wmenu.build(vec![]).arguments(), vec!["-p", "go"]);

        let mut dmenu = Profile::new(BackendKind::Dmenu);
        dmenu.set_prompt("go".to_string());
        assert_eq!(dmenu.build(vec![]).arguments(), vec!["-p", "go"]);
    }

    #[test]
    fn test_set_lines_replaces_item_count_sizing() {
        let mut profile = parse("backend: wmenu\nuse_item_lines: true\n");
        profile.set_lines(2);

        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(profile.build(items).arguments(), vec!["-l", "2"]);
    }

    #[test]
    fn test_default_choice() {
        let mut config = MenuConfig::default();
        assert!(config.default_choice().is_none());

        config
            .profiles
            .insert("first".to_string(), Profile::new(BackendKind::Rofi));
        config
            .profiles
            .insert("second".to_string(), Profile::new(BackendKind::Wmenu));
        assert_eq!(config.default_choice().unwrap().0, "first");

        config.default_profile = Some("second".to_string());
        let (name, profile) = config.default_choice().unwrap();
        assert_eq!(name, "second");
        assert_eq!(profile.kind(), BackendKind::Wmenu);
    }

    #[test]
    fn test_profile_lookup() {
        let mut config = MenuConfig::default();
        config
            .profiles
            .insert("bar".to_string(), Profile::new(BackendKind::Dmenu));

        assert!(config.profile("bar").is_ok());
        assert!(matches!(config.profile("nope"), Err(Error::UnknownProfile(_))));
    }
}
