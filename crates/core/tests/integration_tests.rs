//! Integration tests for rmenu-core
//!
//! These tests verify that configuration loading, profiles and the menu
//! backends work together by going from a YAML file to a command line.

use rmenu_core::{
    color::Color,
    config::get_config_path,
    file_handling::get_menu_config,
    menu::Menu,
    profiles::{BackendKind, BackendOptions},
    selection::Acceptance,
    wmenu::{Wmenu, WmenuOptions},
};
use std::io::Write;
use tempfile::NamedTempFile;

fn load(yaml_content: &str) -> rmenu_core::profiles::MenuConfig {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    get_menu_config(temp_file.path().to_str().unwrap()).unwrap()
}

/// Test loading a configuration with every backend and building each menu
#[test]
fn test_complete_configuration_workflow() {
    let config = load(
        r##"
default_profile: bar
profiles:
  launcher:
    backend: rofi
    prompt: "run"
    matching: [fuzzy]
    sort: true
    use_item_lines: true
    max_lines: 3
  bar:
    backend: wmenu
    program: wmenu-git
    acceptance: known_items
    case_insensitive: true
    background: "#282828"
    selection_background: "#d79921ff"
    prompt:
      text: "power:"
      foreground: "#ebdbb2"
  classic:
    backend: dmenu
    bottom: true
    lines: 5
    normal_background: "#000000"
"##,
    );

    assert_eq!(config.profiles.len(), 3);
    let (default_name, default_profile) = config.default_choice().unwrap();
    assert_eq!(default_name, "bar");
    assert_eq!(default_profile.kind(), BackendKind::Wmenu);

    let items: Vec<String> = ["lock", "suspend", "reboot", "shutdown", "logout"]
        .iter()
        .map(ToString::to_string)
        .collect();

    let launcher = config.profile("launcher").unwrap().build(items.clone());
    assert_eq!(
        launcher.command(),
        (
            "rofi".to_string(),
            vec![
                "-dmenu".to_string(),
                "-matching".to_string(),
                "fuzzy".to_string(),
                "-sort".to_string(),
                "-p".to_string(),
                "run".to_string(),
                "-l".to_string(),
                "3".to_string(),
            ]
        )
    );

    let bar = default_profile.build(items.clone());
    assert_eq!(bar.program(), "wmenu-git");
    assert_eq!(bar.acceptance(), Acceptance::KnownItems);
    assert_eq!(
        bar.arguments(),
        vec!["-i", "-N", "282828ff", "-S", "d79921ff", "-m", "ebdbb2ff", "-p", "power:"]
    );

    let classic = config.profile("classic").unwrap().build(items);
    assert_eq!(classic.arguments(), vec!["-b", "-l", "5", "-nb", "#000000"]);
}

/// Test that options read from a file match options built in code
#[test]
fn test_configured_options_match_code() {
    let config = load(
        r##"
profiles:
  bar:
    backend: wmenu
    use_item_lines: true
    background: "#ff0000"
"##,
    );

    let BackendOptions::Wmenu(configured) = &config.profile("bar").unwrap().options else {
        panic!("Expected wmenu options");
    };

    let in_code = WmenuOptions {
        use_item_lines: true,
        background: Some(Color::new(255, 0, 0, 255)),
        ..WmenuOptions::default()
    };
    assert_eq!(*configured, in_code);

    let items = vec!["a".to_string(), "b".to_string()];
    assert_eq!(
        Wmenu::new(configured.clone(), items.clone()).arguments(),
        Wmenu::new(in_code, items).arguments()
    );
}

/// Test menus used through the trait object, as a caller holding any backend would
#[test]
fn test_menu_trait_objects_share_item_handling() {
    let config = load(
        r#"
profiles:
  a:
    backend: rofi
  b:
    backend: wmenu
  c:
    backend: dmenu
"#,
    );

    for profile in config.profiles.values() {
        let mut menu = profile.build(vec!["one".to_string()]);
        menu.add_items(vec!["two".to_string()]);
        assert_eq!(menu.items(), ["one", "two"]);

        menu.set_items(vec!["three".to_string()]);
        assert_eq!(menu.items(), ["three"]);

        let (program, _) = menu.command();
        assert_eq!(program, profile.kind().to_string());
    }
}

#[test]
fn test_default_config_path_is_expanded() {
    let path = get_config_path(&None);
    assert!(!path.starts_with('~'));
}
