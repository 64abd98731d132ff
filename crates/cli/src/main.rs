use std::io::stdin;
use std::process::ExitCode;

use clap::Parser;
use crossterm::tty::IsTty;
use log::debug;
use rmenu_core::config;
use rmenu_core::error::Result;
use rmenu_core::file_handling;
use rmenu_core::profiles::MenuConfig;
use rmenu_core::selection::Selection;

use rmenu_cli::cli_args::Args;
use rmenu_cli::items::collect_items;
use rmenu_cli::output::{describe_profiles, format_command};
use rmenu_cli::profile_choice::choose_profile;

/// Exit status when the user dismissed the menu, as dmenu does.
const NOTHING_SELECTED_EXIT_CODE: u8 = 1;
const ERROR_EXIT_CODE: u8 = 2;

enum Outcome {
    Done,
    NothingSelected,
}

/// An explicitly given config file must exist; the default one is optional.
fn load_config(args: &Args) -> Result<MenuConfig> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    if args.config_path.is_some() {
        file_handling::get_menu_config(&config_path)
    } else {
        file_handling::get_optional_menu_config(&config_path)
    }
}

fn execute() -> Result<Outcome> {
    let args = Args::parse();
    let config = load_config(&args)?;

    if args.list_profiles {
        for line in describe_profiles(&config) {
            println!("{line}");
        }
        return Ok(Outcome::Done);
    }

    let profile = choose_profile(&args, &config)?;

    if args.menu_version {
        print!("{}", profile.build(Vec::new()).version()?);
        return Ok(Outcome::Done);
    }

    let input = stdin();
    let read_input = !input.is_tty();
    let items = collect_items(&args.items, input.lock(), read_input)?;
    debug!("Showing {} items", items.len());

    let menu = profile.build(items);

    if args.dry_run {
        let (program, arguments) = menu.command();
        println!("{}", format_command(&program, &arguments));
        return Ok(Outcome::Done);
    }

    match menu.prompt_user()? {
        Selection::Item(item) => {
            println!("{item}");
            Ok(Outcome::Done)
        }
        Selection::Nothing => Ok(Outcome::NothingSelected),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::NothingSelected) => ExitCode::from(NOTHING_SELECTED_EXIT_CODE),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
