use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::UiPresetArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["brewdeck"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(!parsed.headless);
	assert!(parsed.config.is_empty());
}

#[test]
fn startup_filters_and_preset_are_parsed() {
	let parsed = CliArgs::parse_from([
		"brewdeck",
		"--catalog",
		"menu.json",
		"-q",
		"lat",
		"--category",
		"Espresso",
		"-u",
		"generic",
		"--headless",
		"-o",
		"json",
	]);
	assert_eq!(parsed.catalog.as_deref(), Some(std::path::Path::new("menu.json")));
	assert_eq!(parsed.initial_query.as_deref(), Some("lat"));
	assert_eq!(parsed.initial_category.as_deref(), Some("Espresso"));
	assert_eq!(parsed.ui_preset, Some(UiPresetArg::Generic));
	assert!(parsed.headless);
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn config_flag_can_repeat() {
	let parsed = CliArgs::parse_from(["brewdeck", "-c", "a.toml", "--config", "b.toml"]);
	assert_eq!(parsed.config.len(), 2);
}

#[test]
fn catalog_is_a_named_option() {
	let parsed = CliArgs::try_parse_from(["brewdeck", "--catalog", "x.json"]).expect("parses");
	assert_eq!(parsed.catalog.as_deref(), Some(std::path::Path::new("x.json")));
	assert!(CliArgs::try_parse_from(["brewdeck", "x.json"]).is_err());
}
