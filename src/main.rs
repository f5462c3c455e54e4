mod cli;
mod settings;
mod workflow;

use std::path::Path;

use anyhow::{Context, Result};
use brewdeck::logging::{self, LogTarget};
use brewdeck::tui::theme;
use cli::{CliArgs, OutputFormat, format_items_plain, format_view_json, parse_cli, print_json, print_plain};
use workflow::BrowseWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	let interactive = is_interactive(&cli);
	let target = log_target(interactive, resolved.log_file.as_deref(), LogTarget::default_file)?;
	logging::initialize(&resolved.log_level, &target)?;

	// The UI clears the screen, so interactive runs report after the session.
	if cli.print_config && !interactive {
		resolved.print_summary();
	}

	let workflow = BrowseWorkflow::from_config(&resolved)?;

	if cli.list_categories {
		for category in workflow.view().categories() {
			println!("{category}");
		}
		return Ok(());
	}

	if cli.headless {
		return print_view(cli.output, &workflow);
	}

	run_browser(cli.output, workflow)?;

	if cli.print_config {
		resolved.eprint_summary();
	}
	Ok(())
}

fn is_interactive(cli: &CliArgs) -> bool {
	!(cli.headless || cli.list_categories)
}

/// Interactive sessions log to a file so the UI keeps the terminal. Never
/// falls back to stderr while the UI owns it.
fn log_target(
	interactive: bool,
	log_file: Option<&Path>,
	default_file: impl FnOnce() -> Result<LogTarget>,
) -> Result<LogTarget> {
	match (log_file, interactive) {
		(Some(path), _) => Ok(LogTarget::File(path.to_path_buf())),
		(None, true) => default_file().context("cannot place the session log; pass --log-file"),
		(None, false) => Ok(LogTarget::Stderr),
	}
}

fn print_view(format: OutputFormat, workflow: &BrowseWorkflow) -> Result<()> {
	match format {
		OutputFormat::Plain => print!("{}", format_items_plain(workflow.view().visible_items())),
		OutputFormat::Json => println!("{}", format_view_json(workflow.view())?),
	}
	Ok(())
}

/// Run the interactive browser and print the outcome in the chosen format.
fn run_browser(format: OutputFormat, workflow: BrowseWorkflow) -> Result<()> {
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
