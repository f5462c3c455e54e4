use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, UiPresetArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `brewdeck` binary.
#[derive(Parser, Debug)]
#[command(
    name = "brewdeck",
    version,
    long_version = long_version(),
    about = "Browse a storefront catalog by category or name",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        long = "catalog",
        value_name = "FILE",
        env = "BREWDECK_CATALOG",
        help = "JSON catalog file to browse (default: `catalog.path` from configuration)"
    )]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "BREWDECK_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Search for this text on startup (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        short = 'C',
        long = "category",
        value_name = "NAME",
        help = "Select this category on startup (default: All)"
    )]
    pub(crate) initial_category: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: roast)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'u',
        long = "ui-preset",
        value_enum,
        help = "Choose a preset for UI labels (default: coffee)"
    )]
    pub(crate) ui_preset: Option<UiPresetArg>,
    #[arg(
        short = 't',
        long,
        value_name = "TEXT",
        help = "Override the screen title (default: preset value)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        long = "search-placeholder",
        value_name = "TEXT",
        help = "Override the search box placeholder (default: preset value)"
    )]
    pub(crate) search_placeholder: Option<String>,
    #[arg(
        long = "secondary-title",
        value_name = "TEXT",
        help = "Override the secondary list title (default: preset value)"
    )]
    pub(crate) secondary_title: Option<String>,
    #[arg(
        long = "empty-message",
        value_name = "TEXT",
        help = "Override the message shown when nothing matches (default: preset value)"
    )]
    pub(crate) empty_message: Option<String>,
    #[arg(
        long = "headless",
        help = "Print the filtered list instead of starting the interactive UI (default: disabled)"
    )]
    pub(crate) headless: bool,
    #[arg(
        long = "list-categories",
        help = "List the catalog's categories and exit (default: disabled)"
    )]
    pub(crate) list_categories: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration; interactive runs print it to stderr on exit (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        short = 'v',
        long,
        help = "Log at debug level unless RUST_LOG says otherwise (default: disabled)"
    )]
    pub(crate) verbose: bool,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "Write interactive session logs here (default: brewdeck.log in the data directory)"
    )]
    pub(crate) log_file: Option<PathBuf>,
}
