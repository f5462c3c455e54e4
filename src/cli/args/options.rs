use clap::ValueEnum;

/// Predefined UI presets selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum UiPresetArg {
    Coffee,
    Generic,
}

impl UiPresetArg {
    /// Return the preset identifier consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            UiPresetArg::Coffee => "coffee",
            UiPresetArg::Generic => "generic",
        }
    }
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
