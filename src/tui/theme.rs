use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	pub header: Style,
	pub title: Style,
	pub prompt: Style,
	pub placeholder: Style,
	pub accent: Style,
	pub muted: Style,
	pub card: Style,
	pub card_selected: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn title_style(&self) -> Style {
		self.title
	}

	/// Prompt colour: accented while the search box has text.
	#[must_use]
	pub fn prompt_style(&self, active: bool) -> Style {
		if active { self.accent } else { self.prompt }
	}

	#[must_use]
	pub fn placeholder_style(&self) -> Style {
		self.placeholder
	}

	#[must_use]
	pub fn tab_active_style(&self) -> Style {
		self.accent.add_modifier(Modifier::BOLD)
	}

	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		self.muted
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.muted
	}

	#[must_use]
	pub fn card_style(&self, selected: bool) -> Style {
		if selected { self.card_selected } else { self.card }
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

const ORANGE: Color = Color::Rgb(209, 120, 66);

pub const ROAST: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(12, 15, 20)),
	title: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(82, 85, 94)),
	placeholder: Style::new().fg(Color::Rgb(82, 85, 94)),
	accent: Style::new().fg(ORANGE),
	muted: Style::new().fg(Color::Rgb(174, 174, 174)),
	card: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(33, 38, 46)),
	card_selected: Style::new()
		.fg(Color::Rgb(12, 15, 20))
		.bg(ORANGE),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	title: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(100, 100, 100)),
	placeholder: Style::new().fg(Color::Rgb(150, 150, 150)),
	accent: Style::new().fg(Color::Rgb(0, 102, 153)),
	muted: Style::new().fg(Color::Rgb(100, 100, 100)),
	card: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(241, 245, 249)),
	card_selected: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(0, 102, 153)),
};

pub const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(147, 161, 161))
		.bg(Color::Rgb(0, 43, 54)),
	title: Style::new()
		.fg(Color::Rgb(238, 232, 213))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(88, 110, 117)),
	placeholder: Style::new().fg(Color::Rgb(88, 110, 117)),
	accent: Style::new().fg(Color::Rgb(181, 137, 0)),
	muted: Style::new().fg(Color::Rgb(131, 148, 150)),
	card: Style::new()
		.fg(Color::Rgb(147, 161, 161))
		.bg(Color::Rgb(7, 54, 66)),
	card_selected: Style::new()
		.fg(Color::Rgb(0, 43, 54))
		.bg(Color::Rgb(181, 137, 0)),
};

const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition {
		name: "roast",
		theme: ROAST,
		aliases: &["dark", "default"],
	},
	ThemeDefinition {
		name: "light",
		theme: LIGHT,
		aliases: &[],
	},
	ThemeDefinition {
		name: "solarized",
		theme: SOLARIZED,
		aliases: &["solarized-dark"],
	},
];

#[must_use]
pub fn default_theme() -> Theme {
	ROAST
}

/// Canonical names of the built-in themes.
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS.iter().map(|definition| definition.name).collect()
}

/// Find a theme by name or alias, ignoring case and surrounding whitespace.
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| {
			definition.name == normalized || definition.aliases.contains(&normalized.as_str())
		})
		.map(|definition| definition.theme)
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}
