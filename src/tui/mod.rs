//! Terminal front end for the storefront screen.
//!
//! [`App`] only reads [`CatalogView`] state and calls its operations in
//! response to key presses; all filtering lives in the view.

mod actions;
mod config;
mod outcome;
mod render;
mod runtime;
pub mod theme;

pub use config::UiConfig;
pub use outcome::BrowseOutcome;
pub use theme::Theme;

use crate::view::CatalogView;

/// Interactive browser over a [`CatalogView`].
#[derive(Debug)]
pub struct App {
	view: CatalogView,
	ui: UiConfig,
	theme: Theme,
}

impl App {
	#[must_use]
	pub fn new(view: CatalogView) -> Self {
		Self {
			view,
			ui: UiConfig::default(),
			theme: Theme::default(),
		}
	}

	#[must_use]
	pub fn with_ui_config(mut self, ui: UiConfig) -> Self {
		self.ui = ui;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	pub fn view(&self) -> &CatalogView {
		&self.view
	}
}
