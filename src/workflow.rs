use anyhow::{Context, Result, bail};
use brewdeck::tui::theme;
use brewdeck::view::ALL_LABEL;
use brewdeck::{App, BrowseOutcome, CatalogView, Category, Theme, UiConfig, catalog};

use crate::settings::ResolvedConfig;

/// Coordinates loading the catalog, applying startup filters and running the
/// interactive browser.
pub(crate) struct BrowseWorkflow {
	view: CatalogView,
	ui: UiConfig,
	theme: Theme,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
		let report = catalog::load_path(&config.catalog_path).with_context(|| {
			format!("failed to load catalog {}", config.catalog_path.display())
		})?;
		if !report.skipped.is_empty() {
			tracing::warn!(
				skipped = report.skipped.len(),
				"some catalog records were malformed and left out"
			);
		}

		let mut view = CatalogView::new(report.catalogs);
		if let Some(name) = &config.initial_category {
			let category = resolve_category(&view, name);
			if view.select_category(&category).is_err() {
				let available: Vec<_> = view.categories().iter().map(Category::label).collect();
				bail!(
					"unknown category '{name}' (available: {})",
					available.join(", ")
				);
			}
		}
		if !config.initial_query.is_empty() {
			view.edit_search_text(config.initial_query.clone());
		}

		let theme = config
			.theme
			.as_deref()
			.and_then(theme::by_name)
			.unwrap_or_default();

		Ok(Self {
			view,
			ui: config.ui.clone(),
			theme,
		})
	}

	pub(crate) fn view(&self) -> &CatalogView {
		&self.view
	}

	pub(crate) fn run(self) -> Result<BrowseOutcome> {
		App::new(self.view)
			.with_ui_config(self.ui)
			.with_theme(self.theme)
			.run()
	}
}

/// Map a user supplied category name onto the view's categories. A real item
/// category wins over the synthetic "All" label.
fn resolve_category(view: &CatalogView, name: &str) -> Category {
	let named = Category::named(name);
	if name == ALL_LABEL && !view.categories().contains(&named) {
		Category::All
	} else {
		named
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;
	use std::path::Path;

	use super::*;

	fn config_for(path: &Path) -> ResolvedConfig {
		ResolvedConfig {
			catalog_path: path.to_path_buf(),
			initial_query: String::new(),
			initial_category: None,
			theme: None,
			ui: UiConfig::default(),
			log_level: "info".into(),
			log_file: None,
		}
	}

	fn catalog_file() -> tempfile::NamedTempFile {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(
			file,
			r#"{{"primary": [
				{{"id": "C1", "name": "Latte"}},
				{{"id": "C2", "name": "Mocha"}},
				{{"id": "C3", "name": "Latte"}}
			], "secondary": [{{"id": "B1", "name": "Robusta"}}]}}"#
		)
		.unwrap();
		file
	}

	#[test]
	fn startup_category_and_query_are_applied_in_order() {
		let file = catalog_file();
		let config = ResolvedConfig {
			initial_category: Some("Latte".into()),
			initial_query: "mo".into(),
			..config_for(file.path())
		};

		let workflow = BrowseWorkflow::from_config(&config).unwrap();
		let view = workflow.view();
		assert_eq!(view.active_category(), &Category::All);
		assert_eq!(view.visible_items().len(), 1);
		assert_eq!(view.secondary().len(), 1);
	}

	#[test]
	fn all_label_selects_synthetic_category() {
		let file = catalog_file();
		let config = ResolvedConfig {
			initial_category: Some("All".into()),
			..config_for(file.path())
		};
		let workflow = BrowseWorkflow::from_config(&config).unwrap();
		assert_eq!(workflow.view().visible_items().len(), 3);
	}

	#[test]
	fn unknown_startup_category_is_an_error() {
		let file = catalog_file();
		let config = ResolvedConfig {
			initial_category: Some("Chai".into()),
			..config_for(file.path())
		};
		let err = BrowseWorkflow::from_config(&config).err().unwrap();
		let message = err.to_string();
		assert!(message.contains("Chai"));
		assert!(message.contains("All, Latte, Mocha"));
	}

	#[test]
	fn unreadable_catalog_has_context() {
		let dir = tempfile::tempdir().unwrap();
		let err = BrowseWorkflow::from_config(&config_for(&dir.path().join("menu.json")))
			.err()
			.unwrap();
		assert!(err.to_string().contains("failed to load catalog"));
	}
}
