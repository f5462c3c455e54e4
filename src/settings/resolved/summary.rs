use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Catalog: {}", config.catalog_path.display());
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	let _ = writeln!(out, "  Screen title: {}", config.ui.screen_title);
	let _ = writeln!(out, "  Search placeholder: {}", config.ui.search_placeholder);
	let _ = writeln!(out, "  Secondary title: {}", config.ui.secondary_title);
	let _ = writeln!(out, "  Empty message: {}", config.ui.empty_message);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(
		out,
		"  Initial category: {}",
		config.initial_category.as_deref().unwrap_or("All")
	);
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	match &config.log_file {
		Some(path) => {
			let _ = writeln!(out, "  Log file: {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Log file: (data directory)");
		}
	}
	out
}
