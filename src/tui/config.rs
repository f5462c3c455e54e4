/// Text used by the UI when rendering the storefront screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub app_name: String,
	pub screen_title: String,
	pub search_placeholder: String,
	pub secondary_title: String,
	pub empty_message: String,
	pub detail_title: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self::coffee()
	}
}

impl UiConfig {
	/// Labels for a coffee shop menu.
	#[must_use]
	pub fn coffee() -> Self {
		Self {
			app_name: "brewdeck".to_string(),
			screen_title: "Find the best coffee for you".to_string(),
			search_placeholder: "Find your coffee...".to_string(),
			secondary_title: "Coffee Beans".to_string(),
			empty_message: "No coffee available".to_string(),
			detail_title: "Details".to_string(),
		}
	}

	/// Neutral labels for any kind of catalog.
	#[must_use]
	pub fn generic() -> Self {
		Self {
			app_name: "brewdeck".to_string(),
			screen_title: "Browse the catalog".to_string(),
			search_placeholder: "Search items...".to_string(),
			secondary_title: "More items".to_string(),
			empty_message: "No items available".to_string(),
			detail_title: "Details".to_string(),
		}
	}

	/// Look up a preset by name.
	pub fn from_preset(name: &str) -> Option<Self> {
		match name.trim().to_ascii_lowercase().as_str() {
			"coffee" | "default" => Some(Self::coffee()),
			"generic" => Some(Self::generic()),
			_ => None,
		}
	}
}
