use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Price tier shown on item cards. Cards show the third tier when present.
const DISPLAY_PRICE_TIER: usize = 2;

/// A single product record supplied by the catalog provider.
///
/// `name` doubles as the grouping key: items sharing a name form one category.
/// Everything else the provider sends is kept verbatim in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
	pub id: String,
	pub name: String,
	#[serde(flatten)]
	pub details: Map<String, Value>,
}

impl CatalogItem {
	/// Create an item without any display attributes.
	#[must_use]
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			details: Map::new(),
		}
	}

	/// Attach an opaque display attribute.
	#[must_use]
	pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.details.insert(key.into(), value.into());
		self
	}

	/// Look up a display attribute as a string.
	pub fn detail_str(&self, key: &str) -> Option<&str> {
		self.details.get(key).and_then(Value::as_str)
	}

	pub fn special_ingredient(&self) -> Option<&str> {
		self.detail_str("special_ingredient")
	}

	pub fn average_rating(&self) -> Option<f64> {
		self.details.get("average_rating").and_then(Value::as_f64)
	}

	/// Price label for the card: the third tier, falling back to the last one.
	pub fn display_price(&self) -> Option<String> {
		let tiers = self.details.get("prices")?.as_array()?;
		let tier = tiers.get(DISPLAY_PRICE_TIER).or_else(|| tiers.last())?;
		let price = match tier.get("price")? {
			Value::String(text) => text.clone(),
			Value::Number(number) => number.to_string(),
			_ => return None,
		};
		let currency = tier.get("currency").and_then(Value::as_str).unwrap_or("");
		let size = tier.get("size").and_then(Value::as_str);
		Some(match size {
			Some(size) => format!("{currency}{price} ({size})"),
			None => format!("{currency}{price}"),
		})
	}
}

/// Immutable, cheaply cloneable snapshot of an ordered sequence of items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
	items: Arc<[CatalogItem]>,
}

impl Catalog {
	#[must_use]
	pub fn new(items: Vec<CatalogItem>) -> Self {
		Self {
			items: items.into(),
		}
	}

	#[must_use]
	pub fn empty() -> Self {
		Self::default()
	}

	/// Fresh owned copy of every item, in source order.
	pub fn to_vec(&self) -> Vec<CatalogItem> {
		self.items.to_vec()
	}
}

impl Deref for Catalog {
	type Target = [CatalogItem];

	fn deref(&self) -> &Self::Target {
		&self.items
	}
}

impl From<Vec<CatalogItem>> for Catalog {
	fn from(items: Vec<CatalogItem>) -> Self {
		Self::new(items)
	}
}

/// The two catalogs the storefront screen displays.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
	pub primary: Catalog,
	pub secondary: Catalog,
}

impl CatalogSet {
	#[must_use]
	pub fn new(primary: impl Into<Catalog>, secondary: impl Into<Catalog>) -> Self {
		Self {
			primary: primary.into(),
			secondary: secondary.into(),
		}
	}

	/// Build a set with only a primary catalog.
	#[must_use]
	pub fn primary_only(primary: impl Into<Catalog>) -> Self {
		Self::new(primary, Catalog::empty())
	}
}
