use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Layout, Margin, Rect},
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::{Block, Paragraph, Tabs, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{App, Theme};
use crate::catalog::CatalogItem;

const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 6;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let [header, title, search, tabs, primary, secondary_title, secondary, detail] =
			Layout::vertical([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(3),
				Constraint::Length(1),
				Constraint::Length(CARD_HEIGHT),
				Constraint::Length(1),
				Constraint::Length(CARD_HEIGHT),
				Constraint::Min(0),
			])
			.areas(area);

		self.render_header(frame, header);
		frame.render_widget(
			Paragraph::new(self.ui.screen_title.as_str()).style(self.theme.title_style()),
			title,
		);
		self.render_search(frame, search);
		self.render_tabs(frame, tabs);
		self.render_primary(frame, primary);
		frame.render_widget(
			Paragraph::new(self.ui.secondary_title.as_str()).style(self.theme.tab_inactive_style()),
			secondary_title,
		);
		render_cards(frame, secondary, self.view.secondary(), 0, None, &self.theme);
		self.render_detail(frame, detail);
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let counts = format!(
			"{} items · {} more",
			self.view.primary().len(),
			self.view.secondary().len()
		);
		let name_width = area.width.saturating_sub(counts.width() as u16) as usize;
		let line = Line::from(vec![
			Span::raw(format!("{:<name_width$}", self.ui.app_name)),
			Span::raw(counts),
		]);
		frame.render_widget(Paragraph::new(line).style(self.theme.header_style()), area);
	}

	fn render_search(&self, frame: &mut Frame, area: Rect) {
		let text = self.view.search_text();
		let active = !text.is_empty();
		let mut spans = vec![Span::styled("⌕ ", self.theme.prompt_style(active))];
		if active {
			spans.push(Span::raw(text.to_string()));
			spans.push(Span::styled("  (Esc to clear)", self.theme.placeholder_style()));
		} else {
			spans.push(Span::styled(
				self.ui.search_placeholder.as_str(),
				self.theme.placeholder_style(),
			));
		}
		let block = Block::bordered().border_style(self.theme.prompt_style(active));
		frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
	}

	fn render_tabs(&self, frame: &mut Frame, area: Rect) {
		let titles: Vec<Line> = self
			.view
			.categories()
			.iter()
			.map(|category| Line::from(category.label().to_string()))
			.collect();
		let tabs = Tabs::new(titles)
			.select(self.view.active_category_index())
			.divider(" ")
			.style(self.theme.tab_inactive_style())
			.highlight_style(self.theme.tab_active_style());
		frame.render_widget(tabs, area);
	}

	fn render_primary(&mut self, frame: &mut Frame, area: Rect) {
		if self.view.visible_items().is_empty() {
			let empty = Paragraph::new(self.ui.empty_message.as_str())
				.alignment(Alignment::Center)
				.style(self.theme.empty_style());
			let message_area = Rect {
				y: area.y + area.height / 2,
				height: area.height.min(1),
				..area
			};
			frame.render_widget(empty, message_area);
			return;
		}

		self.view.follow_selection(card_capacity(area.width));
		render_cards(
			frame,
			area,
			self.view.visible_items(),
			self.view.scroll_offset(),
			Some(self.view.selected_index()),
			&self.theme,
		);
	}

	fn render_detail(&self, frame: &mut Frame, area: Rect) {
		if area.height == 0 {
			return;
		}
		let block = Block::bordered().title(self.ui.detail_title.as_str());
		let Some(item) = self.view.selected_item() else {
			frame.render_widget(block, area);
			return;
		};

		let mut lines = vec![Line::from(Span::styled(
			item.name.clone(),
			Style::new().add_modifier(Modifier::BOLD),
		))];
		lines.push(Line::from(format!("id: {}", item.id)));
		for (key, value) in &item.details {
			let value = match value {
				serde_json::Value::String(text) => text.clone(),
				other => other.to_string(),
			};
			lines.push(Line::from(format!("{key}: {value}")));
		}
		frame.render_widget(
			Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
			area,
		);
	}
}

fn card_capacity(width: u16) -> usize {
	usize::from((width / CARD_WIDTH).max(1))
}

fn render_cards(
	frame: &mut Frame,
	area: Rect,
	items: &[CatalogItem],
	offset: usize,
	selected: Option<usize>,
	theme: &Theme,
) {
	let capacity = card_capacity(area.width);
	let mut x = area.x;
	for (index, item) in items.iter().enumerate().skip(offset).take(capacity) {
		let width = CARD_WIDTH.min(area.right().saturating_sub(x));
		if width < 3 {
			break;
		}
		let card_area = Rect {
			x,
			width,
			..area
		};
		render_card(frame, card_area, item, selected == Some(index), theme);
		x += CARD_WIDTH;
	}
}

fn render_card(frame: &mut Frame, area: Rect, item: &CatalogItem, selected: bool, theme: &Theme) {
	let inner_width = usize::from(area.width.saturating_sub(2));
	let mut lines = vec![Line::from(Span::styled(
		truncate_to_width(&item.name, inner_width),
		Style::new().add_modifier(Modifier::BOLD),
	))];
	if let Some(ingredient) = item.special_ingredient() {
		lines.push(Line::from(truncate_to_width(ingredient, inner_width)));
	}
	if let Some(rating) = item.average_rating() {
		lines.push(Line::from(format!("★ {rating:.1}")));
	}
	if let Some(price) = item.display_price() {
		lines.push(Line::from(truncate_to_width(&price, inner_width)));
	}

	let block = Block::bordered().style(theme.card_style(selected));
	frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`.
pub(crate) fn truncate_to_width(text: &str, max: usize) -> String {
	if text.width() <= max {
		return text.to_string();
	}
	if max == 0 {
		return String::new();
	}
	let mut truncated = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let width = ch.width().unwrap_or(0);
		if used + width + 1 > max {
			break;
		}
		truncated.push(ch);
		used += width;
	}
	truncated.push('…');
	truncated
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};
	use serde_json::json;

	use super::*;
	use crate::catalog::CatalogSet;
	use crate::view::{CatalogView, Category};

	fn app() -> App {
		App::new(CatalogView::new(CatalogSet::new(
			vec![
				CatalogItem::new("C1", "Cappuccino")
					.with_detail("special_ingredient", "With Steamed Milk")
					.with_detail("average_rating", 4.7),
				CatalogItem::new("C2", "Espresso"),
				CatalogItem::new("C3", "Cappuccino"),
			],
			vec![CatalogItem::new("B1", "Robusta Beans")],
		)))
	}

	fn render(app: &mut App) -> String {
		let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		terminal.backend().to_string()
	}

	#[test]
	fn screen_shows_tabs_cards_and_secondary_list() {
		let mut app = app();
		let screen = render(&mut app);
		assert!(screen.contains("Find the best coffee for you"));
		assert!(screen.contains("Find your coffee..."));
		assert!(screen.contains("All"));
		assert!(screen.contains("Espresso"));
		assert!(screen.contains("With Steamed Milk"));
		assert!(screen.contains("★ 4.7"));
		assert!(screen.contains("Coffee Beans"));
		assert!(screen.contains("Robusta Beans"));
		assert!(screen.contains("id: C1"));
	}

	#[test]
	fn empty_results_show_message() {
		let mut app = app();
		app.view.edit_search_text("matcha");
		let screen = render(&mut app);
		assert!(screen.contains("No coffee available"));
		assert!(screen.contains("matcha"));
		assert!(screen.contains("Esc to clear"));
	}

	#[test]
	fn category_filter_hides_other_cards() {
		let mut app = app();
		app.view.select_category(&Category::named("Espresso")).unwrap();
		let screen = render(&mut app);
		assert!(!screen.contains("With Steamed Milk"));
		assert!(screen.contains("id: C2"));
		assert!(screen.contains("Robusta Beans"));
	}

	#[test]
	fn narrow_terminal_scrolls_to_cursor() {
		let mut app = app();
		app.view.move_selection(2);
		let mut terminal = Terminal::new(TestBackend::new(30, 30)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		assert_eq!(app.view.scroll_offset(), 2);
	}

	#[test]
	fn truncation_respects_display_width() {
		assert_eq!(truncate_to_width("Latte", 10), "Latte");
		assert_eq!(truncate_to_width("Cappuccino", 5), "Capp…");
		assert_eq!(truncate_to_width("抹茶ラテ", 5), "抹茶…");
		assert_eq!(truncate_to_width("Mocha", 0), "");
	}

	#[test]
	fn detail_lists_opaque_attributes() {
		let mut app = App::new(CatalogView::new(CatalogSet::primary_only(vec![
			CatalogItem::new("C9", "Latte").with_detail("roasted", "Medium Roasted").with_detail(
				"prices",
				json!([{"size": "S", "price": "1.00", "currency": "$"}]),
			),
		])));
		let screen = render(&mut app);
		assert!(screen.contains("roasted: Medium Roasted"));
		assert!(screen.contains("$1.00 (S)"));
	}
}
