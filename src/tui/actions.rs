use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, BrowseOutcome};
use crate::view::FilterMode;

impl App {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			return match key.code {
				KeyCode::Char('c') => Some(BrowseOutcome::cancelled(&self.view)),
				_ => None,
			};
		}

		match key.code {
			KeyCode::Esc => {
				if self.view.search_text().is_empty() {
					return Some(BrowseOutcome::cancelled(&self.view));
				}
				self.view.reset_search();
			}
			KeyCode::Enter => {
				if self.search_is_pending() {
					self.view.submit_search();
				} else {
					return Some(BrowseOutcome::accepted(&self.view));
				}
			}
			KeyCode::Tab => {
				self.view.cycle_category(1);
			}
			KeyCode::BackTab => {
				self.view.cycle_category(-1);
			}
			KeyCode::Left | KeyCode::Up => self.view.move_selection(-1),
			KeyCode::Right | KeyCode::Down => self.view.move_selection(1),
			KeyCode::Backspace => {
				let mut text = self.view.search_text().to_string();
				if text.pop().is_some() {
					self.view.edit_search_text(text);
				}
			}
			KeyCode::Char(ch) => {
				let mut text = self.view.search_text().to_string();
				text.push(ch);
				self.view.edit_search_text(text);
			}
			_ => {}
		}
		None
	}

	/// The search box holds text the results do not reflect yet, e.g. after a
	/// category was picked following a search.
	fn search_is_pending(&self) -> bool {
		let text = self.view.search_text();
		!text.is_empty() && *self.view.mode() != FilterMode::SearchFiltered(text.to_string())
	}
}
