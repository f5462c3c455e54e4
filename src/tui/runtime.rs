use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::{App, BrowseOutcome};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

impl App {
	/// Take over the terminal until the user accepts an item or cancels.
	pub fn run(mut self) -> Result<BrowseOutcome> {
		let mut terminal = ratatui::init();
		tracing::info!("interactive session started");
		let result = self.event_loop(&mut terminal);
		ratatui::restore();

		match &result {
			Ok(outcome) => tracing::info!(
				accepted = outcome.accepted,
				selection = outcome.selection.as_ref().map(|item| item.id.as_str()),
				"interactive session finished"
			),
			Err(err) => tracing::error!(error = %err, "interactive session failed"),
		}
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<BrowseOutcome> {
		terminal.clear()?;
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			if !event::poll(POLL_INTERVAL)? {
				continue;
			}
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key) {
						return Ok(outcome);
					}
				}
				_ => {}
			}
		}
	}
}
