use std::io::{self, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use ratatui::crossterm::execute;
use tracing::{debug, info};

use super::{App, PickOutcome, UiConfig};

/// Construct an [`App`] for `labels` and run it to completion.
pub fn run(labels: Vec<String>, ui: UiConfig) -> Result<PickOutcome> {
	let mut app = App::new(labels, ui);
	app.run()
}

/// Raw mode, the alternate screen and mouse capture for one session.
///
/// Dropping the session restores the terminal, including when the event loop
/// bails out with an error or unwinds from a panic.
struct TerminalSession {
	terminal: DefaultTerminal,
}

impl TerminalSession {
	fn start() -> Result<Self> {
		let mut terminal = ratatui::init();
		if let Err(err) = execute!(stdout(), EnableMouseCapture) {
			ratatui::restore();
			return Err(err).context("failed to enable mouse capture");
		}
		if let Err(err) = terminal.clear() {
			let _ = execute!(stdout(), DisableMouseCapture);
			ratatui::restore();
			return Err(err).context("failed to clear the terminal");
		}
		debug!(event = "ui.session.start");
		Ok(Self { terminal })
	}
}

impl Drop for TerminalSession {
	fn drop(&mut self) {
		let _ = execute!(stdout(), DisableMouseCapture);
		ratatui::restore();
		debug!(event = "ui.session.end");
	}
}

impl App {
	/// Pump terminal events until the user accepts or cancels.
	pub fn run(&mut self) -> Result<PickOutcome> {
		let mut session = TerminalSession::start()?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> io::Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result = self.event_loop(&mut session.terminal, &event_rx);

		event_loop_running.store(false, Ordering::Relaxed);
		drop(event_rx);
		let input_result = match event_thread.join() {
			Ok(join_result) => join_result,
			Err(err) => std::panic::resume_unwind(err),
		};
		drop(session);

		let outcome = result?;
		input_result.context("terminal input failed")?;
		info!(
			event = "ui.session.outcome",
			accepted = outcome.accepted,
			selected = outcome.selected.len()
		);
		Ok(outcome)
	}

	/// Draw, then apply events one at a time with a redraw after each so that
	/// pointer events always hit the layout the user is looking at.
	fn event_loop(
		&mut self,
		terminal: &mut DefaultTerminal,
		events: &mpsc::Receiver<Event>,
	) -> Result<PickOutcome> {
		terminal.draw(|frame| self.draw(frame))?;

		loop {
			let event = events
				.recv()
				.map_err(|_| anyhow!("input event channel disconnected"))?;
			if let Some(outcome) = self.handle_event(event) {
				return Ok(outcome);
			}
			terminal.draw(|frame| self.draw(frame))?;
		}
	}
}
