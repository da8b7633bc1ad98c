//! Interactive ratatui front end: search input, field filter, result
//! card grid, pagination, status line.
//!
//! The event loop owns all state. Fetches run on worker threads and post
//! sequence-tagged outcomes into a [`sink::FetchSink`]; each loop tick
//! drains the sink into the controller before drawing, so a superseded
//! response can never overwrite a newer page.

pub mod sink;
pub mod widgets;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use miette::IntoDiagnostic;

use crate::catalog::{VolumeSource, VolumesClient};
use crate::config::AppConfig;
use crate::query::QueryComposer;
use crate::search::{FetchOutcome, FetchTicket, PageDirection, SearchController};

/// TUI application state.
pub struct ScoutTui {
    composer: QueryComposer,
    controller: SearchController,
    source: Arc<dyn VolumeSource>,
    sink: Arc<sink::FetchSink>,
    should_quit: bool,
}

impl ScoutTui {
    /// Create a TUI instance backed by the live catalog endpoint.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_source(config, Arc::new(VolumesClient::new(config)))
    }

    /// Create a TUI instance with an explicit volume source.
    pub fn with_source(config: &AppConfig, source: Arc<dyn VolumeSource>) -> Self {
        Self {
            composer: QueryComposer::new(),
            controller: SearchController::new(config.page_size),
            source,
            sink: Arc::new(sink::FetchSink::new()),
            should_quit: false,
        }
    }

    /// Run the TUI event loop.
    pub fn run(&mut self) -> miette::Result<()> {
        let mut terminal = ratatui::init();

        loop {
            // Apply outcomes posted by fetch workers since the last tick.
            self.drain_outcomes();

            terminal
                .draw(|frame| widgets::render(frame, &self.composer, &self.controller))
                .into_diagnostic()?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100)).into_diagnostic()? {
                if let Event::Key(key) = event::read().into_diagnostic()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    self.handle_key(key.code, key.modifiers);
                }
            }
        }

        ratatui::restore();
        Ok(())
    }

    fn drain_outcomes(&mut self) {
        for outcome in self.sink.drain() {
            self.controller.apply(outcome.seq, outcome.result);
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Enter => {
                // Whitespace-only input: no query, no fetch.
                if let Some(query) = self.composer.submit() {
                    let ticket = self.controller.begin_search(query);
                    self.dispatch(ticket);
                }
            }
            KeyCode::Tab => {
                self.composer.cycle_filter();
            }
            KeyCode::Left => {
                if let Some(ticket) = self.controller.page(PageDirection::Previous) {
                    self.dispatch(ticket);
                }
            }
            KeyCode::Right => {
                if let Some(ticket) = self.controller.page(PageDirection::Next) {
                    self.dispatch(ticket);
                }
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.composer.push(c);
            }
            KeyCode::Backspace => {
                self.composer.backspace();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Execute a fetch ticket on a worker thread.
    ///
    /// The thread posts its tagged outcome into the sink; stale outcomes
    /// are discarded at apply time, never cancelled mid-flight.
    fn dispatch(&self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        let sink = Arc::clone(&self.sink);
        let page_size = self.controller.page_size();

        std::thread::spawn(move || {
            let result = source.fetch(&ticket.query, ticket.offset, page_size);
            sink.push(FetchOutcome {
                seq: ticket.seq,
                result,
            });
        });
    }
}

/// Launch the TUI against the live catalog endpoint.
pub fn launch(config: &AppConfig) -> miette::Result<()> {
    let mut tui = ScoutTui::new(config);
    tui.run()
}
