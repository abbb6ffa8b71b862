//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! - The deck load runs once as a tokio task and reports back over a channel.
//!   It is never cancelled: if the user quits first, its result is dropped.
//! - Redraws only happen after an input event or a background action;
//!   otherwise the loop sleeps in `poll` for up to 250ms.
//! - `Effect::Speak` is handed to the speech engine and forgotten.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::{DeckLocation, ResolvedConfig};
use crate::core::state::{App, View};
use crate::source::{DeckSource, FileDeckSource, HttpDeckSource};
use crate::speech::{CommandSpeech, SilentSpeech, SpeechEngine};
use crate::tui::components::{SearchEvent, SearchState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    /// Search route state; replaced every time the route opens
    pub search: SearchState,
    /// Where the card was last drawn, for mouse clicks
    pub card_area: Option<Rect>,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the deck source for a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn DeckSource> {
    match &config.location {
        DeckLocation::File(path) => Arc::new(FileDeckSource::new(path.clone())),
        DeckLocation::Url(url) => Arc::new(HttpDeckSource::new(url.clone())),
    }
}

/// Build the speech engine for a resolved config.
pub fn build_speech(config: &ResolvedConfig) -> Arc<dyn SpeechEngine> {
    if config.speech_enabled {
        Arc::new(CommandSpeech::new(
            config.speech_command.clone(),
            config.speech_args.clone(),
        ))
    } else {
        Arc::new(SilentSpeech)
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let speech = build_speech(&config);
    info!("Deck source: {}, speech: {}", source.name(), speech.name());

    let mut app = App::new(source.name().to_string());
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_load(source, tx);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = route_event(&event, &app, &mut tui) else {
                continue;
            };
            if apply(&mut app, &mut tui, action, speech.as_ref()) {
                break 'main;
            }
        }

        // Handle background task actions (the deck load)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {}", action_name(&action));
            if apply(&mut app, &mut tui, action, speech.as_ref()) {
                break 'main;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Translate a terminal event into a core action for the active view.
fn route_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    match app.view {
        View::Browser => match event {
            TuiEvent::InputChar(' ') | TuiEvent::Submit => Some(Action::ToggleDetails),
            TuiEvent::MouseClick(column, row) => {
                ui::hit_test_card(*column, *row, tui.card_area).then_some(Action::ToggleDetails)
            }
            // Disabled controls swallow their keys
            TuiEvent::Right | TuiEvent::InputChar('n') | TuiEvent::InputChar('l') => app
                .navigation
                .can_next(app.deck.len())
                .then_some(Action::NextCard),
            TuiEvent::Left | TuiEvent::InputChar('p') | TuiEvent::InputChar('h') => app
                .navigation
                .can_prev(app.deck.len())
                .then_some(Action::PrevCard),
            TuiEvent::InputChar('s') => Some(Action::SpeakCurrent),
            TuiEvent::InputChar('/') | TuiEvent::Tab => Some(Action::OpenSearch),
            TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Action::Quit),
            _ => None,
        },
        View::Search => match tui.search.handle_event(event, app.deck.cards())? {
            SearchEvent::Speak(word) => Some(Action::SpeakWord(word)),
            SearchEvent::Back => Some(Action::OpenBrowser),
        },
    }
}

/// Run an action through the reducer and carry out its effect.
/// Returns true when the app should quit.
fn apply(app: &mut App, tui: &mut TuiState, action: Action, speech: &dyn SpeechEngine) -> bool {
    let opens_search = matches!(action, Action::OpenSearch) && app.view != View::Search;
    let effect = update(app, action);
    if opens_search {
        tui.search = SearchState::new();
    }
    match effect {
        Effect::Quit => true,
        Effect::Speak(word) => {
            speech.speak(&word);
            app.status_message = format!("Speaking: {word}");
            false
        }
        Effect::None => false,
    }
}

fn action_name(action: &Action) -> String {
    match action {
        // Avoid dumping the whole deck into the log
        Action::DeckLoaded(deck) => format!("DeckLoaded({} cards)", deck.len()),
        other => format!("{other:?}"),
    }
}

/// Load the deck once in the background and report the outcome.
fn spawn_load(source: Arc<dyn DeckSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning deck load from {}", source.name());
    tokio::spawn(async move {
        let action = match source.load().await {
            Ok(deck) => Action::DeckLoaded(deck),
            Err(e) => Action::LoadFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Deck load finished after the UI closed; result discarded");
        }
    });
}
