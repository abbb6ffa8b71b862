//! # Search View Component
//!
//! The `/search` route: a query box, a result count, and the matching cards.
//! The list is recomputed from the deck on every keystroke and every frame.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SearchState` lives in `TuiState` and is reset each time the view opens
//! - `SearchView` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::card::Flashcard;
use crate::core::search::{filter, result_count_line};
use crate::tui::event::TuiEvent;

/// Persistent state for the search view.
#[derive(Default)]
pub struct SearchState {
    pub query: String,
    pub selected: usize,
    pub list_state: ListState,
}

/// Events emitted by the search view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Speak the selected result's headword.
    Speak(String),
    /// Return to the card browser.
    Back,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key event against the current deck.
    pub fn handle_event(&mut self, event: &TuiEvent, cards: &[Flashcard]) -> Option<SearchEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Tab => Some(SearchEvent::Back),
            TuiEvent::InputChar(c) => {
                self.query.push(*c);
                self.selected = 0;
                None
            }
            TuiEvent::Backspace => {
                if self.query.pop().is_some() {
                    self.selected = 0;
                }
                None
            }
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                let count = filter(&self.query, cards).len();
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
                None
            }
            TuiEvent::Submit => filter(&self.query, cards)
                .get(self.selected)
                .map(|card| SearchEvent::Speak(card.word.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the search view.
pub struct SearchView<'a> {
    state: &'a mut SearchState,
    cards: &'a [Flashcard],
}

impl<'a> SearchView<'a> {
    pub fn new(state: &'a mut SearchState, cards: &'a [Flashcard]) -> Self {
        Self { state, cards }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, count_area, list_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let input = Paragraph::new(self.state.query.as_str()).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title(" Search "),
        );
        frame.render_widget(input, input_area);

        let cursor_x = input_area.x + 1 + self.state.query.width() as u16;
        frame.set_cursor_position(Position::new(
            cursor_x.min(input_area.right().saturating_sub(2)),
            input_area.y + 1,
        ));

        let results = filter(&self.state.query, self.cards);

        if let Some(count) = result_count_line(&self.state.query, results.len()) {
            frame.render_widget(
                Span::styled(count, Style::default().fg(Color::DarkGray)),
                count_area,
            );
        }

        if results.is_empty() {
            let empty = Paragraph::new("No matching cards.")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            frame.render_widget(empty, list_area);
            self.state.list_state.select(None);
            return;
        }

        self.state.selected = self.state.selected.min(results.len() - 1);
        self.state.list_state.select(Some(self.state.selected));

        let inner_width = list_area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = results
            .iter()
            .map(|card| {
                let word_width = card.word.width() + 3;
                let definition =
                    truncate_str(&card.definition, inner_width.saturating_sub(word_width));
                ListItem::new(Line::from(vec![
                    Span::styled(
                        card.word.clone(),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" - "),
                    Span::raw(definition),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}
