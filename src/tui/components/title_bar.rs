//! # TitleBar Component
//!
//! Top status bar showing where the deck came from and how far the reader is.
//!
//! ## Conditional Formatting
//!
//! 1. **Progress and status**: `"Flashdeck (cards.json) | card 2/20 | Speaking..."`
//! 2. **Progress only**: `"Flashdeck (cards.json) | card 2/20"`
//! 3. **Status only** (deck not loaded yet): `"Flashdeck (cards.json) | Loading..."`
//! 4. **Default**: `"Flashdeck (cards.json)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Top status bar component. Stateless: every field is a prop.
pub struct TitleBar {
    /// Deck source (URL or file path)
    pub source_label: String,
    /// `card i/n` or `finished n/n`; `None` while loading
    pub progress: Option<String>,
    /// Transient status (e.g. "Loading...")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(source_label: String, progress: Option<String>, status_message: String) -> Self {
        Self {
            source_label,
            progress,
            status_message,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("Flashdeck ({})", self.source_label);
        if let Some(ref progress) = self.progress {
            text.push_str(" | ");
            text.push_str(progress);
        }
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().fg(Color::Cyan));
        frame.render_widget(span, area);
    }
}
