//! # Card View
//!
//! The browser's main panel: one bordered card, the previous/next controls
//! under it, and the end-of-deck message once the reader is finished.
//!
//! ```text
//! ╭──────────── 2/20 ────────────╮
//! │            abate             │
//! │                              │
//! │ Definition:                  │
//! │   to lessen in intensity     │
//! │ Examples:                    │
//! │   • The storm abated.        │
//! │ Notes: formal                │
//! ╰──────────────────────────────╯
//!      ◀ Previous    Next ▶
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::card::Flashcard;
use crate::tui::component::Component;

/// Cards never grow wider than this, like an index card on a wide screen.
pub const MAX_CARD_WIDTH: u16 = 64;

const FINISHED_MESSAGE: &str = "Congratulations, you went through every card!";

/// Stateless card panel. All fields are props.
pub struct CardView<'a> {
    pub card: &'a Flashcard,
    pub position: usize,
    pub total: usize,
    pub show_details: bool,
    pub finished: bool,
    pub can_prev: bool,
    pub can_next: bool,
}

/// Areas of the browser panel, shared by rendering and mouse hit-testing.
pub struct CardLayout {
    pub card: Rect,
    pub controls: Rect,
    pub message: Rect,
}

impl CardLayout {
    pub fn new(area: Rect) -> Self {
        let [column] = Layout::horizontal([Constraint::Max(MAX_CARD_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [card, _, controls, message] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(column);
        Self {
            card,
            controls,
            message,
        }
    }
}

impl CardView<'_> {
    fn card_lines(&self, width: usize) -> Vec<Line<'static>> {
        let heading = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![Line::from(Span::styled(
            self.card.word.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .centered()];

        if !self.show_details {
            if self.finished {
                return lines;
            }
            lines.push(Line::default());
            lines.push(
                Line::from(Span::styled(
                    "space: show details",
                    Style::default().fg(Color::DarkGray),
                ))
                .centered(),
            );
            return lines;
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Definition:", heading)));
        lines.extend(indented(&self.card.definition, width, "  ", "  "));
        lines.push(Line::default());

        lines.push(Line::from(Span::styled("Examples:", heading)));
        for example in &self.card.examples {
            lines.extend(indented(example, width, "  • ", "    "));
        }
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            format!("Notes: {}", self.card.notes),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        )));
        lines
    }

    fn controls_line(&self) -> Line<'static> {
        let enabled = |on: bool, color: Color| {
            if on {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
            }
        };
        Line::from(vec![
            Span::styled("◀ Previous", enabled(self.can_prev, Color::Yellow)),
            Span::raw("    "),
            Span::styled("Next ▶", enabled(self.can_next, Color::Green)),
        ])
        .centered()
    }
}

/// Wrap `text` to `width` columns with a hanging indent.
fn indented(text: &str, width: usize, first: &str, rest: &str) -> Vec<Line<'static>> {
    let options = textwrap::Options::new(width.max(first.len() + 1))
        .initial_indent(first)
        .subsequent_indent(rest);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| Line::from(line.into_owned()))
        .collect()
}

impl Component for CardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = CardLayout::new(area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray))
            .title(Line::from(format!(" {}/{} ", self.position, self.total)).centered());

        let inner_width = layout.card.width.saturating_sub(2) as usize;
        let card = Paragraph::new(self.card_lines(inner_width))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(card, layout.card);

        frame.render_widget(Paragraph::new(self.controls_line()), layout.controls);

        if self.finished {
            let message = Paragraph::new(Line::from(Span::styled(
                FINISHED_MESSAGE,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            frame.render_widget(message, layout.message);
        }
    }
}
