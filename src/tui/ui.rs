use crate::core::navigation::Phase;
use crate::core::state::{App, View};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardLayout, CardView, LoadingPlaceholder, SearchView, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const BROWSER_HINTS: &str =
    " space details  ←/→ prev/next  s speak  / search  q quit ";
const SEARCH_HINTS: &str = " type to filter  ↑/↓ select  enter speak  esc back ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hint_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.source_label.clone(),
        app.progress_label(),
        app.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    tui.card_area = None;
    let hints = match app.view {
        View::Browser => {
            draw_browser(frame, main_area, app, tui);
            BROWSER_HINTS
        }
        View::Search => {
            SearchView::new(&mut tui.search, app.deck.cards()).render(frame, main_area);
            SEARCH_HINTS
        }
    };

    frame.render_widget(
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}

fn draw_browser(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let len = app.deck.len();
    let (show_details, finished) = match app.phase() {
        Phase::Empty => {
            LoadingPlaceholder.render(frame, area);
            return;
        }
        Phase::Browsing { show_details, .. } => (show_details, false),
        Phase::Finished => (false, true),
    };
    let Some(card) = app.current_card() else {
        LoadingPlaceholder.render(frame, area);
        return;
    };

    let mut view = CardView {
        card,
        position: app.navigation.index() + 1,
        total: len,
        show_details,
        finished,
        can_prev: app.navigation.can_prev(len),
        can_next: app.navigation.can_next(len),
    };
    view.render(frame, area);
    tui.card_area = Some(CardLayout::new(area).card);
}

/// Whether a click at (`column`, `row`) landed on the card.
pub fn hit_test_card(column: u16, row: u16, card_area: Option<Rect>) -> bool {
    card_area.is_some_and(|area| area.contains(Position::new(column, row)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{loaded_app, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_loading() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Loading..."));
        assert!(tui.card_area.is_none());
    }

    #[test]
    fn test_draw_browser_records_card_area() {
        let app = loaded_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("card 1/3"));
        assert!(text.contains("cat"));
        assert!(text.contains("s speak"));

        let area = tui.card_area.unwrap();
        assert!(hit_test_card(area.x + 1, area.y + 1, tui.card_area));
        assert!(!hit_test_card(0, 0, tui.card_area));
    }

    #[test]
    fn test_draw_finished() {
        let mut app = loaded_app();
        for _ in 0..3 {
            update(&mut app, Action::NextCard);
        }
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("finished 3/3"));
        assert!(text.contains("Congratulations"));
    }

    #[test]
    fn test_draw_search() {
        let mut app = loaded_app();
        update(&mut app, Action::OpenSearch);
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Search"));
        assert!(text.contains("esc back"));
        assert!(tui.card_area.is_none());
    }

    #[test]
    fn test_hit_test_without_card() {
        assert!(!hit_test_card(5, 5, None));
    }
}
