//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as struct fields:
//! - `TitleBar`: Top status bar showing the deck source and progress
//! - `CardView`: One flashcard with its previous/next controls
//! - `LoadingPlaceholder`: Shown until the deck arrives
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchState` / `SearchView`: query box and filtered card list
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into the
//! global `App`. This makes dependencies explicit and components testable.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.source_label.clone(), app.progress_label(), app.status_message.clone());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── card_view.rs     (Card + navigation controls)
//! ├── loading.rs       (Loading placeholder)
//! └── search_view.rs   (Search route)
//! ```

pub mod card_view;
mod loading;
pub mod search_view;
mod title_bar;

pub use card_view::{CardLayout, CardView};
pub use loading::LoadingPlaceholder;
pub use search_view::{SearchEvent, SearchState, SearchView};
pub use title_bar::TitleBar;
