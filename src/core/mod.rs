//! # Core Application Logic
//!
//! This module contains Flashdeck's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (cards)         │
//!                    │  • Navigation           │
//!                    │  • Search filter        │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Deck     │      │   Speech   │
//!     │  Adapter   │      │  Sources   │      │   Engine   │
//!     │ (ratatui)  │      │ (reqwest)  │      │ (process)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`card`]: `Flashcard` and the write-once `Deck`
//! - [`navigation`]: the browser's card/details/finished state machine
//! - [`search`]: case-insensitive card filter
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: layered settings (defaults → file → env → CLI)

pub mod action;
pub mod card;
pub mod config;
pub mod navigation;
pub mod search;
pub mod state;
