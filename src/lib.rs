//! Flashdeck library exports for testing

pub mod core;
pub mod source;
pub mod speech;
pub mod tui;

#[cfg(test)]
pub mod test_support;
