//! Skeleton library exports: the UI-agnostic core and the ratatui adapter.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
