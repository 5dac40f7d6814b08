//! # Core Application Logic
//!
//! The state machine behind the app. It knows nothing about any specific
//! UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Command (deferred)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │ actions in, commands out
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`command`]: Async work that resolves to a single `Action`
//! - [`input`]: The editable input line
//! - [`key`]: Terminal-independent key presses
//! - [`config`]: Settings file loading and saving

pub mod action;
pub mod command;
pub mod config;
pub mod input;
pub mod key;
pub mod state;
