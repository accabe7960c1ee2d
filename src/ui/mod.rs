//! Terminal front end: widgets, key handling, and the event loop that drives
//! the article orchestrator and its side effects.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
