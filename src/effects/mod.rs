//! Side-Effect Coordinator.
//!
//! Reactions layered on top of the request lifecycle: clipboard copy with a
//! transient "copied" indicator, the optional hand-off to an external editor,
//! scroll-on-result, and theme persistence. None of them feed back into the
//! orchestrator's phase.

mod coordinator;
mod copy;
mod redirect;
mod viewport;

pub use coordinator::SideEffectCoordinator;
pub use copy::{CopyResetTimer, COPIED_RESET_DELAY};
pub use redirect::{BrowserOpener, EditorRedirect, UrlOpener, EDITOR_REDIRECT_DELAY};
pub use viewport::ArticleViewport;
