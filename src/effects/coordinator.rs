use tokio::runtime::Handle;

use crate::article::{ArticleIntent, ArticleState, RequestOrchestrator};
use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::preferences::{PreferenceError, ThemeHandle, ThemePreference};
use crate::ui::events::EventSender;

use super::copy::CopyResetTimer;
use super::redirect::EditorRedirect;
use super::viewport::ArticleViewport;

/// Runs the auxiliary reactions to article state.
///
/// The only thing written back into the article state is the "copied"
/// indicator, which the reducer never consults when handling a submit.
pub struct SideEffectCoordinator {
    clipboard: Box<dyn ClipboardWriter>,
    copy_timer: CopyResetTimer,
    redirect: Option<EditorRedirect>,
    viewport: ArticleViewport,
    theme: ThemeHandle,
}

impl SideEffectCoordinator {
    pub fn new(
        clipboard: Box<dyn ClipboardWriter>,
        theme: ThemeHandle,
        redirect: Option<EditorRedirect>,
        events: EventSender,
        runtime: Handle,
    ) -> Self {
        Self {
            clipboard,
            copy_timer: CopyResetTimer::new(events, runtime),
            redirect,
            viewport: ArticleViewport::new(),
            theme,
        }
    }

    /// Copy the current article to the clipboard.
    ///
    /// On success the "copied" indicator turns on and a single reset is armed
    /// from now. On failure nothing changes and the error goes to the caller
    /// to show.
    pub fn copy_article(
        &mut self,
        orchestrator: &mut RequestOrchestrator,
    ) -> Result<(), ClipboardError> {
        if let Err(err) = self.clipboard.write_text(&orchestrator.state().article) {
            tracing::warn!(error = %err, "Clipboard write failed");
            return Err(err);
        }

        orchestrator.dispatch(ArticleIntent::CopySucceeded);
        self.copy_timer.schedule(orchestrator.state().copy_generation);
        tracing::debug!(bytes = orchestrator.state().article.len(), "Article copied");

        if let Some(redirect) = &mut self.redirect {
            tracing::debug!(url = %redirect.url(), "Editor redirect scheduled");
            redirect.schedule();
        }
        Ok(())
    }

    /// Scroll-on-result. Returns true when the article pane was revealed.
    pub fn observe(&mut self, state: &ArticleState) -> bool {
        self.viewport.observe(&state.article)
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme.current()
    }

    pub fn toggle_theme(&mut self) -> Result<ThemePreference, PreferenceError> {
        self.theme.toggle()
    }

    pub fn viewport(&self) -> &ArticleViewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ArticleViewport {
        &mut self.viewport
    }

    pub fn copy_reset_pending(&self) -> bool {
        self.copy_timer.is_pending()
    }

    pub fn on_tick(&mut self) {
        self.viewport.on_tick();
    }
}
