use crate::article::{ArticleIntent, ArticleState, RequestOrchestrator, SubmitOutcome};
use crate::effects::SideEffectCoordinator;
use crate::preferences::ThemePreference;
use crate::ui::layout::article_inner_size;
use crate::ui::render::article_paragraph;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Keyword,
    Article,
}

/// Blocking notice: while one is shown, only dismissal is accepted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    orchestrator: RequestOrchestrator,
    effects: SideEffectCoordinator,
    notice: Option<Notice>,
    animation_tick: u8,
}

impl App {
    pub fn new(orchestrator: RequestOrchestrator, effects: SideEffectCoordinator) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Keyword,
            size: None,
            orchestrator,
            effects,
            notice: None,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn article(&self) -> &ArticleState {
        self.orchestrator.state()
    }

    pub fn theme(&self) -> ThemePreference {
        self.effects.theme()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Keyword if self.article().has_article() => Focus::Article,
            _ => Focus::Keyword,
        };
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn scroll_offset(&self) -> u16 {
        self.effects.viewport().offset()
    }

    pub fn on_tick(&mut self) {
        if self.article().is_busy() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
        self.effects.on_tick();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.refresh_viewport_bounds();
    }

    /// Completion or timer result from a background task.
    pub fn on_article_event(&mut self, intent: ArticleIntent) {
        self.orchestrator.dispatch(intent);
        self.after_transition();
    }

    // ========================================================================
    // Keyword input
    // ========================================================================

    pub fn insert_char(&mut self, ch: char) {
        let mut keyword = self.article().keyword.clone();
        keyword.push(ch);
        self.orchestrator.set_keyword(keyword);
    }

    pub fn backspace(&mut self) {
        let mut keyword = self.article().keyword.clone();
        if keyword.pop().is_some() {
            self.orchestrator.set_keyword(keyword);
        }
    }

    pub fn clear_keyword(&mut self) {
        self.orchestrator.set_keyword(String::new());
    }

    /// Append pasted text; line breaks become spaces.
    pub fn paste(&mut self, text: &str) {
        let mut keyword = self.article().keyword.clone();
        keyword.extend(text.chars().map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch }));
        self.orchestrator.set_keyword(keyword);
    }

    // ========================================================================
    // Actions
    // ========================================================================

    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.orchestrator.submit();
        self.after_transition();
        outcome
    }

    /// Copy the article. Only meaningful while there is one to copy.
    pub fn copy_article(&mut self) {
        if !self.article().has_article() {
            return;
        }
        if let Err(err) = self.effects.copy_article(&mut self.orchestrator) {
            self.notice = Some(Notice {
                title: "Copy failed",
                message: format!("❌ {}", err),
            });
        }
    }

    pub fn toggle_theme(&mut self) {
        if let Err(err) = self.effects.toggle_theme() {
            tracing::warn!(error = %err, "Failed to persist theme preference");
            self.notice = Some(Notice {
                title: "Theme not saved",
                message: format!("❌ {}", err),
            });
        }
    }

    pub fn scroll_article(&mut self, delta: i32) {
        self.effects.viewport_mut().scroll_by(delta);
    }

    pub fn scroll_article_to_top(&mut self) {
        self.effects.viewport_mut().scroll_to_top();
    }

    pub fn scroll_article_to_bottom(&mut self) {
        self.effects.viewport_mut().scroll_to_bottom();
    }

    /// Lines the article pane shows at once.
    pub fn article_page_height(&self) -> u16 {
        self.size
            .map(|(cols, rows)| article_inner_size(cols, rows).1)
            .unwrap_or(1)
            .max(1)
    }

    fn after_transition(&mut self) {
        if self.effects.observe(self.orchestrator.state()) {
            self.focus = Focus::Article;
        }
        self.refresh_viewport_bounds();
    }

    fn refresh_viewport_bounds(&mut self) {
        let Some((cols, rows)) = self.size else {
            return;
        };
        let (width, height) = article_inner_size(cols, rows);
        let lines = wrapped_line_count(&self.orchestrator.state().article, width);
        self.effects.viewport_mut().set_bounds(lines, height);
    }
}

/// Rows `text` occupies in the article pane at `width` columns.
fn wrapped_line_count(text: &str, width: u16) -> usize {
    if text.is_empty() {
        return 0;
    }
    article_paragraph(text).line_count(width.max(1))
}
