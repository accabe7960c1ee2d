//! Scroll state of the article pane.

/// Scroll position of the article pane, with a smooth return to the top when
/// a new article arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleViewport {
    offset: u16,
    target: u16,
    max_offset: u16,
    last_article: String,
}

impl ArticleViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    /// React to the current article. Returns true when the article became a
    /// new non-empty value and the pane should be revealed.
    pub fn observe(&mut self, article: &str) -> bool {
        if article.is_empty() {
            self.last_article.clear();
            return false;
        }
        if article == self.last_article {
            return false;
        }
        self.last_article = article.to_string();
        self.target = 0;
        true
    }

    /// Update the scrollable range from the rendered content height.
    pub fn set_bounds(&mut self, content_lines: usize, visible_lines: u16) {
        let content = u16::try_from(content_lines).unwrap_or(u16::MAX);
        self.max_offset = content.saturating_sub(visible_lines);
        self.offset = self.offset.min(self.max_offset);
        self.target = self.target.min(self.max_offset);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.offset).saturating_add(delta);
        self.offset = next.clamp(0, i32::from(self.max_offset)) as u16;
        self.target = self.offset;
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.target = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset;
        self.target = self.max_offset;
    }

    /// Advance the smooth scroll by one animation step.
    pub fn on_tick(&mut self) {
        if self.offset == self.target {
            return;
        }
        let distance = self.offset.abs_diff(self.target);
        let step = (distance / 2).max(1);
        if self.offset > self.target {
            self.offset -= step;
        } else {
            self.offset += step;
        }
    }
}
