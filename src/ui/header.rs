use crate::preferences::ThemePreference;
use crate::ui::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "✨Walaoe✨";

pub struct Header {
    theme: ThemePreference,
}

impl Header {
    pub fn new(theme: ThemePreference) -> Self {
        Self { theme }
    }

    /// Label of the theme toggle: names the mode it switches to.
    pub fn toggle_label(&self) -> &'static str {
        if self.theme.is_dark() {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }

    pub fn widget(&self, palette: &Palette, area: Rect) -> Paragraph<'static> {
        let title = Span::styled(
            format!(" {}", TITLE),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        );
        let toggle = Span::styled(
            format!("[Ctrl+T] {} ", self.toggle_label()),
            Style::default().fg(palette.muted),
        );
        // Display width: the sparkles take two cells each
        let padding = usize::from(area.width)
            .saturating_sub(title.width())
            .saturating_sub(toggle.width());

        let line = Line::from(vec![title, Span::raw(" ".repeat(padding)), toggle]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
