use crate::ui::app::{App, Focus, Notice};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{palette, Palette};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const KEYWORD_PLACEHOLDER: &str = "Enter an article keyword...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let palette = palette(app.theme());
    let regions = layout_regions(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let header = Header::new(app.theme());
    frame.render_widget(header.widget(palette, regions.header), regions.header);

    render_keyword(frame, app, palette, regions.input);
    render_status(frame, app, palette, regions.status);
    render_actions(frame, app, palette, regions.actions);
    render_article(frame, app, palette, regions.article);

    let footer = Footer::new();
    frame.render_widget(footer.widget(palette, regions.footer), regions.footer);

    if let Some(notice) = app.notice() {
        render_notice(frame, notice, palette, area);
    }
}

fn border_style(palette: &Palette, focused: bool) -> Style {
    if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    }
}

fn render_keyword(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let state = app.article();
    let focused = app.focus() == Focus::Keyword && app.notice().is_none();
    let title = format!(
        " Keyword ({}/{}) ",
        state.keyword_length(),
        state.validator.max_length()
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(palette, focused))
        .style(Style::default().bg(palette.input_background));
    let inner = block.inner(area);

    let (content, typed_width) = if state.keyword.is_empty() {
        let placeholder = Line::from(Span::styled(
            KEYWORD_PLACEHOLDER,
            Style::default().fg(palette.muted),
        ));
        (placeholder, 0)
    } else {
        let typed = Line::from(Span::styled(
            state.keyword.as_str(),
            Style::default().fg(palette.text),
        ));
        let width = typed.width();
        (typed, width)
    };

    let (scroll, cursor) = keyword_view(typed_width, inner.width);
    let paragraph = Paragraph::new(content).block(block).scroll((0, scroll));
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + cursor, inner.y));
    }
}

/// Horizontal scroll and cursor column for a keyword `typed_width` cells wide
/// in a box `inner_width` cells wide. The tail stays visible.
fn keyword_view(typed_width: usize, inner_width: u16) -> (u16, u16) {
    let typed = u16::try_from(typed_width).unwrap_or(u16::MAX);
    let last_column = inner_width.saturating_sub(1);
    let scroll = typed.saturating_sub(last_column);
    (scroll, typed.saturating_sub(scroll).min(last_column))
}

fn render_status(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let state = app.article();
    let line = if let Some(error) = &state.error {
        Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(palette.error),
        ))
    } else if let Some(keyword) = state.phase.keyword() {
        let spinner = SPINNER_FRAMES[(app.animation_tick() as usize) % SPINNER_FRAMES.len()];
        Line::from(vec![
            Span::styled(format!(" {} ", spinner), Style::default().fg(palette.accent)),
            Span::styled(
                format!("Generating article for \"{}\"...", keyword.trim()),
                Style::default().fg(palette.muted),
            ),
        ])
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_actions(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let state = app.article();
    let button_text = Style::default()
        .fg(palette.background)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::raw(" ")];
    if state.is_busy() {
        spans.push(Span::styled(
            " ⏳ Generating... ",
            button_text.bg(palette.busy).add_modifier(Modifier::DIM),
        ));
    } else {
        spans.push(Span::styled(" ✨GENERATE✨ ", button_text.bg(palette.accent)));
    }

    if state.has_article() {
        let label = if state.copied {
            " ✅ Copied! "
        } else {
            " 📋 Copy Article "
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(label, button_text.bg(palette.copy)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_article(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let focused = app.focus() == Focus::Article && app.notice().is_none();
    let block = Block::default()
        .title(" Article ")
        .borders(Borders::ALL)
        .border_style(border_style(palette, focused));

    let paragraph = article_paragraph(&app.article().article)
        .style(Style::default().fg(palette.text))
        .scroll((app.scroll_offset(), 0))
        .block(block);
    frame.render_widget(paragraph, area);
}

/// The article body, wrapped the way the pane renders it. Markup is shown
/// exactly as the service returned it.
pub fn article_paragraph(article: &str) -> Paragraph<'_> {
    Paragraph::new(article).wrap(Wrap { trim: false })
}

fn render_notice(frame: &mut Frame<'_>, notice: &Notice, palette: &Palette, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}  ", notice.message),
            Style::default().fg(palette.error),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc: Dismiss",
            Style::default().fg(palette.muted),
        )),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(40);
    let height = lines.len() as u16 + 2;
    let popup_area = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", notice.title),
            Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.error))
        .style(Style::default().bg(palette.highlight));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, popup_area);
}
