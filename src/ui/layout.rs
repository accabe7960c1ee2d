use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub input: Rect,
    pub status: Rect,
    pub actions: Rect,
    pub article: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        input: chunks[1],
        status: chunks[2],
        actions: chunks[3],
        article: chunks[4],
        footer: chunks[5],
    }
}

/// Inner size of the article pane (inside its border) for a terminal size.
pub fn article_inner_size(cols: u16, rows: u16) -> (u16, u16) {
    let article = layout_regions(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    })
    .article;
    (article.width.saturating_sub(2), article.height.saturating_sub(2))
}

/// Rect of `width` x `height` centred in `area`, clipped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
