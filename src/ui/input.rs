use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // Blocking notice swallows everything except dismissal
    if app.notice().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notice();
        }
        return;
    }

    if is_ctrl_char(key, 't') {
        app.toggle_theme();
        return;
    }
    if is_ctrl_char(key, 'y') {
        app.copy_article();
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.clear_keyword();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            return;
        }
        KeyCode::Enter => {
            app.submit();
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Keyword => match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.insert_char(ch);
            }
            KeyCode::Backspace => app.backspace(),
            _ => {}
        },
        Focus::Article => {
            let page = i32::from(app.article_page_height());
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => app.scroll_article(-1),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_article(1),
                KeyCode::PageUp => app.scroll_article(-page),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_article(page),
                KeyCode::Home | KeyCode::Char('g') => app.scroll_article_to_top(),
                KeyCode::End | KeyCode::Char('G') => app.scroll_article_to_bottom(),
                _ => {}
            }
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
