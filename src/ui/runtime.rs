use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::runtime::Handle;

use crate::article::RequestOrchestrator;
use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::effects::{BrowserOpener, EditorRedirect, SideEffectCoordinator};
use crate::generate::HttpGenerator;
use crate::preferences::{FilePreferenceStore, ThemeHandle};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Wire up the article client and run the event loop until the user quits.
pub fn run(config: Config, runtime: Handle) -> anyhow::Result<()> {
    let generator =
        HttpGenerator::new(&config.generator).context("Failed to build HTTP client")?;
    tracing::info!(url = %generator.url(), "Generation endpoint");

    let preferences_path = config
        .preferences
        .path
        .clone()
        .unwrap_or_else(FilePreferenceStore::default_path);
    let theme = ThemeHandle::load(Arc::new(FilePreferenceStore::new(preferences_path)));

    let redirect = config
        .editor
        .redirect_url()
        .map(|url| EditorRedirect::new(url, Arc::new(BrowserOpener), runtime.clone()));

    let events = EventHandler::new(TICK_RATE);
    let orchestrator =
        RequestOrchestrator::new(&config, Arc::new(generator), events.sender(), runtime.clone());
    let effects = SideEffectCoordinator::new(
        Box::new(SystemClipboard::new()),
        theme,
        redirect,
        events.sender(),
        runtime,
    );
    let mut app = App::new(orchestrator, effects);

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Article(intent)) => app.on_article_event(intent),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Shutting down");
    Ok(())
}
