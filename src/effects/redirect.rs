use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Delay between a successful copy and opening the editor.
pub const EDITOR_REDIRECT_DELAY: Duration = Duration::from_millis(1000);

pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs in the system browser.
pub struct BrowserOpener;

impl UrlOpener for BrowserOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        webbrowser::open(url)
    }
}

/// Sends the user to an external editor shortly after a copy.
pub struct EditorRedirect {
    url: String,
    opener: Arc<dyn UrlOpener>,
    pending: Option<JoinHandle<()>>,
    runtime: Handle,
}

impl EditorRedirect {
    pub fn new(url: impl Into<String>, opener: Arc<dyn UrlOpener>, runtime: Handle) -> Self {
        Self {
            url: url.into(),
            opener,
            pending: None,
            runtime,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Open the editor after [`EDITOR_REDIRECT_DELAY`]. A pending redirect is
    /// replaced.
    pub fn schedule(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let deadline = Instant::now() + EDITOR_REDIRECT_DELAY;
        let url = self.url.clone();
        let opener = Arc::clone(&self.opener);
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            match opener.open(&url) {
                Ok(()) => tracing::info!(url = %url, "Opened external editor"),
                Err(err) => tracing::warn!(url = %url, error = %err, "Failed to open external editor"),
            }
        }));
    }
}

impl Drop for EditorRedirect {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
