use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::article::ArticleIntent;
use crate::ui::events::{AppEvent, EventSender};

/// How long the "copied" indicator stays on.
pub const COPIED_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Schedules the reset of the "copied" indicator.
///
/// At most one reset is pending: scheduling again aborts the previous timer,
/// and the reset carries the copy generation it was armed for so a late
/// firing cannot clear a newer indicator.
pub struct CopyResetTimer {
    pending: Option<JoinHandle<()>>,
    events: EventSender,
    runtime: Handle,
}

impl CopyResetTimer {
    pub fn new(events: EventSender, runtime: Handle) -> Self {
        Self {
            pending: None,
            events,
            runtime,
        }
    }

    pub fn schedule(&mut self, generation: u64) {
        self.cancel();

        let deadline = Instant::now() + COPIED_RESET_DELAY;
        let events = self.events.clone();
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = events.send(AppEvent::Article(ArticleIntent::CopiedExpired { generation }));
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for CopyResetTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
