//! Owns the single in-flight request and routes its outcome back as intents.

use std::sync::Arc;

use scopeguard::ScopeGuard;
use tokio::runtime::Handle;
use uuid::Uuid;

use crate::config::Config;
use crate::generate::ArticleGenerator;
use crate::mvi::Reducer;
use crate::ui::events::{AppEvent, EventSender};

use super::intent::ArticleIntent;
use super::reducer::ArticleReducer;
use super::state::{ArticleState, AttemptOutcome};
use super::validate::{KeywordValidator, ValidationError};

/// Result of a `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was issued under this id.
    Issued(Uuid),
    /// Validation failed; nothing was sent.
    Rejected(ValidationError),
    /// A request is already in flight; the call was suppressed.
    Busy,
}

/// Request Orchestrator.
///
/// Every mutation goes through [`ArticleReducer`]. `submit` is guarded here,
/// not only by the disabled trigger in the view, so a second call while a
/// request is outstanding never reaches the generator.
pub struct RequestOrchestrator {
    state: ArticleState,
    generator: Arc<dyn ArticleGenerator>,
    events: EventSender,
    runtime: Handle,
}

impl RequestOrchestrator {
    pub fn new(
        config: &Config,
        generator: Arc<dyn ArticleGenerator>,
        events: EventSender,
        runtime: Handle,
    ) -> Self {
        let state = ArticleState::new(
            KeywordValidator::new(config.keyword.max_length),
            config.article.failure_policy,
        );
        Self {
            state,
            generator,
            events,
            runtime,
        }
    }

    pub fn state(&self) -> &ArticleState {
        &self.state
    }

    /// Feed an intent through the reducer.
    ///
    /// Completions from the generation task and copy timers arrive here.
    pub fn dispatch(&mut self, intent: ArticleIntent) {
        ArticleReducer::apply(&mut self.state, intent);
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.dispatch(ArticleIntent::KeywordChanged {
            keyword: keyword.into(),
        });
    }

    /// Validate the current keyword and, if accepted and idle, start a request.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state.is_busy() {
            tracing::debug!("Submit suppressed: a generation request is already in flight");
            return SubmitOutcome::Busy;
        }

        let request_id = Uuid::new_v4();
        self.dispatch(ArticleIntent::Submit { request_id });

        if self.state.phase.request_id() != Some(request_id) {
            return match &self.state.last_outcome {
                Some(AttemptOutcome::Rejected(err)) => {
                    tracing::debug!(error = %err, "Keyword rejected before request");
                    SubmitOutcome::Rejected(err.clone())
                }
                _ => SubmitOutcome::Busy,
            };
        }

        let keyword = self.state.keyword.clone();
        tracing::info!(%request_id, keyword_chars = keyword.chars().count(), "Generation request issued");
        self.spawn_request(request_id, keyword);
        SubmitOutcome::Issued(request_id)
    }

    fn spawn_request(&self, request_id: Uuid, keyword: String) {
        let generator = Arc::clone(&self.generator);
        let events = self.events.clone();

        self.runtime.spawn(async move {
            // Reports a failure if this task ends before sending a result,
            // e.g. the generator panicked or the runtime is shutting down.
            let events = scopeguard::guard(events, move |events| {
                tracing::error!(%request_id, "Generation task ended without a result");
                let _ = events.send(AppEvent::Article(ArticleIntent::GenerationFailed {
                    request_id,
                }));
            });

            let result = generator.generate(&keyword).await;
            let events = ScopeGuard::into_inner(events);

            let intent = match result {
                Ok(html) => {
                    tracing::info!(%request_id, html_bytes = html.len(), "Article generated");
                    ArticleIntent::GenerationSucceeded { request_id, html }
                }
                Err(err) => {
                    tracing::error!(%request_id, error = %err, "Article generation failed");
                    ArticleIntent::GenerationFailed { request_id }
                }
            };

            if events.send(AppEvent::Article(intent)).is_err() {
                tracing::trace!(%request_id, "Generation result dropped (event loop gone)");
            }
        });
    }
}
