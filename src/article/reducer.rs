//! Request lifecycle transitions.

use crate::config::FailurePolicy;
use crate::mvi::Reducer;

use super::intent::ArticleIntent;
use super::state::{
    ArticleState, AttemptOutcome, RequestPhase, FAILURE_PLACEHOLDER_HTML,
    GENERATION_FAILED_MESSAGE,
};

pub struct ArticleReducer;

impl Reducer for ArticleReducer {
    type State = ArticleState;
    type Intent = ArticleIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ArticleIntent::KeywordChanged { keyword } => ArticleState { keyword, ..state },

            ArticleIntent::Submit { request_id } => {
                // Second submission while one is outstanding is a no-op.
                if state.phase.is_in_flight() {
                    return state;
                }

                let verdict = state.validator.validate(&state.keyword).map(|_| ());
                if let Err(err) = verdict {
                    return ArticleState {
                        error: Some(err.to_string()),
                        last_outcome: Some(AttemptOutcome::Rejected(err)),
                        ..state
                    };
                }

                let keyword = state.keyword.clone();
                ArticleState {
                    phase: RequestPhase::InFlight {
                        request_id,
                        keyword,
                    },
                    error: None,
                    copied: false,
                    copy_generation: state.copy_generation.wrapping_add(1),
                    ..state
                }
            }

            ArticleIntent::GenerationSucceeded { request_id, html } => {
                if state.phase.request_id() != Some(request_id) {
                    return state;
                }
                ArticleState {
                    phase: RequestPhase::Idle,
                    article: html,
                    error: None,
                    last_outcome: Some(AttemptOutcome::Succeeded),
                    ..state
                }
            }

            ArticleIntent::GenerationFailed { request_id } => {
                if state.phase.request_id() != Some(request_id) {
                    return state;
                }
                let article = match state.failure_policy {
                    FailurePolicy::Placeholder => FAILURE_PLACEHOLDER_HTML.to_string(),
                    FailurePolicy::KeepPrevious => state.article.clone(),
                };
                ArticleState {
                    phase: RequestPhase::Idle,
                    article,
                    error: Some(GENERATION_FAILED_MESSAGE.to_string()),
                    last_outcome: Some(AttemptOutcome::Failed),
                    ..state
                }
            }

            ArticleIntent::CopySucceeded => ArticleState {
                copied: true,
                copy_generation: state.copy_generation.wrapping_add(1),
                ..state
            },

            ArticleIntent::CopiedExpired { generation } => {
                if generation != state.copy_generation {
                    return state;
                }
                ArticleState {
                    copied: false,
                    ..state
                }
            }
        }
    }
}
