//! State of the article generation screen.

use uuid::Uuid;

use crate::config::FailurePolicy;
use crate::mvi::UiState;

use super::validate::{KeywordValidator, ValidationError};

/// Message shown for any network, transport or server failure.
pub const GENERATION_FAILED_MESSAGE: &str = "❌ Failed to generate article. Please try again later.";

/// Fragment that replaces the article on failure under [`FailurePolicy::Placeholder`].
pub const FAILURE_PLACEHOLDER_HTML: &str =
    "<p>An error occurred while processing the request.</p>";

/// Orchestration phase.
///
/// Validation, success and failure resolve within a single reducer step, so
/// the resting phases are `Idle` and `InFlight`. How the last attempt ended is
/// kept in [`ArticleState::last_outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    InFlight {
        request_id: Uuid,
        keyword: String,
    },
}

impl RequestPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    pub fn request_id(&self) -> Option<Uuid> {
        match self {
            Self::InFlight { request_id, .. } => Some(*request_id),
            Self::Idle => None,
        }
    }

    /// Keyword of the request in flight.
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Self::InFlight { keyword, .. } => Some(keyword.as_str()),
            Self::Idle => None,
        }
    }
}

/// How the most recent submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Rejected(ValidationError),
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleState {
    /// Raw keyword as typed.
    pub keyword: String,
    pub phase: RequestPhase,
    /// Last article HTML. Empty means no article.
    pub article: String,
    /// User-facing status for the latest failure.
    pub error: Option<String>,
    /// Transient "copied" indicator.
    pub copied: bool,
    /// Bumped whenever `copied` is set or cleared by a user action; a reset
    /// timer only applies if it still carries the current value.
    pub copy_generation: u64,
    pub last_outcome: Option<AttemptOutcome>,
    pub validator: KeywordValidator,
    pub failure_policy: FailurePolicy,
}

impl UiState for ArticleState {}

impl ArticleState {
    pub fn new(validator: KeywordValidator, failure_policy: FailurePolicy) -> Self {
        Self {
            validator,
            failure_policy,
            ..Self::default()
        }
    }

    /// True while the trigger control must be rendered busy.
    pub fn is_busy(&self) -> bool {
        self.phase.is_in_flight()
    }

    pub fn has_article(&self) -> bool {
        !self.article.is_empty()
    }

    pub fn keyword_length(&self) -> usize {
        self.keyword.chars().count()
    }
}
