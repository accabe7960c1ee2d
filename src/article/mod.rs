//! Article generation: keyword validation and the request lifecycle.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent):
//! - `validate.rs` - Input Validator
//! - `state.rs` - phase, article, error and copied indicator
//! - `intent.rs` - user actions and background completions
//! - `reducer.rs` - state transitions
//! - `orchestrator.rs` - guarded submit and the generation task

mod intent;
mod orchestrator;
mod reducer;
mod state;
mod validate;

pub use intent::ArticleIntent;
pub use orchestrator::{RequestOrchestrator, SubmitOutcome};
pub use reducer::ArticleReducer;
pub use state::{
    ArticleState, AttemptOutcome, RequestPhase, FAILURE_PLACEHOLDER_HTML,
    GENERATION_FAILED_MESSAGE,
};
pub use validate::{
    KeywordValidator, ValidationError, ValidationResult, DEFAULT_MAX_KEYWORD_LENGTH,
};
