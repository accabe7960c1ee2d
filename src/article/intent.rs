use uuid::Uuid;

use crate::mvi::Intent;

/// Intents handled by [`super::ArticleReducer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleIntent {
    /// The keyword input changed.
    KeywordChanged { keyword: String },

    /// User asked for an article. The id is used for the request if the
    /// keyword passes validation and nothing is in flight.
    Submit { request_id: Uuid },

    /// The generation service answered with an HTML fragment.
    GenerationSucceeded { request_id: Uuid, html: String },

    /// Any network, transport, decode or task failure. The cause is logged
    /// where it happens; the screen only shows a fixed message.
    GenerationFailed { request_id: Uuid },

    /// The article was written to the clipboard.
    CopySucceeded,

    /// A "copied" reset timer fired.
    CopiedExpired { generation: u64 },
}

impl Intent for ArticleIntent {}
