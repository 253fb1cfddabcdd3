//! API Models
//!
//! Request and response payloads for the two endpoints, with `utoipa`
//! schemas for the generated OpenAPI documentation. The transcript message
//! and analysis report types live in `duet-core` and are re-used here
//! directly as wire types.

use duet_core::transcript::Message;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /generate-conversation`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ConversationRequest {
    /// The opening line, treated as Alex's first message when no history
    /// is supplied.
    #[schema(example = "I've been rereading the Stoics lately.")]
    pub starter: String,
    /// The transcript so far. Optional; an absent list means this is the
    /// first exchange.
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Response body for `POST /generate-conversation`: the two newly
/// generated messages. The caller appends them to its own transcript.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConversationResponse {
    pub alex_message: String,
    pub jordan_message: String,
}

/// Request body for `POST /analyze-conversation`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    pub messages: Vec<Message>,
}

/// Uniform error body: every internal failure surfaces as a 500 carrying
/// the underlying error text.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
