//! Axum Handlers for the REST API
//!
//! This module contains the logic for handling the two conversation
//! endpoints. It uses `utoipa` doc comments to generate OpenAPI
//! documentation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use duet_core::{analysis, analysis::AnalysisReport, dialogue};
use std::sync::Arc;
use tracing::{error, info};

use crate::{
    models::{AnalysisRequest, ConversationRequest, ConversationResponse, ErrorResponse},
    state::AppState,
};

/// The single failure surface of the API: anything that goes wrong inside
/// a handler becomes a 500 whose body carries the underlying error text.
pub struct ApiError(anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {:?}", self.0);
        let detail = self.0.to_string();
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { detail })).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Generate the next two messages of the scripted conversation.
#[utoipa::path(
    post,
    path = "/generate-conversation",
    request_body = ConversationRequest,
    responses(
        (status = 200, description = "The two newly generated messages", body = ConversationResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn generate_conversation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ConversationRequest>,
) -> Result<Json<ConversationResponse>, ApiError> {
    info!(starter = %payload.starter, "Received conversation request");

    let pair = dialogue::generate_turn(
        state.completion.as_ref(),
        &state.personas,
        &payload.starter,
        &payload.messages,
    )
    .await?;

    Ok(Json(ConversationResponse {
        alex_message: pair.alex_message,
        jordan_message: pair.jordan_message,
    }))
}

/// Analyze a finished conversation transcript.
#[utoipa::path(
    post,
    path = "/analyze-conversation",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Structured critique of the transcript", body = AnalysisReport),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn analyze_conversation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnalysisRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    info!(
        message_count = payload.messages.len(),
        "Analyzing conversation"
    );

    let report = analysis::analyze(state.completion.as_ref(), &payload.messages)
        .await
        .map_err(|err| {
            error!(
                message_count = payload.messages.len(),
                "Error analyzing conversation: {:?}", err
            );
            err
        })?;

    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use anyhow::{Result, anyhow};
    use duet_core::completion::CompletionClient;
    use duet_core::persona::{Persona, Personas};
    use duet_core::transcript::Message;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// A completion client that replays a fixed script of replies, one per
    /// call, in order.
    struct ScriptedClient {
        replies: Mutex<VecDeque<Result<String>>>,
    }

    impl ScriptedClient {
        fn new(replies: Vec<Result<String>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
            }
        }
    }

    #[async_trait::async_trait]
    impl CompletionClient for ScriptedClient {
        async fn complete(&self, _persona: &Persona, _prompt: &str) -> Result<String> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected completion call")
        }
    }

    fn state_with(replies: Vec<Result<String>>) -> Arc<AppState> {
        let config = Config {
            bind_address: "127.0.0.1:8000".parse().unwrap(),
            groq_api_key: "test-key".to_string(),
            chat_model: "llama3-70b-8192".to_string(),
            completions_base_url: "https://api.groq.com/openai/v1".to_string(),
            log_level: tracing::Level::INFO,
        };
        Arc::new(AppState {
            completion: Arc::new(ScriptedClient::new(replies)),
            personas: Arc::new(Personas::default()),
            config: Arc::new(config),
        })
    }

    async fn error_detail(err: ApiError) -> String {
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        body.detail
    }

    #[tokio::test]
    async fn api_error_maps_to_500_with_detail_body() {
        let detail = error_detail(ApiError::from(anyhow!("model unavailable"))).await;
        assert_eq!(detail, "model unavailable");
    }

    #[tokio::test]
    async fn generate_conversation_returns_the_fresh_pair() {
        let state = state_with(vec![
            Ok("Just got back from kayaking!".to_string()),
            Ok("There is something meditative about water.".to_string()),
        ]);
        let payload = ConversationRequest {
            starter: "Hi, I'm Alex.".to_string(),
            messages: vec![],
        };

        let Ok(Json(body)) = generate_conversation(State(state), Json(payload)).await else {
            panic!("expected a generated pair");
        };

        // With no history Jordan speaks first, so the first scripted reply
        // is Jordan's.
        assert_eq!(body.jordan_message, "Just got back from kayaking!");
        assert_eq!(
            body.alex_message,
            "There is something meditative about water."
        );
    }

    #[tokio::test]
    async fn generate_conversation_surfaces_upstream_failure() {
        let state = state_with(vec![Err(anyhow!("connection reset by peer"))]);
        let payload = ConversationRequest {
            starter: "Hello".to_string(),
            messages: vec![],
        };

        let Err(err) = generate_conversation(State(state), Json(payload)).await else {
            panic!("expected the upstream failure to propagate");
        };

        let detail = error_detail(err).await;
        assert!(detail.contains("connection reset by peer"));
    }

    #[tokio::test]
    async fn analyze_conversation_returns_the_parsed_report() {
        let state = state_with(vec![Ok("Chemistry: Warm and curious.".to_string())]);
        let payload = AnalysisRequest {
            messages: vec![
                Message::new("Alex", "Hello"),
                Message::new("Jordan", "Hey!"),
            ],
        };

        let Ok(Json(report)) = analyze_conversation(State(state), Json(payload)).await else {
            panic!("expected an analysis report");
        };

        assert_eq!(report.chemistry, "Warm and curious.");
        // Unparsed fields fall back to their defaults rather than erroring.
        assert_eq!(report.connection_points.len(), 3);
    }

    #[tokio::test]
    async fn analyze_conversation_surfaces_upstream_failure() {
        let state = state_with(vec![Err(anyhow!("upstream timeout"))]);
        let payload = AnalysisRequest {
            messages: vec![Message::new("Alex", "Hello")],
        };

        let Err(err) = analyze_conversation(State(state), Json(payload)).await else {
            panic!("expected the upstream failure to propagate");
        };

        let detail = error_detail(err).await;
        assert!(detail.contains("upstream timeout"));
    }
}
