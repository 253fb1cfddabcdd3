//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the two conversation endpoints and the OpenAPI documentation.

use crate::{
    handlers,
    models::{AnalysisRequest, ConversationRequest, ConversationResponse, ErrorResponse},
    state::AppState,
};
use duet_core::{analysis::AnalysisReport, transcript::Message};

use axum::{Router, routing::post};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::generate_conversation, handlers::analyze_conversation),
    components(
        schemas(ConversationRequest, ConversationResponse, AnalysisRequest, AnalysisReport, Message, ErrorResponse)
    ),
    tags(
        (name = "Duet API", description = "Scripted persona conversations and transcript analysis")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Group all routes that require AppState into their own router.
    let api_router = Router::new()
        .route(
            "/generate-conversation",
            post(handlers::generate_conversation),
        )
        .route("/analyze-conversation", post(handlers::analyze_conversation))
        // Apply the state ONLY to this group of routes.
        .with_state(app_state);

    // Create the final router that merges the stateful routes
    // with the stateless routes (like Swagger UI).
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
