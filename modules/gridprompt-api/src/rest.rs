use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use gridprompt_common::DomainSchema;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::AppState;

/// Body returned for every upstream, extraction or validation failure.
pub const GENERATION_FAILED: &str = "Failed to generate filters";
/// Body returned when the request itself is unusable.
pub const INVALID_QUERY: &str = "Request body must include a non-empty \"query\" string";

#[derive(Deserialize)]
pub struct PromptRequest {
    query: Option<String>,
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// `POST /api/{domain}-prompt`: natural-language query in, grid filters out.
pub async fn api_prompt(
    State(state): State<Arc<AppState>>,
    domain: &'static DomainSchema,
    body: Result<Json<PromptRequest>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4();

    let query = match body {
        Ok(Json(PromptRequest { query: Some(query) })) => query,
        Ok(Json(PromptRequest { query: None })) => {
            warn!(%request_id, domain = domain.name, "Prompt request without query");
            return error_body(StatusCode::BAD_REQUEST, INVALID_QUERY);
        }
        Err(rejection) => {
            warn!(%request_id, domain = domain.name, error = %rejection, "Unreadable prompt request body");
            return error_body(StatusCode::BAD_REQUEST, INVALID_QUERY);
        }
    };

    // Query text is user data; log its size only.
    info!(%request_id, domain = domain.name, query_len = query.len(), "Prompt request received");

    match state.generator.generate(domain, &query).await {
        Ok(spec) => (StatusCode::OK, Json(spec)).into_response(),
        Err(e) if e.is_client_error() => {
            warn!(%request_id, domain = domain.name, kind = e.kind(), error = %e, "Rejected prompt request");
            error_body(StatusCode::BAD_REQUEST, INVALID_QUERY)
        }
        Err(e) => {
            warn!(%request_id, domain = domain.name, kind = e.kind(), error = %e, "Filter generation failed");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED)
        }
    }
}
