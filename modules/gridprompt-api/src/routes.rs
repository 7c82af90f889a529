use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use gridprompt_filters::domains;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::rest::{self, PromptRequest};
use crate::AppState;

pub fn build_router(state: Arc<AppState>) -> Result<Router> {
    ensure!(
        state.config.frontend_origin.trim() != "*",
        "FRONTEND_ORIGIN must name a single origin, not a wildcard"
    );
    let origin: HeaderValue = state
        .config
        .frontend_origin
        .parse()
        .with_context(|| format!("Invalid FRONTEND_ORIGIN: {:?}", state.config.frontend_origin))?;

    // Requests from any other origin get no allow-origin header.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let mut router = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }));

    // One generic handler; each domain only contributes its schema.
    for domain in domains::ALL {
        router = router.route(
            domain.route,
            post(
                move |state: State<Arc<AppState>>,
                      body: Result<Json<PromptRequest>, JsonRejection>| {
                    rest::api_prompt(state, domain, body)
                },
            ),
        );
    }

    Ok(router
        .with_state(state)
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path only, request bodies carry user queries
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        ))
}
