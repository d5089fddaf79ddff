use crate::SlippyMap;
use crate::models::TagRequest;
use axum::{
    Router,
    extract::{Json, Query, State},
    http::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

pub struct AppState {
    pub renderer: SlippyMap,
}

pub fn router(renderer: SlippyMap) -> Router {
    let state = Arc::new(AppState { renderer });
    Router::new()
        .route("/slippymap", get(get_slippymap).post(post_slippymap))
        .layer(middleware::from_fn(log_request_response))
        .with_state(state)
}

async fn log_request_response(
    req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let method = req.method().to_string();
    info!("incoming request: {} {}", method, path);
    let response = next.run(req).await;
    info!("request result: {} for {} {}", response.status(), method, path);
    response
}

// --- Handlers ---

/// Query parameters are the tag attributes; there is no inner text.
pub async fn get_slippymap(
    State(state): State<Arc<AppState>>,
    Query(args): Query<HashMap<String, String>>,
) -> Response {
    html_response(state.renderer.render("", &args))
}

pub async fn post_slippymap(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TagRequest>,
) -> Response {
    html_response(state.renderer.render_request(&request))
}

/// Error blocks are tag output like any other; only template failures
/// become HTTP errors.
fn html_response(result: anyhow::Result<String>) -> Response {
    match result {
        Ok(html) => ([("content-type", "text/html; charset=utf-8")], html).into_response(),
        Err(e) => {
            error!("slippymap render error: {}", e);
            (axum::http::StatusCode::INTERNAL_SERVER_ERROR, format!("error rendering map: {}", e)).into_response()
        }
    }
}
