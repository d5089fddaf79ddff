use axum::{
    body::to_bytes,
    extract::{Json, Query, State},
    http::StatusCode,
    response::Response,
};
use pretty_assertions::assert_eq;
use slippymap::server::{AppState, get_slippymap, post_slippymap};
use slippymap::{Config, SlippyMap, TagRequest};
use std::collections::HashMap;
use std::sync::Arc;

fn state() -> Arc<AppState> {
    Arc::new(AppState {
        renderer: SlippyMap::from_config(Config::default()).unwrap(),
    })
}

fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_get_renders_map_from_query() {
    let query = args(&[("lat", "48.85"), ("lon", "2.35"), ("z", "12")]);
    let response = get_slippymap(State(state()), Query(query)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );
    let body = body_text(response).await;
    assert!(body.contains("new OpenLayers.LonLat(2.35,48.85)"));
    assert!(body.contains("new OpenLayers.Control.PanZoom(),"));
}

#[tokio::test]
async fn test_post_with_contents_returns_error_block() {
    let request = TagRequest {
        input: "a|b".to_string(),
        args: args(&[("lat", "48.85"), ("lon", "2.35"), ("z", "12")]),
    };
    let response = post_slippymap(State(state()), Json(request)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.starts_with("<span class=\"error\">Map error:<br/>"));
    assert!(body.ends_with("</span>a|b"));
}
