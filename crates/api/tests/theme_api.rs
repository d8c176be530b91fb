//! HTTP-level integration tests for palette classification.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, post_json, send};
use serde_json::json;

async fn classify(palette: serde_json::Value) -> serde_json::Value {
    let (app, _dir) = common::build_test_app().await;
    let response = post_json(app, "/api/theme", json!({ "palette": palette })).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn primary_colors_map_to_seasons() {
    assert_eq!(classify(json!(["#ff0000"])).await["theme"], "Autumn");
    assert_eq!(classify(json!(["#00ff00"])).await["theme"], "Summer");
    assert_eq!(classify(json!(["#ffff00"])).await["theme"], "Spring");
    assert_eq!(classify(json!(["#0000ff"])).await["theme"], "Winter");
}

#[tokio::test]
async fn unparseable_colors_are_skipped() {
    assert_eq!(
        classify(json!(["not-a-color", "#0000FF", "#12"])).await["theme"],
        "Winter"
    );
    assert_eq!(classify(json!(["nope", ""])).await["theme"], "Neutral");
    assert_eq!(classify(json!([])).await["theme"], "Neutral");
}

#[tokio::test]
async fn missing_palette_is_a_bad_request() {
    let (app, _dir) = common::build_test_app().await;
    let response = post_json(app, "/api/theme", json!({ "colours": ["#ff0000"] })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "palette is required");
}

#[tokio::test]
async fn non_string_entries_are_skipped() {
    assert_eq!(
        classify(json!(["#ff0000", 42, null, {"hex": "#0000ff"}])).await["theme"],
        "Autumn"
    );
    assert_eq!(classify(json!([7, false])).await["theme"], "Neutral");
}

#[tokio::test]
async fn malformed_body_gets_json_error() {
    let (app, _dir) = common::build_test_app().await;
    let request = Request::post("/api/theme")
        .header("content-type", "application/json")
        .body(Body::from("{\"palette\": [\"#ff0000\""))
        .unwrap();

    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn wrongly_typed_palette_gets_json_error() {
    let (app, _dir) = common::build_test_app().await;
    let response = post_json(app, "/api/theme", json!({ "palette": "#ff0000" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
