//! HTTP-level integration tests for saving, listing and searching outfits.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, save_outfit};
use serde_json::json;

fn outfit(caption: &str, tags: &[&str], theme: &str) -> serde_json::Value {
    json!({
        "image_url": format!("/uploads/{caption}.jpg"),
        "colours": ["#aa3300", "#ffeecc"],
        "theme": theme,
        "caption": caption,
        "tags": tags,
    })
}

fn captions(json: &serde_json::Value) -> Vec<String> {
    json["outfits"]
        .as_array()
        .expect("outfits should be an array")
        .iter()
        .map(|o| o["caption"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Save
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_returns_created_entry() {
    let (app, _dir) = common::build_test_app().await;

    let response = post_json(
        app,
        "/api/outfits/save",
        outfit("brunch", &["casual"], "autumn"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Outfit saved");
    assert_eq!(json["entry"]["id"], 1);
    assert_eq!(json["entry"]["theme"], "Autumn");
    assert_eq!(json["entry"]["caption"], "brunch");
    assert_eq!(json["entry"]["tags"], json!(["casual"]));
    assert!(json["entry"]["timestamp"].is_string());
}

#[tokio::test]
async fn save_defaults_optional_fields() {
    let (app, _dir) = common::build_test_app().await;

    let entry = save_outfit(
        app,
        json!({ "image_url": "/uploads/a.jpg", "colours": ["#000000"] }),
    )
    .await;

    assert_eq!(entry["caption"], "");
    assert_eq!(entry["tags"], json!([]));
    assert!(entry["theme"].is_null());
}

#[tokio::test]
async fn save_rejects_missing_required_fields() {
    let (app, _dir) = common::build_test_app().await;

    let response = post_json(app.clone(), "/api/outfits/save", json!({ "colours": ["#fff000"] })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("image_url"));

    let response = post_json(
        app.clone(),
        "/api/outfits/save",
        json!({ "image_url": "/uploads/a.jpg", "colours": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"]
        .as_str()
        .unwrap()
        .contains("colours"));

    // Nothing was persisted.
    let json = body_json(get(app, "/api/outfits/recent").await).await;
    assert!(json["outfits"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn save_rejects_unknown_theme() {
    let (app, _dir) = common::build_test_app().await;

    let response = post_json(app, "/api/outfits/save", outfit("x", &[], "monsoon")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Recent
// ---------------------------------------------------------------------------

#[tokio::test]
async fn recent_returns_newest_first_with_default_limit() {
    let (app, _dir) = common::build_test_app().await;
    for i in 0..7 {
        save_outfit(app.clone(), outfit(&format!("look {i}"), &[], "spring")).await;
    }

    let json = body_json(get(app.clone(), "/api/outfits/recent").await).await;
    assert_eq!(
        captions(&json),
        vec!["look 6", "look 5", "look 4", "look 3", "look 2"]
    );

    let json = body_json(get(app, "/api/outfits/recent?limit=2").await).await;
    assert_eq!(captions(&json), vec!["look 6", "look 5"]);
}

#[tokio::test]
async fn recent_on_empty_store_is_empty() {
    let (app, _dir) = common::build_test_app().await;
    let response = get(app, "/api/outfits/recent?limit=3").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["outfits"], json!([]));
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_filters_by_all_tags_and_theme() {
    let (app, _dir) = common::build_test_app().await;
    save_outfit(app.clone(), outfit("a", &["casual", "blue"], "summer")).await;
    save_outfit(app.clone(), outfit("b", &["casual"], "summer")).await;
    save_outfit(app.clone(), outfit("c", &["Blue", "CASUAL", "denim"], "winter")).await;

    let json = body_json(get(app.clone(), "/api/outfits/search?tags=casual,%20blue").await).await;
    assert_eq!(captions(&json), vec!["c", "a"]);
    assert_eq!(json["total"], 2);

    let json =
        body_json(get(app.clone(), "/api/outfits/search?tags=casual&theme=SUMMER").await).await;
    assert_eq!(captions(&json), vec!["b", "a"]);

    let json = body_json(get(app, "/api/outfits/search?tags=formal").await).await;
    assert_eq!(json["outfits"], json!([]));
    assert_eq!(json["total"], 0);
    assert_eq!(json["total_pages"], 0);
}

#[tokio::test]
async fn search_sorts_by_key() {
    let (app, _dir) = common::build_test_app().await;
    save_outfit(app.clone(), outfit("banana", &[], "spring")).await;
    save_outfit(app.clone(), outfit("Apple", &[], "spring")).await;
    save_outfit(app.clone(), outfit("cherry", &[], "spring")).await;

    let json = body_json(get(app.clone(), "/api/outfits/search?sort=alphabetical").await).await;
    assert_eq!(captions(&json), vec!["Apple", "banana", "cherry"]);

    let json = body_json(get(app.clone(), "/api/outfits/search?sort=oldest").await).await;
    assert_eq!(captions(&json), vec!["banana", "Apple", "cherry"]);

    let json = body_json(get(app.clone(), "/api/outfits/search?sort=newest").await).await;
    assert_eq!(captions(&json), vec!["cherry", "Apple", "banana"]);

    // Unknown keys leave store order alone.
    let json = body_json(get(app, "/api/outfits/search?sort=popularity").await).await;
    assert_eq!(captions(&json), vec!["cherry", "Apple", "banana"]);
}

#[tokio::test]
async fn search_paginates_twelve_entries() {
    let (app, _dir) = common::build_test_app().await;
    for i in 0..12 {
        save_outfit(app.clone(), outfit(&format!("look {i}"), &[], "winter")).await;
    }

    let json = body_json(get(app.clone(), "/api/outfits/search?page=2&limit=5").await).await;
    assert_eq!(
        captions(&json),
        vec!["look 6", "look 5", "look 4", "look 3", "look 2"]
    );
    assert_eq!(json["page"], 2);
    assert_eq!(json["limit"], 5);
    assert_eq!(json["total"], 12);
    assert_eq!(json["total_pages"], 3);

    let json = body_json(get(app.clone(), "/api/outfits/search?page=3&limit=5").await).await;
    assert_eq!(captions(&json), vec!["look 1", "look 0"]);

    let json = body_json(get(app, "/api/outfits/search?page=9&limit=5").await).await;
    assert_eq!(json["outfits"], json!([]));
    assert_eq!(json["total"], 12);
}

#[tokio::test]
async fn search_clamps_page_and_limit() {
    let (app, _dir) = common::build_test_app().await;
    save_outfit(app.clone(), outfit("only", &[], "winter")).await;

    let json = body_json(get(app.clone(), "/api/outfits/search?page=0&limit=0").await).await;
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 1);
    assert_eq!(captions(&json), vec!["only"]);

    let json = body_json(get(app, "/api/outfits/search?limit=5000").await).await;
    assert_eq!(json["limit"], 100);
    assert_eq!(json["page"], 1);
}
