//! HTTP-level integration tests for palette extraction from uploads.

mod common;

use std::io::Cursor;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, send};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

const BOUNDARY: &str = "----blackstylesTestBoundary";

fn two_tone(format: ImageFormat) -> Vec<u8> {
    let image = RgbImage::from_fn(240, 240, |x, _| {
        if x < 180 {
            Rgb([200, 30, 30])
        } else {
            Rgb([20, 20, 160])
        }
    });
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut buf), format)
        .unwrap();
    buf
}

fn two_tone_png() -> Vec<u8> {
    two_tone(ImageFormat::Png)
}

fn multipart_request(field: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::post("/api/image/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn upload_returns_palette_largest_cluster_first() {
    let (app, _dir) = common::build_test_app().await;
    let response = send(app, multipart_request("image", "look.PNG", &two_tone_png())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    // The 200x200 center crop spans x 20..220: 160 columns red, 40 blue.
    assert_eq!(json["palette"], serde_json::json!(["#c81e1e", "#1414a0"]));
}

#[tokio::test]
async fn webp_upload_is_accepted() {
    let (app, _dir) = common::build_test_app().await;
    let bytes = two_tone(ImageFormat::WebP);
    let response = send(app, multipart_request("image", "look.webp", &bytes)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["palette"], serde_json::json!(["#c81e1e", "#1414a0"]));
}

#[tokio::test]
async fn disallowed_extension_is_rejected() {
    let (app, _dir) = common::build_test_app().await;
    let response = send(app, multipart_request("image", "look.gif", &two_tone_png())).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn missing_image_field_is_rejected() {
    let (app, _dir) = common::build_test_app().await;
    let response = send(app, multipart_request("photo", "look.png", &two_tone_png())).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No image file provided");
}

#[tokio::test]
async fn undecodable_image_is_a_validation_error() {
    let (app, _dir) = common::build_test_app().await;
    let response = send(app, multipart_request("image", "look.jpg", b"not really a jpeg")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
