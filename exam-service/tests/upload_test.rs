mod common;

use axum::http::StatusCode;
use common::{pdf_with_pages, TestApp};

#[tokio::test]
async fn upload_pdf_works() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = app
        .upload_pdf(
            &client,
            pdf_with_pages(&["Photosynthesis converts light into chemical energy."]),
        )
        .await;

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "PDF uploaded successfully");

    // The single slot now holds the upload.
    let stored = std::path::Path::new(&app.storage_path).join("uploaded.pdf");
    assert!(stored.exists());

    app.cleanup().await;
}

#[tokio::test]
async fn upload_without_file_is_rejected() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/upload", app.address))
        .multipart(reqwest::multipart::Form::new())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "No file uploaded");

    app.cleanup().await;
}

#[tokio::test]
async fn upload_accepts_any_bytes_without_validation() {
    // Extractability is only checked when answering, not at upload time.
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = app.upload_pdf(&client, b"not actually a pdf".to_vec()).await;

    assert_eq!(StatusCode::OK, response.status());

    app.cleanup().await;
}
