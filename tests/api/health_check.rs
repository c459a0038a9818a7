//! tests/api/health_check.rs

use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_works() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/health").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        "Application is running",
        response.text().await.expect("Failed to read body.")
    );
}

#[tokio::test]
async fn health_check_is_plain_text() {
    let app = spawn_app().await;

    let response = app.get("/health").await;

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header.");
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));
}

#[tokio::test]
async fn health_check_is_the_same_on_every_request() {
    let app = spawn_app().await;

    let first = app.get("/health").await.text().await.unwrap();
    let second = app.get("/health").await.text().await.unwrap();

    assert_eq!(first, second);
}
