//! src/routes/home.rs
use actix_web::{http::header::ContentType, HttpResponse};

pub const GREETING: &str = "Hello World! today is monday....";

#[tracing::instrument(name = "GET /")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(GREETING)
}
