// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, pages};
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Router, routing::get};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/health", get(health))
        .route("/articles", get(articles::index).post(articles::create))
        .route("/articles/new", get(articles::new_form))
        .route("/articles/{id}", get(articles::show))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

async fn not_found() -> HttpError {
    HttpError::not_found("no route matches the request")
}
