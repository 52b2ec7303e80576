// src/presentation/http/controllers/pages.rs
use crate::presentation::http::views;
use axum::response::Html;

pub async fn home() -> Html<String> {
    Html(views::home())
}

pub async fn about() -> Html<String> {
    Html(views::about())
}
