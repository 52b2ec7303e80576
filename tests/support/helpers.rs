// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::Response;
use std::sync::Arc;

use fude_blog::application::{ports::time::Clock, services::ApplicationServices};
use fude_blog::domain::article::ArticleRepository;
use fude_blog::presentation::http::{routes::build_router, state::HttpState};

pub fn make_test_router_with_repo(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);
    let services = Arc::new(ApplicationServices::new(repo, clock));
    build_router(HttpState { services })
}

/// Router over a fresh in-memory repository; the repository handle is
/// returned so tests can inspect what was persisted.
pub fn make_test_router() -> (axum::Router, Arc<mocks::InMemoryArticleRepository>) {
    let repo = Arc::new(mocks::InMemoryArticleRepository::new());
    let router = make_test_router_with_repo(repo.clone());
    (router, repo)
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8_lossy(&bytes).into_owned()
}
