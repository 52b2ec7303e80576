// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

use fude_blog::application::ports::time::Clock;
use fude_blog::domain::article::{Article, ArticleId, ArticleRepository, NewArticle};
use fude_blog::domain::errors::{DomainError, DomainResult};

/* -------------------------------- Clock -------------------------------- */

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Deterministic clock for service tests.
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/* --------------------------- ArticleRepository -------------------------- */

/// In-memory store with the same observable behaviour as the SQLite
/// repository: fresh ascending ids, insertion-ordered listing.
pub struct InMemoryArticleRepository {
    articles: Mutex<Vec<Article>>,
    next_id: AtomicI64,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            articles: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Snapshot of everything persisted, for assertions.
    pub fn stored(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            description: article.description,
            created_at: Some(article.created_at),
            updated_at: Some(article.updated_at),
        };
        self.articles.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.articles.lock().unwrap().clone())
    }
}

/// Repository whose every operation fails, for infrastructure error paths.
pub struct FailingArticleRepository;

#[async_trait]
impl ArticleRepository for FailingArticleRepository {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(DomainError::Persistence("store unavailable".into()))
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("store unavailable".into()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("store unavailable".into()))
    }
}
