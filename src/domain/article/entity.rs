// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleDescription, ArticleId, ArticleTitle};
use chrono::{DateTime, Utc};

/// A persisted article. `id` is immutable once assigned by the store.
///
/// Timestamps are optional because the columns were added to the schema
/// after the table existed; every row written by this application has them
/// populated.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// An article about to be persisted; the store allocates the id.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
