use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistence boundary for articles. Lookups return `None` on a miss; the
/// application layer decides whether that is an error.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Full collection in insertion (id ascending) order.
    async fn find_all(&self) -> DomainResult<Vec<Article>>;
}
