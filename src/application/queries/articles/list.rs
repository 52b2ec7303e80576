use super::service::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// Full collection in store order. An empty collection is a valid result,
    /// never an error.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.repo.find_all().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
