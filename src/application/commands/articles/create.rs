// src/application/commands/articles/create.rs
use super::service::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleDescription, ArticleTitle, NewArticle},
};

/// Fields permitted through the mass-assignment guard. Anything else the
/// client submitted was dropped before this command was built.
pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let description = ArticleDescription::new(command.description)?;
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            description,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.insert(new_article).await?;
        tracing::info!(id = %created.id, "article created");
        Ok(created.into())
    }
}
