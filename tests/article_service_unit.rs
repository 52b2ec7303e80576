// tests/article_service_unit.rs
use std::sync::Arc;

use fude_blog::application::{
    commands::articles::{ArticleCommandService, CreateArticleCommand},
    error::ApplicationError,
    ports::time::Clock,
    queries::articles::{ArticleQueryService, GetArticleByIdQuery},
};
use fude_blog::domain::errors::DomainError;

mod support;

fn services_over(
    repo: Arc<support::InMemoryArticleRepository>,
) -> (ArticleCommandService, ArticleQueryService) {
    let clock: Arc<dyn Clock> = Arc::new(support::FixedClock);
    (
        ArticleCommandService::new(repo.clone(), clock),
        ArticleQueryService::new(repo),
    )
}

#[tokio::test]
async fn create_then_get_by_id_round_trips() {
    let repo = Arc::new(support::InMemoryArticleRepository::new());
    let (commands, queries) = services_over(repo);

    let created = commands
        .create_article(CreateArticleCommand {
            title: "Hello".into(),
            description: "World".into(),
        })
        .await
        .unwrap();

    let fetched = queries
        .get_article_by_id(GetArticleByIdQuery { id: created.id })
        .await
        .unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "Hello");
    assert_eq!(fetched.description, "World");
}

#[tokio::test]
async fn create_stamps_both_timestamps_from_the_clock() {
    let repo = Arc::new(support::InMemoryArticleRepository::new());
    let (commands, _) = services_over(repo);

    let created = commands
        .create_article(CreateArticleCommand {
            title: "Hello".into(),
            description: "World".into(),
        })
        .await
        .unwrap();

    assert_eq!(created.created_at, Some(support::fixed_now()));
    assert_eq!(created.updated_at, created.created_at);
}

#[tokio::test]
async fn get_by_id_misses_with_not_found() {
    let repo = Arc::new(support::InMemoryArticleRepository::new());
    let (_, queries) = services_over(repo);

    let err = queries
        .get_article_by_id(GetArticleByIdQuery { id: 999_999 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    // Ids the store could never assign miss the same way.
    let err = queries
        .get_article_by_id(GetArticleByIdQuery { id: -1 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn list_grows_by_one_per_successful_create() {
    let repo = Arc::new(support::InMemoryArticleRepository::new());
    let (commands, queries) = services_over(repo);

    for i in 1..=4 {
        commands
            .create_article(CreateArticleCommand {
                title: format!("Post {i}"),
                description: format!("Body {i}"),
            })
            .await
            .unwrap();
    }

    let listed = queries.list_articles().await.unwrap();
    assert_eq!(listed.len(), 4);
    let ids: Vec<i64> = listed.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn blank_fields_fail_validation_before_the_store() {
    let repo = Arc::new(support::InMemoryArticleRepository::new());
    let (commands, queries) = services_over(repo.clone());

    for (title, description) in [("", "World"), ("Hello", ""), ("  ", "World")] {
        let err = commands
            .create_article(CreateArticleCommand {
                title: title.into(),
                description: description.into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::Validation(_))
        ));
    }

    assert!(repo.stored().is_empty());
    assert!(queries.list_articles().await.unwrap().is_empty());
}
