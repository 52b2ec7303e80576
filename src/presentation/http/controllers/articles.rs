// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::CreateArticleCommand, error::ApplicationError,
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{extractors::ArticleParams, flash, views};
use axum::{
    Extension,
    extract::Path,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};

/// Render a page, consuming any pending flash notice: it is shown once and
/// the clearing cookie rides along with the response.
fn render_with_flash(headers: &HeaderMap, render: impl FnOnce(Option<&str>) -> String) -> Response {
    let notice = flash::read(headers);
    let page = Html(render(notice.as_deref()));
    if notice.is_some() {
        ([(header::SET_COOKIE, flash::clear_cookie())], page).into_response()
    } else {
        page.into_response()
    }
}

pub async fn index(
    Extension(state): Extension<HttpState>,
    headers: HeaderMap,
) -> HttpResult<Response> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;

    Ok(render_with_flash(&headers, |notice| {
        views::articles_index(&articles, notice)
    }))
}

pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> HttpResult<Response> {
    // A non-numeric id cannot name an article, so it is a 404 rather than a
    // malformed request.
    let id: i64 = id
        .parse()
        .map_err(|_| HttpError::not_found("article not found"))?;

    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    Ok(render_with_flash(&headers, |notice| {
        views::article_show(&article, notice)
    }))
}

pub async fn new_form() -> Html<String> {
    Html(views::article_form("", "", &[]))
}

pub async fn create(Extension(state): Extension<HttpState>, body: String) -> HttpResult<Response> {
    let params = ArticleParams::from_form(&body);
    let command = CreateArticleCommand {
        title: params.title.clone(),
        description: params.description.clone(),
    };

    match state
        .services
        .article_commands
        .create_article(command)
        .await
    {
        Ok(article) => {
            let cookie = flash::set_cookie("Article was successfully created.");
            let location = format!("/articles/{}", article.id);
            Ok(([(header::SET_COOKIE, cookie)], Redirect::to(&location)).into_response())
        }
        // Validation failure re-renders the form, keeping what was typed.
        Err(ApplicationError::Domain(crate::domain::errors::DomainError::Validation(message)))
        | Err(ApplicationError::Validation(message)) => {
            let page = views::article_form(&params.title, &params.description, &[message]);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response())
        }
        Err(other) => Err(HttpError::from_error(other)),
    }
}
