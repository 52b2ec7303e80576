// src/presentation/http/views.rs
//
// Server-rendered view states. Rendering stays deliberately small: a shared
// layout and one function per page, all user content escaped.
use crate::application::dto::ArticleDto;
use axum::http::StatusCode;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, flash: Option<&str>, body: &str) -> String {
    let notice = flash
        .map(|message| format!("<p class=\"notice\">{}</p>\n", escape(message)))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n\
         <nav><a href=\"/\">Home</a> | <a href=\"/about\">About</a> | \
         <a href=\"/articles\">Articles</a></nav>\n{notice}{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

pub fn home() -> String {
    layout(
        "Home",
        None,
        "<h1>Welcome to the blog</h1>\n<p><a href=\"/articles\">Browse articles</a></p>",
    )
}

pub fn about() -> String {
    layout(
        "About",
        None,
        "<h1>About</h1>\n<p>A small blog: articles with a title and a description.</p>",
    )
}

pub fn articles_index(articles: &[ArticleDto], flash: Option<&str>) -> String {
    let mut body = String::from("<h1>Articles</h1>\n<ul>\n");
    for article in articles {
        body.push_str(&format!(
            "<li><a href=\"/articles/{}\">{}</a></li>\n",
            article.id,
            escape(&article.title),
        ));
    }
    body.push_str("</ul>\n<p><a href=\"/articles/new\">New article</a></p>");
    layout("Articles", flash, &body)
}

pub fn article_show(article: &ArticleDto, flash: Option<&str>) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/articles\">Back to articles</a></p>",
        escape(&article.title),
        escape(&article.description),
    );
    layout(&article.title, flash, &body)
}

/// The new-article form. On validation failure it is re-rendered with the
/// entered values and the error messages.
pub fn article_form(title: &str, description: &str, errors: &[String]) -> String {
    let mut body = String::from("<h1>New article</h1>\n");
    if !errors.is_empty() {
        body.push_str("<ul class=\"errors\">\n");
        for error in errors {
            body.push_str(&format!("<li>{}</li>\n", escape(error)));
        }
        body.push_str("</ul>\n");
    }
    body.push_str(&format!(
        "<form action=\"/articles\" method=\"post\">\n\
         <label>Title <input type=\"text\" name=\"title\" value=\"{}\"></label>\n\
         <label>Description <textarea name=\"description\">{}</textarea></label>\n\
         <button type=\"submit\">Create Article</button>\n</form>",
        escape(title),
        escape(description),
    ));
    layout("New article", None, &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error"),
    );
    let body = format!("<h1>{}</h1>\n<p>{}</p>", escape(&heading), escape(message));
    layout(&heading, None, &body)
}
