// src/presentation/http/extractors.rs

/// Allow-listed article form fields. Submitted fields outside the list are
/// dropped before anything is constructed from them, so a payload like
/// `title=x&description=y&admin=true` cannot reach the store with `admin`.
#[derive(Debug, Default, Clone)]
pub struct ArticleParams {
    pub title: String,
    pub description: String,
}

impl ArticleParams {
    /// Parse a `application/x-www-form-urlencoded` body, keeping only the
    /// permitted fields. An unparseable body yields empty params, which fail
    /// presence validation downstream.
    pub fn from_form(body: &str) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(body).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "malformed form body");
            Vec::new()
        });

        let mut params = Self::default();
        for (name, value) in pairs {
            match name.as_str() {
                "title" => params.title = value,
                "description" => params.description = value,
                other => {
                    tracing::debug!(field = other, "dropping unpermitted form field");
                }
            }
        }
        params
    }
}
