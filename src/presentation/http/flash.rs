// src/presentation/http/flash.rs
//
// One-shot notices carried across a redirect in a `flash` cookie. The
// redirect response sets it, the next rendered page reads it and sends the
// clearing cookie, so a notice is never shown twice.
use axum::http::{HeaderMap, header};

const COOKIE_NAME: &str = "flash";

/// `Set-Cookie` value carrying `message` to the next rendered page.
pub fn set_cookie(message: &str) -> String {
    // serde_urlencoded produces the `flash=...` pair with the value encoded.
    let pair = serde_urlencoded::to_string([(COOKIE_NAME, message)])
        .unwrap_or_else(|_| format!("{COOKIE_NAME}="));
    format!("{pair}; Path=/; HttpOnly")
}

/// `Set-Cookie` value that expires the notice.
pub fn clear_cookie() -> String {
    format!("{COOKIE_NAME}=; Path=/; Max-Age=0; HttpOnly")
}

/// Pending notice from the request's `Cookie` header, if any.
pub fn read(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    for part in raw.split(';') {
        let part = part.trim();
        if !part.starts_with(COOKIE_NAME) {
            continue;
        }
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(part).ok()?;
        if let Some((_, value)) = pairs.into_iter().find(|(name, _)| name == COOKIE_NAME) {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}
