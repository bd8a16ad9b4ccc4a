//! Search page handler

use axum::response::Html;

/// Search page markup
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Serve the search page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
