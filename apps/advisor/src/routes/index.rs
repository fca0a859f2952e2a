use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// Single-page upload form; all computation happens in the JSON endpoints.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
