use axum::response::Html;

/// GET /home : fixed fragment, ignores the request entirely.
pub async fn home() -> Html<&'static str> {
    Html("<h1>Home Page</h1>")
}
