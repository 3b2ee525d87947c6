use axum::response::Html;

/// GET /roadmap
/// Serves the roadmap UI shell bundled with the binary.
pub async fn roadmap_page() -> Html<&'static str> {
    Html(include_str!("../../templates/roadmap.html"))
}
