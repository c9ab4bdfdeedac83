use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;

use stromlager_articles::SearchQuery;
use stromlager_search::{ArticleCatalog, SearchEngine, SearchError};

/// Request-scoped services shared by all handlers.
#[derive(Clone)]
pub struct AppServices {
    engine: Arc<SearchEngine<Arc<dyn ArticleCatalog>>>,
}

impl AppServices {
    pub fn new(catalog: Arc<dyn ArticleCatalog>) -> Self {
        Self {
            engine: Arc::new(SearchEngine::new(catalog)),
        }
    }
}

/// Build the full HTTP router over the given catalog.
pub fn build_app(catalog: Arc<dyn ArticleCatalog>) -> Router {
    let services = AppServices::new(catalog);

    Router::new()
        .route("/health", get(health))
        .route("/articles/search", post(search_articles))
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn search_articles(
    Extension(services): Extension<AppServices>,
    Json(query): Json<SearchQuery>,
) -> axum::response::Response {
    if let Err(e) = query.validate() {
        return json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string());
    }

    match services.engine.search(&query) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(SearchError::NoMatch) => {
            json_error(StatusCode::NOT_FOUND, "not_found", "no matching items")
        }
    }
}

fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(serde_json::json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
