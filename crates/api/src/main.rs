use std::sync::Arc;

use stromlager_catalog::InMemoryArticleStore;
use stromlager_search::ArticleCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stromlager_observability::init();

    let addr = std::env::var("STROMLAGER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let catalog: Arc<dyn ArticleCatalog> = Arc::new(InMemoryArticleStore::new());
    let app = stromlager_api::app::build_app(catalog);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
