use std::sync::Arc;

use docshelf_api_rest::{router, AppState};
use docshelf_store::{DocumentStore, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the docshelf server
///
/// Resolves configuration from the environment, opens the document store
/// (rebuilding the index from the document tree when absent) and serves the
/// REST API with OpenAPI/Swagger documentation at `/swagger-ui`.
///
/// # Environment Variables
/// - `DOCSHELF_ADDR`: server address (default: "0.0.0.0:3000")
/// - `DOCSHELF_ROOT`: root directory for document storage (default: "/document_data")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the document store cannot be opened or its index rebuilt,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("docshelf=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("DOCSHELF_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let root = std::env::var("DOCSHELF_ROOT").unwrap_or_else(|_| "/document_data".into());

    tracing::info!("++ Starting docshelf REST on {} (root: {})", addr, root);

    let cfg = StoreConfig::new(root)?;
    let store = DocumentStore::open(cfg)?;
    let app = router(AppState {
        store: Arc::new(store),
    });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
