use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{Router, response::Html, routing::get};
use tower_http::trace::TraceLayer;

use super::ItemSchema;
use crate::config::{ServerSettings, validate_endpoint_path};
use crate::error::Result;

/// Router serving the schema at `path`: POST executes requests, GET serves GraphiQL.
pub fn router(schema: ItemSchema, path: &str) -> Result<Router> {
    validate_endpoint_path(path)?;

    let endpoint = path.to_string();
    let graphiql = move || {
        let endpoint = endpoint.clone();
        async move { Html(GraphiQLSource::build().endpoint(&endpoint).finish()) }
    };

    let router = Router::new()
        .route(path, get(graphiql).post_service(GraphQL::new(schema)))
        .layer(TraceLayer::new_for_http());
    Ok(router)
}

/// Bind to `settings.host:settings.port` and serve until Ctrl-C.
pub async fn run_server(schema: ItemSchema, settings: &ServerSettings) -> anyhow::Result<()> {
    let app = router(schema, &settings.path)?;
    let listener = tokio::net::TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(addr = %local_addr, path = %settings.path, "GraphQL server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
