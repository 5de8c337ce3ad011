//! HTTP server exposing the todo-item service over REST and GraphQL.
//!
//! # Design
//! - `bootstrap` is the composition root: it builds the logger registry and
//!   the one shared `TodoItemService`.
//! - `rest` and `graphql` are independent routers over that shared service;
//!   `router` merges them, but either can be mounted alone.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod graphql;
pub mod logging;
pub mod rest;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use bootstrap::SharedService;
pub use config::AppConfig;
pub use error::ServerError;

/// Both façades over `service`, with request tracing.
pub fn router(service: SharedService) -> Router {
    Router::new()
        .merge(rest::router(service.clone()))
        .merge(graphql::router(service))
        .layer(TraceLayer::new_for_http())
}

/// Wire the service from `config` and return the full application.
pub fn app(config: &AppConfig) -> Result<Router, ServerError> {
    let service = bootstrap::todo_item_service(&bootstrap::loggers(), &config.constant)?;
    Ok(router(service))
}

pub async fn run(listener: TcpListener, config: &AppConfig) -> Result<(), ServerError> {
    if let Some(path) = &config.schema_file {
        tokio::fs::write(path, graphql::schema_sdl()).await?;
        tracing::info!(path = %path.display(), "wrote GraphQL schema");
    }
    let app = app(config)?;
    axum::serve(listener, app).await?;
    Ok(())
}
