//! HTTP transport for the GraphQL schema.
//!
//! `POST /graphql` executes requests, `GET /graphql` serves GraphiQL.

use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;

use crate::error::Result;
use crate::graphql::PokeqlSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

pub fn router(schema: PokeqlSchema) -> Router {
    Router::new().route(
        GRAPHQL_PATH,
        get(graphiql).post_service(GraphQL::new(schema)),
    )
}

/// Serve on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, schema: PokeqlSchema) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "GraphQL server listening");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

/// Bind the first of `addrs` that accepts and serve on it.
pub async fn run_server(schema: PokeqlSchema, addrs: &[SocketAddr]) -> Result<()> {
    let listener = TcpListener::bind(addrs).await?;
    serve(listener, schema).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
