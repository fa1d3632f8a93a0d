use anyhow::Result;

use crate::graphql::build_schema;
use crate::server::{GRAPHQL_PATH, run_server};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext) -> Result<()> {
    let server = &ctx.config.server;
    let addrs = server.socket_addrs()?;
    let schema = build_schema(ctx.store);

    println!(
        "Starting GraphQL server on http://{}:{}{}",
        server.host, server.port, GRAPHQL_PATH
    );
    println!("GraphiQL: http://{}:{}{}", server.host, server.port, GRAPHQL_PATH);

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &addrs).await })?;
    Ok(())
}
