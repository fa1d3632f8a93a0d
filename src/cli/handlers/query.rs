use anyhow::{Context, Result};

use crate::graphql::{build_schema, execute};

use super::CommandContext;

/// Execute a GraphQL request in-process and print the JSON response.
///
/// Returns an error when the response carries GraphQL errors, after printing it.
pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let variables = variables
        .map(|v| serde_json::from_str::<serde_json::Value>(&v))
        .transpose()
        .context("Invalid JSON in --variables")?;

    let schema = build_schema(ctx.store);
    let response = tokio::runtime::Runtime::new()?
        .block_on(async { execute(&schema, &query, variables).await });

    println!("{}", serde_json::to_string_pretty(&response)?);

    if let Some(err) = response.errors.first() {
        anyhow::bail!("Query failed: {}", err.message);
    }
    Ok(())
}
