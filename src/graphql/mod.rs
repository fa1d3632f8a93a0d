//! GraphQL schema and resolvers for pokeql.
//!
//! Exposes the record store as a read-only GraphQL API.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /graphql)
//! pokeql serve --port 4000
//!
//! # Execute a query from CLI
//! pokeql query '{ Pokemon(name: "Bulbasaur") { id types resistant } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `Pokemons`, `Pokemon(name)`, `Type(type)`, `Resists(type)`

mod schema;
mod types;

pub use schema::{PokeqlSchema, QueryRoot, build_schema, execute};
pub use types::*;
