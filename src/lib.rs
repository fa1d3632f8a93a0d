//! # pokeql - A GraphQL read API over a static Pokémon dataset
//!
//! pokeql loads a fixed collection of Pokémon records once at startup and
//! serves them through a GraphQL endpoint. The store is never mutated, so any
//! number of requests read the same snapshot without coordination.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://localhost:4000/graphql (GraphiQL on GET)
//! pokeql serve
//!
//! # Run a query without starting a server
//! pokeql query '{ Type(type: "Grass") { name } }'
//!
//! # Direct lookups
//! pokeql show Bulbasaur
//! pokeql resists Water
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and resolvers
//! - [`model`]: The Pokémon record
//! - [`resolver`]: The four read operations
//! - [`server`]: axum HTTP transport
//! - [`store`]: Immutable in-memory record store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.pokeql.toml` configuration files and discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `PokeqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema exposing the read operations.
pub mod graphql;

pub mod logging;

/// Data models.
pub mod model;

/// Read operations over the record store.
pub mod resolver;

pub mod server;

/// In-memory record store.
///
/// Loads the dataset once and exposes it read-only.
pub mod store;
