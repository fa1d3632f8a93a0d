use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pokeql")]
#[command(
    author,
    version,
    about = "A GraphQL read API over a static Pokémon dataset"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .pokeql.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to a JSON dataset (overrides config, embedded dataset by default)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// List all pokemons
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a pokemon by exact name
    Show {
        /// Pokemon name (case-sensitive)
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List pokemons having a type
    Type {
        /// Type name, e.g. Grass
        r#type: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List pokemons resistant to a type
    Resists {
        /// Type name, e.g. Water
        r#type: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run an operation by its GraphQL field name (Pokemons, Pokemon, Type, Resists)
    Run {
        /// Operation name
        operation: String,

        /// Operation argument
        argument: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
