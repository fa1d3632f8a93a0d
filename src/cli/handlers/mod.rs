mod lookup;
mod query;
mod serve;
mod utils;

pub use lookup::handle_lookup;
pub use query::handle_query;
pub use serve::handle_serve;

use crate::config::PokeqlConfig;
use crate::store::RecordStore;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: PokeqlConfig,
    pub store: Arc<RecordStore>,
}

impl CommandContext {
    /// Load the dataset named by the config, or the embedded one.
    pub fn new(config: PokeqlConfig) -> crate::error::Result<Self> {
        let store = match config.data.path {
            Some(ref path) => RecordStore::load(path)?,
            None => RecordStore::embedded()?,
        };
        tracing::info!(records = store.len(), "Dataset loaded");
        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }
}
