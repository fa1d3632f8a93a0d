//! In-memory record store for pokeql.
//!
//! The dataset is a JSON array of [`Pokemon`](crate::model::Pokemon) records,
//! parsed once at startup and never mutated afterwards.
//!
//! ## Sources
//!
//! - [`RecordStore::embedded`]: the dataset compiled into the binary
//! - [`RecordStore::load`]: a dataset file on disk
//! - [`RecordStore::from_json`]: a JSON string, mostly for fixtures

mod record_store;

pub use record_store::{EMBEDDED_DATASET, RecordStore};
