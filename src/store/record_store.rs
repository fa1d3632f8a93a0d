use crate::{
    error::{PokeqlError, Result},
    model::Pokemon,
};
use std::path::Path;

/// Dataset shipped with the binary.
pub const EMBEDDED_DATASET: &str = include_str!("../data/pokemon.json");

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Pokemon>,
}

impl RecordStore {
    pub fn new(records: Vec<Pokemon>) -> Result<Self> {
        for (index, record) in records.iter().enumerate() {
            validate_record(index, record)?;
        }
        Ok(Self { records })
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Pokemon> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), records = store.len(), "Loaded dataset file");
        Ok(store)
    }

    /// All records in dataset order.
    pub fn all(&self) -> &[Pokemon] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate_record(index: usize, record: &Pokemon) -> Result<()> {
    if record.name.trim().is_empty() {
        return Err(PokeqlError::InvalidRecord {
            index,
            reason: "name cannot be empty".to_string(),
        });
    }
    if record.weaknesses.is_empty() {
        return Err(PokeqlError::InvalidRecord {
            index,
            reason: format!("{} has no weaknesses", record.name),
        });
    }
    Ok(())
}
