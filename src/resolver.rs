use crate::{
    error::{PokeqlError, Result},
    model::Pokemon,
    store::RecordStore,
};
use std::fmt;

/// The four read operations, by the GraphQL field name they are exposed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    ListAll,
    FindByName,
    FilterByType,
    FilterByResistance,
}

const OPERATIONS: &[(&str, OperationKind)] = &[
    ("Pokemons", OperationKind::ListAll),
    ("Pokemon", OperationKind::FindByName),
    ("Type", OperationKind::FilterByType),
    ("Resists", OperationKind::FilterByResistance),
];

impl OperationKind {
    pub fn field_name(self) -> &'static str {
        OPERATIONS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    pub fn from_field_name(name: &str) -> Result<Self> {
        OPERATIONS
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| PokeqlError::UnknownOperation(name.to_string()))
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// A named operation with its argument bound.
///
/// A missing argument stays `None` and never matches anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListAll,
    FindByName(Option<String>),
    FilterByType(Option<String>),
    FilterByResistance(Option<String>),
}

impl Operation {
    /// `arg` is ignored for [`OperationKind::ListAll`].
    pub fn new(kind: OperationKind, arg: Option<String>) -> Self {
        match kind {
            OperationKind::ListAll => Operation::ListAll,
            OperationKind::FindByName => Operation::FindByName(arg),
            OperationKind::FilterByType => Operation::FilterByType(arg),
            OperationKind::FilterByResistance => Operation::FilterByResistance(arg),
        }
    }

    pub fn from_name(name: &str, arg: Option<String>) -> Result<Self> {
        Ok(Self::new(OperationKind::from_field_name(name)?, arg))
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::ListAll => OperationKind::ListAll,
            Operation::FindByName(_) => OperationKind::FindByName,
            Operation::FilterByType(_) => OperationKind::FilterByType,
            Operation::FilterByResistance(_) => OperationKind::FilterByResistance,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    One(Option<&'a Pokemon>),
    Many(Vec<&'a Pokemon>),
}

impl<'a> Resolution<'a> {
    pub fn into_vec(self) -> Vec<&'a Pokemon> {
        match self {
            Resolution::One(p) => p.into_iter().collect(),
            Resolution::Many(ps) => ps,
        }
    }
}

/// Read-only lookups over a record collection.
pub trait Resolver: Send + Sync {
    fn list_all(&self) -> Vec<&Pokemon>;

    /// First record whose name equals `name` exactly.
    fn find_by_name(&self, name: &str) -> Option<&Pokemon>;

    fn filter_by_type(&self, ty: &str) -> Vec<&Pokemon>;

    fn filter_by_resistance(&self, ty: &str) -> Vec<&Pokemon>;

    fn resolve(&self, op: &Operation) -> Resolution<'_> {
        tracing::debug!(operation = %op.kind(), "Resolving");
        match op {
            Operation::ListAll => Resolution::Many(self.list_all()),
            Operation::FindByName(name) => {
                Resolution::One(name.as_deref().and_then(|n| self.find_by_name(n)))
            }
            Operation::FilterByType(ty) => Resolution::Many(
                ty.as_deref()
                    .map(|t| self.filter_by_type(t))
                    .unwrap_or_default(),
            ),
            Operation::FilterByResistance(ty) => Resolution::Many(
                ty.as_deref()
                    .map(|t| self.filter_by_resistance(t))
                    .unwrap_or_default(),
            ),
        }
    }
}

impl Resolver for RecordStore {
    fn list_all(&self) -> Vec<&Pokemon> {
        self.all().iter().collect()
    }

    fn find_by_name(&self, name: &str) -> Option<&Pokemon> {
        self.all().iter().find(|p| p.name == name)
    }

    fn filter_by_type(&self, ty: &str) -> Vec<&Pokemon> {
        self.all().iter().filter(|p| p.has_type(ty)).collect()
    }

    fn filter_by_resistance(&self, ty: &str) -> Vec<&Pokemon> {
        self.all().iter().filter(|p| p.resists(ty)).collect()
    }
}
