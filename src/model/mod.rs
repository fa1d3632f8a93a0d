//! Data models for pokeql.
//!
//! This module defines the record shape held by the store:
//!
//! - [`Pokemon`]: one entity of the dataset
//! - [`Range`]: unit-bearing minimum/maximum pair used for weight and height
//! - [`EvolutionRequirements`], [`EvolutionRef`]: evolution metadata
//! - [`Attack`], [`Attacks`]: fast and special moves

mod pokemon;

pub use pokemon::{Attack, Attacks, EvolutionRef, EvolutionRequirements, Pokemon, Range};
