use serde::{Deserialize, Serialize};

/// A dataset record. Only `name` and `weaknesses` are required; every other
/// field may be missing or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistant: Option<Vec<String>>,

    pub weaknesses: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Range>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Range>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flee_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolution_requirements: Option<EvolutionRequirements>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolutions: Option<Vec<EvolutionRef>>,

    #[serde(rename = "maxCP", default, skip_serializing_if = "Option::is_none")]
    pub max_cp: Option<i32>,

    #[serde(rename = "maxHP", default, skip_serializing_if = "Option::is_none")]
    pub max_hp: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacks: Option<Attacks>,
}

impl Pokemon {
    /// Exact, case-sensitive type membership. A record without types matches nothing.
    pub fn has_type(&self, ty: &str) -> bool {
        contains(self.types.as_deref(), ty)
    }

    pub fn resists(&self, ty: &str) -> bool {
        contains(self.resistant.as_deref(), ty)
    }
}

fn contains(tags: Option<&[String]>, tag: &str) -> bool {
    tags.is_some_and(|tags| tags.iter().any(|t| t == tag))
}

/// Minimum and maximum kept as the dataset's text, e.g. `"6.04kg"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    #[serde(default)]
    pub minimum: Option<String>,
    #[serde(default)]
    pub maximum: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionRequirements {
    #[serde(default)]
    pub amount: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Reference to another entity by its numeric identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionRef {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub attack_type: Option<String>,
    #[serde(default)]
    pub damage: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attacks {
    #[serde(default)]
    pub fast: Option<Vec<Attack>>,
    #[serde(default)]
    pub special: Option<Vec<Attack>>,
}
