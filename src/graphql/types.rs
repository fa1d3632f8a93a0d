use crate::model;
use async_graphql::SimpleObject;

/// Lists are `[T]` like the rest of the schema: nullable list, nullable items.
fn nullable_list<T, U>(items: &[T]) -> Vec<Option<U>>
where
    for<'a> U: From<&'a T>,
{
    items.iter().map(|item| Some(U::from(item))).collect()
}

#[derive(SimpleObject)]
pub struct Weight {
    pub minimum: Option<String>,
    pub maximum: Option<String>,
}

impl From<&model::Range> for Weight {
    fn from(r: &model::Range) -> Self {
        Self {
            minimum: r.minimum.clone(),
            maximum: r.maximum.clone(),
        }
    }
}

#[derive(SimpleObject)]
pub struct Height {
    pub minimum: Option<String>,
    pub maximum: Option<String>,
}

impl From<&model::Range> for Height {
    fn from(r: &model::Range) -> Self {
        Self {
            minimum: r.minimum.clone(),
            maximum: r.maximum.clone(),
        }
    }
}

#[derive(SimpleObject)]
pub struct EvolutionReqs {
    pub amount: Option<i32>,
    pub name: Option<String>,
}

impl From<&model::EvolutionRequirements> for EvolutionReqs {
    fn from(e: &model::EvolutionRequirements) -> Self {
        Self {
            amount: e.amount,
            name: e.name.clone(),
        }
    }
}

#[derive(SimpleObject)]
pub struct IdName {
    pub id: Option<i32>,
    pub name: Option<String>,
}

impl From<&model::EvolutionRef> for IdName {
    fn from(e: &model::EvolutionRef) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
        }
    }
}

#[derive(SimpleObject)]
pub struct SingleAttack {
    pub name: Option<String>,
    #[graphql(name = "type")]
    pub attack_type: Option<String>,
    pub damage: Option<i32>,
}

impl From<&model::Attack> for SingleAttack {
    fn from(a: &model::Attack) -> Self {
        Self {
            name: a.name.clone(),
            attack_type: a.attack_type.clone(),
            damage: a.damage,
        }
    }
}

#[derive(SimpleObject)]
pub struct Attacks {
    pub fast: Option<Vec<Option<SingleAttack>>>,
    pub special: Option<Vec<Option<SingleAttack>>>,
}

impl From<&model::Attacks> for Attacks {
    fn from(a: &model::Attacks) -> Self {
        Self {
            fast: a.fast.as_deref().map(nullable_list),
            special: a.special.as_deref().map(nullable_list),
        }
    }
}

/// Only `name` and `weaknesses` are non-null.
#[derive(SimpleObject)]
pub struct Pokemon {
    pub id: Option<String>,
    pub name: String,
    pub classification: Option<String>,
    pub types: Option<Vec<Option<String>>>,
    pub resistant: Option<Vec<Option<String>>>,
    pub weaknesses: Vec<Option<String>>,
    pub weight: Option<Weight>,
    pub height: Option<Height>,
    pub flee_rate: Option<f64>,
    pub evolution_requirements: Option<EvolutionReqs>,
    pub evolutions: Option<Vec<Option<IdName>>>,
    #[graphql(name = "maxCP")]
    pub max_cp: Option<i32>,
    #[graphql(name = "maxHP")]
    pub max_hp: Option<i32>,
    pub attacks: Option<Attacks>,
}

impl From<&model::Pokemon> for Pokemon {
    fn from(p: &model::Pokemon) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            classification: p.classification.clone(),
            types: p.types.as_deref().map(nullable_list),
            resistant: p.resistant.as_deref().map(nullable_list),
            weaknesses: nullable_list(&p.weaknesses),
            weight: p.weight.as_ref().map(Into::into),
            height: p.height.as_ref().map(Into::into),
            flee_rate: p.flee_rate,
            evolution_requirements: p.evolution_requirements.as_ref().map(Into::into),
            evolutions: p.evolutions.as_deref().map(nullable_list),
            max_cp: p.max_cp,
            max_hp: p.max_hp,
            attacks: p.attacks.as_ref().map(Into::into),
        }
    }
}
