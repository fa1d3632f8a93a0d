use std::sync::Arc;

use async_graphql::{
    Context, EmptyMutation, EmptySubscription, Object, Request, Response, Schema, Variables,
};

use crate::resolver::{Operation, Resolver};

use super::types::*;

pub type PokeqlSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(resolver: Arc<dyn Resolver>) -> PokeqlSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(resolver)
        .finish()
}

/// Execute a GraphQL request against the schema without going through HTTP.
pub async fn execute(
    schema: &PokeqlSchema,
    query: &str,
    variables: Option<serde_json::Value>,
) -> Response {
    let mut request = Request::new(query);
    if let Some(vars) = variables {
        request = request.variables(Variables::from_json(vars));
    }
    schema.execute(request).await
}

fn get_resolver<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<dyn Resolver>> {
    ctx.data::<Arc<dyn Resolver>>()
}

fn collect(resolver: &dyn Resolver, op: Operation) -> Vec<Pokemon> {
    resolver
        .resolve(&op)
        .into_vec()
        .into_iter()
        .map(Into::into)
        .collect()
}

/// `[Pokemon]`: the list and its items are nullable in the published schema.
fn collect_list(resolver: &dyn Resolver, op: Operation) -> Option<Vec<Option<Pokemon>>> {
    Some(collect(resolver, op).into_iter().map(Some).collect())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List every pokemon in dataset order
    #[graphql(name = "Pokemons")]
    async fn pokemons(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Pokemon>>>> {
        let resolver = get_resolver(ctx)?;
        Ok(collect_list(resolver.as_ref(), Operation::ListAll))
    }

    /// Look up a single pokemon by exact name
    #[graphql(name = "Pokemon")]
    async fn pokemon(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
    ) -> async_graphql::Result<Option<Pokemon>> {
        let resolver = get_resolver(ctx)?;
        Ok(collect(resolver.as_ref(), Operation::FindByName(name))
            .into_iter()
            .next())
    }

    /// Pokemons having the given type
    #[graphql(name = "Type")]
    async fn by_type(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "type")] ty: Option<String>,
    ) -> async_graphql::Result<Option<Vec<Option<Pokemon>>>> {
        let resolver = get_resolver(ctx)?;
        Ok(collect_list(resolver.as_ref(), Operation::FilterByType(ty)))
    }

    /// Pokemons resistant to the given type
    #[graphql(name = "Resists")]
    async fn resists(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "type")] ty: Option<String>,
    ) -> async_graphql::Result<Option<Vec<Option<Pokemon>>>> {
        let resolver = get_resolver(ctx)?;
        Ok(collect_list(resolver.as_ref(), Operation::FilterByResistance(ty)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;
    use serde_json::json;

    fn schema() -> PokeqlSchema {
        build_schema(Arc::new(RecordStore::embedded().unwrap()))
    }

    const SPARSE_DATASET: &str = r#"[
        { "name": "Ditto", "weaknesses": ["Fighting"], "classification": null }
    ]"#;

    async fn data(query: &str) -> serde_json::Value {
        let res = execute(&schema(), query, None).await;
        assert!(res.errors.is_empty(), "unexpected errors: {:?}", res.errors);
        res.data.into_json().unwrap()
    }

    fn names(list: &serde_json::Value) -> Vec<String> {
        list.as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_pokemon_by_name() {
        let bulbasaur = data(
            r#"{ Pokemon(name: "Bulbasaur") {
                id name types resistant maxCP maxHP fleeRate
                weight { minimum maximum }
                evolutionRequirements { amount name }
                evolutions { id name }
                attacks { fast { name type damage } }
            } }"#,
        )
        .await;

        let p = &bulbasaur["Pokemon"];
        assert_eq!(p["id"], "001");
        assert_eq!(p["types"], json!(["Grass", "Poison"]));
        assert_eq!(
            p["resistant"],
            json!(["Water", "Electric", "Grass", "Fighting", "Fairy"])
        );
        assert_eq!(p["maxCP"], 951);
        assert_eq!(p["maxHP"], 1071);
        assert_eq!(p["weight"], json!({ "minimum": "6.04kg", "maximum": "7.76kg" }));
        assert_eq!(p["evolutionRequirements"]["amount"], 25);
        assert_eq!(p["evolutions"][0], json!({ "id": 2, "name": "Ivysaur" }));
        assert_eq!(
            p["attacks"]["fast"][0],
            json!({ "name": "Tackle", "type": "Normal", "damage": 12 })
        );
    }

    #[tokio::test]
    async fn test_pokemon_not_found_is_null() {
        let missing = data(r#"{ Pokemon(name: "Missingno") { name } }"#).await;
        assert_eq!(missing, json!({ "Pokemon": null }));
    }

    #[tokio::test]
    async fn test_pokemon_without_name_is_null() {
        let missing = data("{ Pokemon { name } }").await;
        assert_eq!(missing, json!({ "Pokemon": null }));
    }

    #[tokio::test]
    async fn test_final_evolution_has_null_evolutions() {
        let venusaur = data(
            r#"{ Pokemon(name: "Venusaur") { evolutions { id } evolutionRequirements { amount } } }"#,
        )
        .await;
        assert_eq!(
            venusaur["Pokemon"],
            json!({ "evolutions": null, "evolutionRequirements": null })
        );
    }

    #[tokio::test]
    async fn test_type_filter() {
        let grass = data(r#"{ Type(type: "Grass") { name } }"#).await;
        assert_eq!(names(&grass["Type"]), vec!["Bulbasaur", "Ivysaur", "Venusaur"]);

        let fire = data(r#"{ Type(type: "Fire") { name } }"#).await;
        assert!(!names(&fire["Type"]).contains(&"Bulbasaur".to_string()));
    }

    #[tokio::test]
    async fn test_resists_filter() {
        let water = data(r#"{ Resists(type: "Water") { name } }"#).await;
        let resistant = names(&water["Resists"]);
        assert!(resistant.contains(&"Bulbasaur".to_string()));
        assert!(resistant.contains(&"Squirtle".to_string()));
        assert!(!resistant.contains(&"Charmander".to_string()));
    }

    #[tokio::test]
    async fn test_filters_without_argument_are_empty() {
        let empty = data("{ Type { name } Resists { name } }").await;
        assert_eq!(empty, json!({ "Type": [], "Resists": [] }));
    }

    #[tokio::test]
    async fn test_pokemons_lists_everything_in_order() {
        let store = RecordStore::embedded().unwrap();
        let all = data("{ Pokemons { name } }").await;
        let expected: Vec<String> = store.all().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names(&all["Pokemons"]), expected);
    }

    #[tokio::test]
    async fn test_variables() {
        let res = execute(
            &schema(),
            "query ($name: String) { Pokemon(name: $name) { classification } }",
            Some(json!({ "name": "Pikachu" })),
        )
        .await;
        assert!(res.errors.is_empty());
        assert_eq!(
            res.data.into_json().unwrap(),
            json!({ "Pokemon": { "classification": "Mouse Pokémon" } })
        );
    }

    #[tokio::test]
    async fn test_wrong_argument_type_is_validation_error() {
        let res = execute(&schema(), "{ Pokemon(name: 5) { name } }", None).await;
        assert!(!res.errors.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_field_is_validation_error() {
        let res = execute(&schema(), "{ Evolve { name } }", None).await;
        assert!(!res.errors.is_empty());
    }

    #[tokio::test]
    async fn test_missing_fields_resolve_to_null() {
        let store = RecordStore::from_json(SPARSE_DATASET).unwrap();
        let schema = build_schema(Arc::new(store));

        let res = execute(
            &schema,
            r#"{ Pokemon(name: "Ditto") {
                id name classification types weaknesses fleeRate maxCP
                weight { minimum } attacks { fast { name } }
            } }"#,
            None,
        )
        .await;
        assert!(res.errors.is_empty(), "unexpected errors: {:?}", res.errors);
        assert_eq!(
            res.data.into_json().unwrap(),
            json!({ "Pokemon": {
                "id": null,
                "name": "Ditto",
                "classification": null,
                "types": null,
                "weaknesses": ["Fighting"],
                "fleeRate": null,
                "maxCP": null,
                "weight": null,
                "attacks": null
            } })
        );
    }

    #[tokio::test]
    async fn test_record_without_types_never_matches_filters() {
        let store = RecordStore::from_json(SPARSE_DATASET).unwrap();
        let schema = build_schema(Arc::new(store));

        let res = execute(
            &schema,
            r#"{ Type(type: "Normal") { name } Resists(type: "Ghost") { name } Pokemons { name } }"#,
            None,
        )
        .await;
        assert_eq!(
            res.data.into_json().unwrap(),
            json!({ "Type": [], "Resists": [], "Pokemons": [{ "name": "Ditto" }] })
        );
    }

    #[test]
    fn test_sdl_nullability() {
        let sdl = schema().sdl();
        assert!(sdl.contains("name: String!"));
        assert!(sdl.contains("weaknesses: [String]!"));
        assert!(sdl.contains("types: [String]\n"));
        assert!(sdl.contains("Pokemons: [Pokemon]\n"));
        assert!(sdl.contains("Pokemon(name: String): Pokemon\n"));
        assert!(sdl.contains("Type(type: String): [Pokemon]\n"));
        assert!(sdl.contains("Resists(type: String): [Pokemon]\n"));
        assert!(sdl.contains("fast: [SingleAttack]\n"));
        assert!(sdl.contains("maxCP: Int"));
        assert!(sdl.contains("type EvolutionReqs"));
        assert!(sdl.contains("type IdName"));
        assert!(sdl.contains("type SingleAttack"));
    }
}
