use anyhow::Result;
use colored::Colorize;

use crate::resolver::{Operation, Resolution, Resolver};

use super::CommandContext;
use super::utils::{print_pokemon, print_pokemon_list};

pub fn handle_lookup(ctx: &CommandContext, op: Operation, json: bool) -> Result<()> {
    match ctx.store.resolve(&op) {
        Resolution::One(found) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else if let Some(pokemon) = found {
                print_pokemon(pokemon);
            } else if let Operation::FindByName(Some(name)) = &op {
                println!("{} {}", "Not found:".yellow(), name);
            } else {
                println!("{}", "Not found.".yellow());
            }
        }
        Resolution::Many(list) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                print_pokemon_list(&list);
            }
        }
    }
    Ok(())
}
