use crate::model::{Attack, Pokemon, Range};
use colored::Colorize;
use std::fmt::Display;

const MISSING: &str = "-";

fn or_missing<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

fn format_tags(tags: Option<&[String]>) -> String {
    match tags {
        Some(tags) if !tags.is_empty() => tags.join(", "),
        _ => MISSING.to_string(),
    }
}

fn format_range(range: Option<&Range>) -> String {
    match range {
        Some(r) => format!(
            "{} - {}",
            or_missing(r.minimum.as_deref()),
            or_missing(r.maximum.as_deref())
        ),
        None => MISSING.to_string(),
    }
}

fn format_attack(attack: &Attack) -> String {
    format!(
        "{} ({}, {})",
        or_missing(attack.name.as_deref()),
        or_missing(attack.attack_type.as_deref()),
        or_missing(attack.damage)
    )
}

fn format_attacks(attacks: Option<&[Attack]>) -> Option<String> {
    let attacks = attacks.filter(|a| !a.is_empty())?;
    let formatted: Vec<String> = attacks.iter().map(format_attack).collect();
    Some(formatted.join(", "))
}

/// Print a single pokemon with details
pub fn print_pokemon(p: &Pokemon) {
    println!(
        "{} {}",
        format!("#{}", or_missing(p.id.as_deref())).cyan().bold(),
        p.name.bold()
    );
    println!("Class:      {}", or_missing(p.classification.as_deref()).dimmed());
    println!("Types:      {}", format_tags(p.types.as_deref()).blue());
    println!("Resistant:  {}", format_tags(p.resistant.as_deref()).green());
    println!("Weaknesses: {}", format_tags(Some(p.weaknesses.as_slice())).red());
    println!("Weight:     {}", format_range(p.weight.as_ref()));
    println!("Height:     {}", format_range(p.height.as_ref()));
    println!("Flee rate:  {}", or_missing(p.flee_rate));
    println!("Max CP/HP:  {} / {}", or_missing(p.max_cp), or_missing(p.max_hp));

    if let Some(ref req) = p.evolution_requirements {
        println!(
            "Evolves:    {} {}",
            or_missing(req.amount),
            or_missing(req.name.as_deref())
        );
    }
    if let Some(ref evos) = p.evolutions {
        let names: Vec<String> = evos
            .iter()
            .map(|e| match e.id {
                Some(id) => format!("{} (#{:03})", or_missing(e.name.as_deref()), id),
                None => or_missing(e.name.as_deref()),
            })
            .collect();
        println!("Evolutions: {}", names.join(" -> ").magenta());
    }

    if let Some(ref attacks) = p.attacks {
        if let Some(fast) = format_attacks(attacks.fast.as_deref()) {
            println!("Fast:       {}", fast);
        }
        if let Some(special) = format_attacks(attacks.special.as_deref()) {
            println!("Special:    {}", special);
        }
    }
}

pub fn print_pokemon_list(list: &[&Pokemon]) {
    if list.is_empty() {
        println!("No pokemons found.");
        return;
    }

    for p in list {
        let types = p
            .types
            .as_deref()
            .filter(|t| !t.is_empty())
            .map_or_else(|| MISSING.to_string(), |t| t.join("/"));
        println!(
            "{} {} [{}]",
            format!("#{}", or_missing(p.id.as_deref())).cyan(),
            p.name,
            types.blue()
        );
    }
}
