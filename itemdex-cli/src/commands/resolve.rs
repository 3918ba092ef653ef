use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use itemdex_catalog::Resolver;
use itemdex_core::{ResolvedItem, StatValue, full_image_url};

use crate::error::CliError;

pub(crate) async fn run_resolve(
    resolver: &Resolver,
    game: &str,
    item_slug: Option<&str>,
    id: Option<u32>,
) -> Result<(), CliError> {
    // A URL that carries ?id= prefers the direct lookup over fuzzy matching
    let item = match (id, item_slug) {
        (Some(id), _) => resolver.resolve_by_id(id).await?,
        (None, Some(slug)) => resolver.resolve_by_slug(game, slug).await?,
        (None, None) => return Err(CliError::usage("provide an item slug or --id")),
    };

    print_item(&item);
    Ok(())
}

fn print_item(item: &ResolvedItem) {
    println!(
        "{} {}",
        item.name.if_supports_color(Stdout, |t| t.bold()),
        format!("(id {})", item.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    println!(
        "  Class: {}",
        item.class.if_supports_color(Stdout, |t| t.cyan()),
    );
    if let Some(slot) = &item.slot_type {
        println!("  Slot: {slot}");
    }
    if let Some(grade) = item.grade {
        println!("  Grade: +{grade}");
    }

    if !item.stats.is_empty() {
        println!("  Stats:");
        let mut keys: Vec<&String> = item.stats.keys().collect();
        keys.sort();
        for key in keys {
            match &item.stats[key] {
                StatValue::Int(n) => println!("    {key}: {n}"),
                StatValue::Text(text) => println!("    {key}: {text}"),
            }
        }
    }

    if !item.description.is_empty() {
        println!("  {}", item.description);
    }
    if let Some(path) = &item.image_path {
        println!("  Image: {}", full_image_url(path));
    }
}
