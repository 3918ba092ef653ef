use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use itemdex_catalog::Resolver;
use itemdex_core::slug;

use crate::error::CliError;

pub(crate) async fn run_list(resolver: &Resolver, game: &str) -> Result<(), CliError> {
    let items = resolver.list_all(game).await?;

    for item in &items {
        println!(
            "{:>4}  {}  [{}]  /{game}/{}",
            item.id,
            item.name.if_supports_color(Stdout, |t| t.bold()),
            item.class.if_supports_color(Stdout, |t| t.cyan()),
            slug::encode(&item.name),
        );
    }
    println!("{} items", items.len());
    Ok(())
}
