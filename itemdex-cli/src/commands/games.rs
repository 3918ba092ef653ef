use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use itemdex_catalog::games;

pub(crate) fn run_games() {
    for game in games::all() {
        println!(
            "{}  [{}]  {}",
            game.name.if_supports_color(Stdout, |t| t.bold()),
            game.slug.if_supports_color(Stdout, |t| t.cyan()),
            game.description,
        );
    }
}
