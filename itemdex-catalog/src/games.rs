//! Static registry of supported games.
//!
//! Item catalogs are partitioned by game, and the leading segment of an item
//! URL picks the partition. The registry validates that segment before any
//! catalog I/O happens.

/// A supported game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    /// URL slug, the leading segment of item URLs
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const GAMES: &[Game] = &[Game {
    id: 1,
    slug: "knight-online",
    name: "Knight Online",
    description: "MMORPG",
}];

/// All games the resolver knows about, in registry order.
pub fn all() -> &'static [Game] {
    GAMES
}

/// Look up a game by its URL slug.
pub fn find(slug: &str) -> Option<&'static Game> {
    GAMES.iter().find(|game| game.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_game() {
        let game = find("knight-online").unwrap();
        assert_eq!(game.id, 1);
        assert_eq!(game.name, "Knight Online");
    }

    #[test]
    fn test_find_unknown_game() {
        assert!(find("unknown-game").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_slugs_are_unique() {
        for (i, a) in all().iter().enumerate() {
            for b in &all()[i + 1..] {
                assert_ne!(a.slug, b.slug);
                assert_ne!(a.id, b.id);
            }
        }
    }
}
