//! Resolution entry points.
//!
//! The resolver is the public face of the crate: it takes either a numeric
//! catalog id or a `{game}/{slug}` pair and returns exactly one normalized
//! item or a not-found outcome. Id lookups go straight to the index; slug
//! lookups decode the slug and delegate to the fuzzy matcher.

use itemdex_core::slug;
use itemdex_core::ResolvedItem;

use crate::error::ResolveError;
use crate::games;
use crate::index::CatalogIndex;
use crate::matcher;

/// Resolves item references against the catalog.
///
/// Holds the catalog index (and with it the process-wide cache); operations
/// are independently callable concurrently once the cache is warm.
#[derive(Debug)]
pub struct Resolver {
    index: CatalogIndex,
}

impl Resolver {
    pub fn new(index: CatalogIndex) -> Self {
        Self { index }
    }

    /// Resolve an item by its unique catalog id.
    pub async fn resolve_by_id(&self, id: u32) -> Result<ResolvedItem, ResolveError> {
        let item = self
            .index
            .get_by_id(id)
            .await?
            .ok_or_else(|| ResolveError::not_found(format!("id {id}")))?;
        Ok(ResolvedItem::from_raw(item))
    }

    /// Resolve an item from a `/{game}/{item-slug}` style reference.
    ///
    /// The slug decode is lossy, so resolution goes through the fuzzy
    /// matcher rather than an exact key lookup.
    pub async fn resolve_by_slug(
        &self,
        game: &str,
        item_slug: &str,
    ) -> Result<ResolvedItem, ResolveError> {
        if games::find(game).is_none() {
            return Err(ResolveError::UnknownGame(game.to_string()));
        }

        let search_name = slug::decode(item_slug);
        let data = self.index.load_all().await?;

        let Some(found) = matcher::best_match(&search_name, data.items()) else {
            return Err(ResolveError::not_found(search_name));
        };
        log::debug!(
            "Resolved '{}' to item {} ('{}') via {:?} phase, score {}",
            item_slug,
            found.item.id,
            found.item.name,
            found.phase,
            found.score,
        );
        Ok(ResolvedItem::from_raw(found.item))
    }

    /// All catalog items for a game, normalized, in catalog order.
    pub async fn list_all(&self, game: &str) -> Result<Vec<ResolvedItem>, ResolveError> {
        if games::find(game).is_none() {
            return Err(ResolveError::UnknownGame(game.to_string()));
        }
        let data = self.index.load_all().await?;
        Ok(data.items().iter().map(ResolvedItem::from_raw).collect())
    }
}
