//! The once-per-process catalog cache.
//!
//! The catalog is static for the lifetime of the process, so it is fetched
//! at most once and memoized. The warm cache is immutable; resolvers only
//! ever read from it.

use std::collections::HashMap;

use tokio::sync::OnceCell;

use itemdex_core::RawItem;

use crate::error::CatalogError;
use crate::source::CatalogSource;

/// The warm catalog: raw records in source order plus an id lookup map.
#[derive(Debug)]
pub struct CatalogData {
    items: Vec<RawItem>,
    by_id: HashMap<u32, usize>,
}

impl CatalogData {
    fn build(items: Vec<RawItem>) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if by_id.contains_key(&item.id) {
                log::warn!(
                    "Duplicate item id {} in catalog, keeping the first record",
                    item.id
                );
                continue;
            }
            by_id.insert(item.id, i);
        }
        Self { items, by_id }
    }

    /// All raw records in catalog order.
    pub fn items(&self) -> &[RawItem] {
        &self.items
    }

    /// Look up a record by its unique id.
    pub fn get_by_id(&self, id: u32) -> Option<&RawItem> {
        self.by_id.get(&id).map(|&i| &self.items[i])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Lazily initialized, immutable-after-warm catalog index.
///
/// The first [`load_all`](CatalogIndex::load_all) fetches the catalog from
/// the source and memoizes it; concurrent first calls share the in-flight
/// load. A failed load is propagated unretried and leaves the cache cold, so
/// a later call starts a fresh fetch.
#[derive(Debug)]
pub struct CatalogIndex {
    source: CatalogSource,
    warm: OnceCell<CatalogData>,
}

impl CatalogIndex {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            warm: OnceCell::new(),
        }
    }

    /// Load and cache the full raw catalog.
    pub async fn load_all(&self) -> Result<&CatalogData, CatalogError> {
        self.warm
            .get_or_try_init(|| async {
                let items = self.source.fetch().await?;
                log::debug!("Catalog warm: {} items", items.len());
                Ok(CatalogData::build(items))
            })
            .await
    }

    /// Look up a record by id, warming the cache if needed.
    pub async fn get_by_id(&self, id: u32) -> Result<Option<&RawItem>, CatalogError> {
        Ok(self.load_all().await?.get_by_id(id))
    }
}
