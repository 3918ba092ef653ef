//! Catalog loading, indexing, and item resolution.
//!
//! This crate owns everything between the raw catalog source and a resolved
//! item: asynchronous acquisition of the item JSON, the once-per-process
//! catalog cache, the multi-phase fuzzy name matcher, and the resolver entry
//! points used by frontends.

pub mod error;
pub mod games;
pub mod index;
pub mod matcher;
pub mod resolver;
pub mod source;

pub use error::{CatalogError, ResolveError};
pub use games::Game;
pub use index::{CatalogData, CatalogIndex};
pub use matcher::{MatchPhase, NameMatch, best_match};
pub use resolver::Resolver;
pub use source::CatalogSource;
