//! Catalog access consumed by the navigation controller
//!
//! Every method returns `None` on failure. Error detail stays with the
//! implementation, which is expected to log it.

use super::content::{Collection, Item, ResultVariant};
use super::types::{CollectionScope, ItemKind};

#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Items of one kind from the library or the catalog, filtered by phrase
    async fn fetch_typed(
        &self,
        kind: ItemKind,
        scope: CollectionScope,
        phrase: Option<&str>,
        limit: u32,
    ) -> Option<Collection>;

    async fn fetch_recently_played(&self, limit: u32) -> Option<Collection>;

    async fn fetch_recommendations(&self, limit: u32) -> Option<Collection>;

    /// Detail view for an item, with its related sub-collections
    async fn describe(&self, item: &Item) -> Option<ResultVariant>;
}
