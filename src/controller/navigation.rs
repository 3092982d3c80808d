//! Result navigation: searches, drill-downs and closing back toward the root

use std::time::Duration;

use chrono::Local;
use thiserror::Error;

use crate::model::{
    Catalog, Collection, CollectionScope, DualListResult, FlatResult, Item, ItemArgument, ItemKind,
    MultiColumnResult, PresentationQueue, ResultHistory, ResultVariant, SearchKind, SelectionState,
};
use crate::view::Presenter;

use super::synchronizer::StackSynchronizer;

/// Delays before each attempt to load the root
const ROOT_RETRY_DELAYS_SECS: [u64; 4] = [0, 1, 2, 3];
const DEFAULT_RECENTLY_PLAYED_LIMIT: u32 = 25;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No item at \"{0}\"")]
    NoItem(String),
    #[error("A {0} can't be opened")]
    NotOpenable(&'static str),
    #[error("Failed to open {0}")]
    OpenFailed(String),
}

/// Owns the result history and the selection scoped to its top node
pub struct NavigationController<C> {
    pub(crate) catalog: C,
    pub(crate) history: ResultHistory,
    pub(crate) selection: SelectionState,
    root_retry_delays: Vec<Duration>,
    recently_played_limit: u32,
}

impl<C> NavigationController<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            history: ResultHistory::new(),
            selection: SelectionState::default(),
            root_retry_delays: ROOT_RETRY_DELAYS_SECS.iter().map(|s| Duration::from_secs(*s)).collect(),
            recently_played_limit: DEFAULT_RECENTLY_PLAYED_LIMIT,
        }
    }

    pub fn with_recently_played_limit(mut self, limit: u32) -> Self {
        self.recently_played_limit = limit;
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn history(&self) -> &ResultHistory {
        &self.history
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub fn top(&self) -> Option<&ResultVariant> {
        self.history.top().map(|node| &node.result)
    }

    pub fn show_help(&mut self) {
        let id = self.history.push(ResultVariant::Help, false);
        tracing::debug!(node = id, "Showing help");
    }
}

impl<C: Catalog> NavigationController<C> {
    /// Run one typed fetch and push it as a flat result.
    ///
    /// Returns false when nothing was pushed.
    pub async fn new_search(
        &mut self,
        phrase: Option<&str>,
        item_kind: ItemKind,
        search_kind: SearchKind,
        in_place: bool,
        limit: u32,
    ) -> bool {
        self.selection.reset();
        let collection = match (search_kind, phrase) {
            (SearchKind::RecentlyPlayed, _) => self.catalog.fetch_recently_played(limit).await,
            (SearchKind::Recommended, _) => self.catalog.fetch_recommendations(limit).await,
            (SearchKind::CatalogSearch, Some(phrase)) => {
                self.catalog
                    .fetch_typed(item_kind, CollectionScope::Catalog, Some(phrase), limit)
                    .await
            }
            (SearchKind::LibrarySearch, Some(phrase)) => {
                self.catalog
                    .fetch_typed(item_kind, CollectionScope::Library, Some(phrase), limit)
                    .await
            }
            (SearchKind::CatalogSearch | SearchKind::LibrarySearch, None) => {
                tracing::debug!(?search_kind, "Phrase search without a phrase");
                return false;
            }
        };
        let Some(items) = collection.filter(|items| !items.is_empty()) else {
            tracing::debug!(?search_kind, ?item_kind, "Search result is empty");
            return false;
        };

        let result = FlatResult {
            timestamp: Local::now(),
            search_kind,
            item_kind,
            phrase: phrase.map(str::to_string),
            items,
        };
        let id = self.history.push(ResultVariant::Flat(result), in_place);
        tracing::debug!(node = id, depth = self.history.len(), "Pushed search result");
        true
    }

    /// Artists, albums and songs for one phrase. Pushes even when every column is empty.
    pub async fn new_multi_column_search(&mut self, phrase: &str, search_kind: SearchKind, limit: u32) -> bool {
        self.selection.reset();
        let Some(scope) = search_kind.scope() else {
            tracing::debug!(?search_kind, "Multi-column search needs a catalog or library scope");
            return false;
        };

        let catalog = &self.catalog;
        let (artists, albums, songs) = futures::join!(
            catalog.fetch_typed(ItemKind::Artist, scope, Some(phrase), limit),
            catalog.fetch_typed(ItemKind::Album, scope, Some(phrase), limit),
            catalog.fetch_typed(ItemKind::Song, scope, Some(phrase), limit),
        );

        let result = MultiColumnResult {
            timestamp: Local::now(),
            search_kind,
            phrase: phrase.to_string(),
            artists: artists.and_then(Collection::into_artists),
            albums: albums.and_then(Collection::into_albums),
            songs: songs.and_then(Collection::into_songs),
        };
        let id = self.history.push(ResultVariant::MultiColumn(result), true);
        tracing::debug!(node = id, phrase, "Pushed multi-column result");
        true
    }

    /// Library and catalog playlists for one phrase, pushed regardless of emptiness
    pub async fn new_dual_list_search(&mut self, phrase: &str, limit: u32) {
        self.selection.reset();

        let catalog = &self.catalog;
        let (library, catalog_playlists) = futures::join!(
            catalog.fetch_typed(ItemKind::Playlist, CollectionScope::Library, Some(phrase), limit),
            catalog.fetch_typed(ItemKind::Playlist, CollectionScope::Catalog, Some(phrase), limit),
        );

        let result = DualListResult {
            timestamp: Local::now(),
            phrase: phrase.to_string(),
            library: library.and_then(Collection::into_playlists),
            catalog: catalog_playlists.and_then(Collection::into_playlists),
        };
        let id = self.history.push(ResultVariant::DualList(result), true);
        tracing::debug!(node = id, phrase, "Pushed dual playlist result");
    }

    /// Load Recently Played as the only node of the history.
    ///
    /// Tries immediately and then after each retry delay. Leaves the history
    /// untouched when every attempt fails.
    pub async fn load_recently_played(&mut self) -> bool {
        for attempt in 0..self.root_retry_delays.len() {
            let delay = self.root_retry_delays[attempt];
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let limit = self.recently_played_limit;
            if self
                .new_search(None, ItemKind::Album, SearchKind::RecentlyPlayed, true, limit)
                .await
            {
                self.history.detach_below_top();
                tracing::debug!(attempt = attempt + 1, "Recently played loaded");
                return true;
            }
            tracing::debug!(attempt = attempt + 1, "Recently played attempt failed, retrying");
        }
        tracing::warn!("Recently played unavailable, giving up");
        false
    }

    /// Fetch the detail of the item behind `argument` and push it
    pub async fn open(&mut self, argument: ItemArgument) -> Result<(), NavigationError> {
        let item = self
            .item_for_argument(argument)
            .ok_or_else(|| NavigationError::NoItem(argument.to_string()))?;
        if matches!(item, Item::Station(_)) {
            return Err(NavigationError::NotOpenable(item.kind_label()));
        }

        let in_place = self.top().is_some_and(ResultVariant::is_list);
        let detail = self
            .catalog
            .describe(&item)
            .await
            .ok_or_else(|| NavigationError::OpenFailed(item.name().to_string()))?;

        self.selection.reset();
        let id = self.history.push(detail, in_place);
        tracing::debug!(node = id, item = item.name(), in_place, "Opened detail");
        Ok(())
    }

    /// Pop the top presentation node together with its history node.
    ///
    /// At the root the history is reloaded instead of emptied.
    pub async fn close<Pr: Presenter>(&mut self, pages: &mut PresentationQueue<Pr::Page>, presenter: &mut Pr) {
        StackSynchronizer::pop_top(pages, presenter);
        if self.history.has_parent() {
            self.history.pop();
            self.selection.reset();
        } else {
            pages.request_inline_refresh();
            self.load_recently_played().await;
        }
    }

    /// Destroy every page, empty the history and reload the root
    pub async fn close_all<Pr: Presenter>(&mut self, pages: &mut PresentationQueue<Pr::Page>, presenter: &mut Pr) {
        StackSynchronizer::destroy_all(pages, presenter);
        self.history.clear();
        self.selection.reset();
        self.load_recently_played().await;
    }
}

impl<C> NavigationController<C> {
    /// Destroy every page and pop the history down to its root
    pub fn unwind_to_root<Pr: Presenter>(&mut self, pages: &mut PresentationQueue<Pr::Page>, presenter: &mut Pr) {
        StackSynchronizer::destroy_all(pages, presenter);
        self.history.unwind_to_root();
    }

    #[cfg(test)]
    pub(crate) fn set_root_retry_delays(&mut self, delays: Vec<Duration>) {
        self.root_retry_delays = delays;
    }
}
