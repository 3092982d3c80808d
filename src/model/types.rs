//! Core type definitions for the application

use serde::{Deserialize, Serialize};

/// Kind of item a flat search returns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Song,
    Album,
    Artist,
    Playlist,
    Station,
}

impl ItemKind {
    /// Parse a `-t` value, accepting short codes and full names
    pub fn from_flag(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "so" | "song" | "songs" => Some(ItemKind::Song),
            "al" | "album" | "albums" => Some(ItemKind::Album),
            "ar" | "artist" | "artists" => Some(ItemKind::Artist),
            "pl" | "playlist" | "playlists" => Some(ItemKind::Playlist),
            "st" | "station" | "stations" => Some(ItemKind::Station),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Song => "Songs",
            ItemKind::Album => "Albums",
            ItemKind::Artist => "Artists",
            ItemKind::Playlist => "Playlists",
            ItemKind::Station => "Stations",
        }
    }
}

/// Where a search result came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchKind {
    RecentlyPlayed,
    Recommended,
    CatalogSearch,
    LibrarySearch,
}

impl SearchKind {
    /// Collection a phrase search runs against, if this kind takes a phrase
    pub fn scope(self) -> Option<CollectionScope> {
        match self {
            SearchKind::CatalogSearch => Some(CollectionScope::Catalog),
            SearchKind::LibrarySearch => Some(CollectionScope::Library),
            SearchKind::RecentlyPlayed | SearchKind::Recommended => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchKind::RecentlyPlayed => "Recently Played",
            SearchKind::Recommended => "Recommended",
            SearchKind::CatalogSearch => "Catalog",
            SearchKind::LibrarySearch => "Library",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectionScope {
    Library,
    Catalog,
}

/// Identity of a column in a multi-column or dual-list result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Artists,
    Albums,
    Songs,
    LibraryPlaylists,
    CatalogPlaylists,
}

impl ColumnKind {
    pub fn label(self) -> &'static str {
        match self {
            ColumnKind::Artists => "Artists",
            ColumnKind::Albums => "Albums",
            ColumnKind::Songs => "Songs",
            ColumnKind::LibraryPlaylists => "Library Playlists",
            ColumnKind::CatalogPlaylists => "Catalog Playlists",
        }
    }
}

/// Where new entries land in the playback queue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueuePosition {
    Tail,
    AfterCurrent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_kind_accepts_short_and_long_flags() {
        assert_eq!(ItemKind::from_flag("so"), Some(ItemKind::Song));
        assert_eq!(ItemKind::from_flag("Albums"), Some(ItemKind::Album));
        assert_eq!(ItemKind::from_flag("st"), Some(ItemKind::Station));
        assert_eq!(ItemKind::from_flag("podcast"), None);
    }

    #[test]
    fn only_phrase_searches_have_a_scope() {
        assert_eq!(SearchKind::LibrarySearch.scope(), Some(CollectionScope::Library));
        assert_eq!(SearchKind::CatalogSearch.scope(), Some(CollectionScope::Catalog));
        assert_eq!(SearchKind::RecentlyPlayed.scope(), None);
        assert_eq!(SearchKind::Recommended.scope(), None);
    }
}
