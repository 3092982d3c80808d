//! Test doubles and fixtures shared by the unit tests

use std::cell::Cell;
use std::collections::HashMap;

use chrono::Local;
use ratatui::layout::Rect;

use crate::model::{
    AlbumDetail, ArtistDetail, Catalog, Collection, CollectionScope, DualListResult, FlatResult, Item, ItemKind,
    MultiColumnResult, PlaylistDetail, RecommendationDetail, ResultVariant, SearchKind, SongDetail,
};
use crate::view::Presenter;

/// Catalog answering from fixed collections; missing entries fetch as `None`
#[derive(Default)]
pub struct MockCatalog {
    typed: HashMap<(ItemKind, CollectionScope), Collection>,
    recently_played: Option<Collection>,
    recommendations: Option<Collection>,
    recently_played_failures: Cell<usize>,
    recently_played_calls: Cell<usize>,
}

impl MockCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_fixtures() -> Self {
        use crate::testing::fixtures::*;
        let catalog_songs: Vec<_> = (0..5).map(|i| song(&format!("s{i}"), &format!("Song {i}"), "Coldplay")).collect();
        let catalog_albums: Vec<_> = (0..3).map(|i| album(&format!("al{i}"), &format!("Album {i}"), "Coldplay")).collect();

        let mut typed = HashMap::new();
        typed.insert((ItemKind::Song, CollectionScope::Catalog), Collection::Songs(catalog_songs.clone()));
        typed.insert((ItemKind::Album, CollectionScope::Catalog), Collection::Albums(catalog_albums.clone()));
        typed.insert((ItemKind::Artist, CollectionScope::Catalog), Collection::Artists(vec![artist("ar1", "Coldplay")]));
        typed.insert(
            (ItemKind::Playlist, CollectionScope::Catalog),
            Collection::Playlists(vec![playlist("p1", "Road Trip"), playlist("p2", "Rainy Day")]),
        );
        typed.insert((ItemKind::Station, CollectionScope::Catalog), Collection::Stations(vec![station("st1", "Radio 1")]));
        typed.insert((ItemKind::Song, CollectionScope::Library), Collection::Songs(catalog_songs[..2].to_vec()));
        typed.insert((ItemKind::Playlist, CollectionScope::Library), Collection::Playlists(vec![playlist("lp1", "Mine")]));

        Self {
            typed,
            recently_played: Some(Collection::Mixed(vec![
                Item::Album(catalog_albums[0].clone()),
                Item::Song(catalog_songs[0].clone()),
                Item::Playlist(playlist("p1", "Road Trip")),
            ])),
            recommendations: Some(Collection::Recommendations(vec![recommendation(2, 3, 1)])),
            ..Self::default()
        }
    }

    pub fn with_typed(mut self, kind: ItemKind, scope: CollectionScope, collection: Collection) -> Self {
        self.typed.insert((kind, scope), collection);
        self
    }

    pub fn with_catalog_playlists(self, playlists: Vec<crate::model::Playlist>) -> Self {
        self.with_typed(ItemKind::Playlist, CollectionScope::Catalog, Collection::Playlists(playlists))
    }

    /// Fail the next `count` recently played fetches
    pub fn failing_recently_played(self, count: usize) -> Self {
        self.recently_played_failures.set(count);
        self
    }

    pub fn recently_played_calls(&self) -> usize {
        self.recently_played_calls.get()
    }

    fn catalog_collection(&self, kind: ItemKind) -> Option<Collection> {
        self.typed.get(&(kind, CollectionScope::Catalog)).cloned()
    }
}

impl Catalog for MockCatalog {
    async fn fetch_typed(
        &self,
        kind: ItemKind,
        scope: CollectionScope,
        _phrase: Option<&str>,
        _limit: u32,
    ) -> Option<Collection> {
        self.typed.get(&(kind, scope)).cloned()
    }

    async fn fetch_recently_played(&self, _limit: u32) -> Option<Collection> {
        self.recently_played_calls.set(self.recently_played_calls.get() + 1);
        let failures = self.recently_played_failures.get();
        if failures > 0 {
            self.recently_played_failures.set(failures - 1);
            return None;
        }
        self.recently_played.clone()
    }

    async fn fetch_recommendations(&self, _limit: u32) -> Option<Collection> {
        self.recommendations.clone()
    }

    async fn describe(&self, item: &Item) -> Option<ResultVariant> {
        let songs = self.catalog_collection(ItemKind::Song).and_then(Collection::into_songs);
        let albums = self.catalog_collection(ItemKind::Album).and_then(Collection::into_albums);
        let artists = self.catalog_collection(ItemKind::Artist).and_then(Collection::into_artists);
        let detail = match item {
            Item::Song(song) => ResultVariant::SongDetail(SongDetail { song: song.clone(), artists, album: None }),
            Item::Album(album) => ResultVariant::AlbumDetail(AlbumDetail {
                album: album.clone(),
                songs: songs.unwrap_or_default(),
                artists,
            }),
            Item::Artist(artist) => ResultVariant::ArtistDetail(ArtistDetail {
                artist: artist.clone(),
                top_songs: songs,
                recent_albums: albums,
            }),
            Item::Playlist(playlist) => ResultVariant::PlaylistDetail(PlaylistDetail {
                playlist: playlist.clone(),
                songs: songs.unwrap_or_default().into_iter().take(2).collect(),
            }),
            Item::Recommendation(r) => ResultVariant::RecommendationDetail(RecommendationDetail {
                recommendation: r.clone(),
                albums: Some(r.albums.clone()).filter(|v| !v.is_empty()),
                stations: Some(r.stations.clone()).filter(|v| !v.is_empty()),
                playlists: Some(r.playlists.clone()).filter(|v| !v.is_empty()),
            }),
            Item::Station(_) => return None,
        };
        Some(detail)
    }
}

/// Presenter that records every call; pages are numbered from 1 in creation order
#[derive(Default)]
pub struct RecordingPresenter {
    next_page: u64,
    pub created: Vec<u64>,
    pub destroyed: Vec<u64>,
    pub rendered: Vec<u64>,
    pub resized: Vec<u64>,
    pub inline_shown: Vec<u64>,
    pub refreshes: usize,
}

impl Presenter for RecordingPresenter {
    type Page = u64;

    fn create_overlay_page(&mut self, _variant: &ResultVariant) -> u64 {
        self.next_page += 1;
        self.created.push(self.next_page);
        self.next_page
    }

    fn destroy(&mut self, page: u64) {
        self.destroyed.push(page);
    }

    fn render(&mut self, page: &mut u64) {
        self.rendered.push(*page);
    }

    fn resize(&mut self, page: &mut u64, _bounds: Rect) {
        self.resized.push(*page);
    }

    fn refresh_inline(&mut self) {
        self.refreshes += 1;
    }

    fn present_inline(&mut self, node_id: u64, _variant: &ResultVariant) {
        self.inline_shown.push(node_id);
    }
}

pub mod fixtures {
    use super::*;
    use crate::model::{Album, Artist, Playlist, Recommendation, Song, Station};

    pub fn bounds() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    pub fn song(id: &str, title: &str, artist_name: &str) -> Song {
        Song {
            id: id.to_string(),
            title: title.to_string(),
            artist_name: artist_name.to_string(),
            album_title: None,
            duration_ms: 180_000,
        }
    }

    pub fn album(id: &str, title: &str, artist_name: &str) -> Album {
        Album {
            id: id.to_string(),
            title: title.to_string(),
            artist_name: artist_name.to_string(),
            track_count: 10,
        }
    }

    pub fn artist(id: &str, name: &str) -> Artist {
        Artist { id: id.to_string(), name: name.to_string(), genre: None }
    }

    pub fn playlist(id: &str, name: &str) -> Playlist {
        Playlist { id: id.to_string(), name: name.to_string(), curator: None, song_ids: Vec::new() }
    }

    pub fn station(id: &str, name: &str) -> Station {
        Station { id: id.to_string(), name: name.to_string() }
    }

    fn songs(count: usize) -> Vec<Song> {
        (0..count).map(|i| song(&format!("s{i}"), &format!("Song {i}"), "Artist")).collect()
    }

    fn albums(count: usize) -> Vec<Album> {
        (0..count).map(|i| album(&format!("al{i}"), &format!("Album {i}"), "Artist")).collect()
    }

    pub fn recommendation(albums_n: usize, stations_n: usize, playlists_n: usize) -> Recommendation {
        Recommendation {
            id: "rec1".to_string(),
            title: "Made for you".to_string(),
            albums: albums(albums_n),
            stations: (0..stations_n).map(|i| station(&format!("st{i}"), &format!("Station {i}"))).collect(),
            playlists: (0..playlists_n).map(|i| playlist(&format!("p{i}"), &format!("Mix {i}"))).collect(),
        }
    }

    pub fn flat(item_kind: ItemKind, search_kind: SearchKind, items: Vec<Item>) -> ResultVariant {
        ResultVariant::Flat(FlatResult {
            timestamp: Local::now(),
            search_kind,
            item_kind,
            phrase: Some("test".to_string()),
            items: Collection::Mixed(items),
        })
    }

    pub fn flat_songs(count: usize) -> ResultVariant {
        ResultVariant::Flat(FlatResult {
            timestamp: Local::now(),
            search_kind: SearchKind::CatalogSearch,
            item_kind: ItemKind::Song,
            phrase: Some("test".to_string()),
            items: Collection::Songs(songs(count)),
        })
    }

    /// Multi-column result; a zero count leaves that column empty
    pub fn multi_column(artists_n: usize, albums_n: usize, songs_n: usize) -> ResultVariant {
        ResultVariant::MultiColumn(MultiColumnResult {
            timestamp: Local::now(),
            search_kind: SearchKind::CatalogSearch,
            phrase: "test".to_string(),
            artists: Some((0..artists_n).map(|i| artist(&format!("ar{i}"), &format!("Artist {i}"))).collect()),
            albums: Some(albums(albums_n)),
            songs: Some(songs(songs_n)),
        })
    }

    pub fn dual_list(library_n: usize, catalog_n: usize) -> ResultVariant {
        ResultVariant::DualList(DualListResult {
            timestamp: Local::now(),
            phrase: "test".to_string(),
            library: Some((0..library_n).map(|i| playlist(&format!("lp{i}"), &format!("Mine {i}"))).collect()),
            catalog: Some((0..catalog_n).map(|i| playlist(&format!("p{i}"), &format!("Mix {i}"))).collect()),
        })
    }

    pub fn song_detail() -> ResultVariant {
        ResultVariant::SongDetail(SongDetail {
            song: song("s0", "Song 0", "Artist"),
            artists: Some(vec![artist("ar0", "Artist")]),
            album: Some(album("al0", "Album 0", "Artist")),
        })
    }

    pub fn album_detail(songs_n: usize) -> ResultVariant {
        ResultVariant::AlbumDetail(AlbumDetail {
            album: album("al0", "Album 0", "Artist"),
            songs: songs(songs_n),
            artists: None,
        })
    }

    pub fn artist_detail(albums_n: usize) -> ResultVariant {
        ResultVariant::ArtistDetail(ArtistDetail {
            artist: artist("ar0", "Artist"),
            top_songs: Some(songs(3)),
            recent_albums: Some(albums(albums_n)),
        })
    }

    pub fn playlist_detail() -> ResultVariant {
        ResultVariant::PlaylistDetail(PlaylistDetail {
            playlist: playlist("p0", "Mix 0"),
            songs: songs(3),
        })
    }

    pub fn recommendation_detail(albums_n: usize, stations_n: usize, playlists_n: usize) -> ResultVariant {
        let recommendation = recommendation(albums_n, stations_n, playlists_n);
        ResultVariant::RecommendationDetail(RecommendationDetail {
            albums: Some(recommendation.albums.clone()),
            stations: Some(recommendation.stations.clone()),
            playlists: Some(recommendation.playlists.clone()),
            recommendation,
        })
    }
}
