//! Catalog backed by a JSON library snapshot on disk
//!
//! The snapshot is loaded lazily. While it can't be read every fetch returns
//! `None`, and the next fetch tries the disk again.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::catalog::Catalog;
use super::content::{
    Album, AlbumDetail, Artist, ArtistDetail, Collection, Item, Playlist, PlaylistDetail,
    Recommendation, RecommendationDetail, ResultVariant, Song, SongDetail, Station,
};
use super::types::{CollectionScope, ItemKind};

const TOP_SONGS_LIMIT: usize = 10;

/// Items available in one scope
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Shelf {
    pub songs: Vec<Song>,
    pub albums: Vec<Album>,
    pub artists: Vec<Artist>,
    pub playlists: Vec<Playlist>,
    pub stations: Vec<Station>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LibrarySnapshot {
    pub library: Shelf,
    pub catalog: Shelf,
    pub recently_played: Vec<Item>,
    pub recommendations: Vec<Recommendation>,
}

impl LibrarySnapshot {
    fn shelf(&self, scope: CollectionScope) -> &Shelf {
        match scope {
            CollectionScope::Library => &self.library,
            CollectionScope::Catalog => &self.catalog,
        }
    }

    fn all_songs(&self) -> Vec<&Song> {
        dedup_by_id(self.library.songs.iter().chain(&self.catalog.songs), |s| &s.id)
    }

    fn all_albums(&self) -> Vec<&Album> {
        dedup_by_id(self.library.albums.iter().chain(&self.catalog.albums), |a| &a.id)
    }

    fn all_artists(&self) -> Vec<&Artist> {
        dedup_by_id(self.library.artists.iter().chain(&self.catalog.artists), |a| &a.id)
    }

    fn artists_named(&self, name: &str) -> Option<Vec<Artist>> {
        let artists: Vec<Artist> = self
            .all_artists()
            .into_iter()
            .filter(|a| a.name.eq_ignore_ascii_case(name))
            .cloned()
            .collect();
        non_empty(artists)
    }

    fn describe_song(&self, song: &Song) -> SongDetail {
        let album = song.album_title.as_ref().and_then(|title| {
            self.all_albums()
                .into_iter()
                .find(|a| a.title.eq_ignore_ascii_case(title) && a.artist_name.eq_ignore_ascii_case(&song.artist_name))
                .cloned()
        });
        SongDetail {
            song: song.clone(),
            artists: self.artists_named(&song.artist_name),
            album,
        }
    }

    fn describe_album(&self, album: &Album) -> AlbumDetail {
        let songs = self
            .all_songs()
            .into_iter()
            .filter(|s| {
                s.album_title.as_deref().is_some_and(|t| t.eq_ignore_ascii_case(&album.title))
                    && s.artist_name.eq_ignore_ascii_case(&album.artist_name)
            })
            .cloned()
            .collect();
        AlbumDetail {
            album: album.clone(),
            songs,
            artists: self.artists_named(&album.artist_name),
        }
    }

    fn describe_artist(&self, artist: &Artist) -> ArtistDetail {
        let top_songs = self
            .all_songs()
            .into_iter()
            .filter(|s| s.artist_name.eq_ignore_ascii_case(&artist.name))
            .take(TOP_SONGS_LIMIT)
            .cloned()
            .collect();
        let recent_albums = self
            .all_albums()
            .into_iter()
            .filter(|a| a.artist_name.eq_ignore_ascii_case(&artist.name))
            .cloned()
            .collect();
        ArtistDetail {
            artist: artist.clone(),
            top_songs: non_empty(top_songs),
            recent_albums: non_empty(recent_albums),
        }
    }

    fn describe_playlist(&self, playlist: &Playlist) -> PlaylistDetail {
        let songs = self.all_songs();
        let songs = playlist
            .song_ids
            .iter()
            .filter_map(|id| songs.iter().find(|s| &s.id == id).map(|s| (*s).clone()))
            .collect();
        PlaylistDetail {
            playlist: playlist.clone(),
            songs,
        }
    }
}

pub struct LibraryCatalog {
    path: PathBuf,
    snapshot: RwLock<Option<Arc<LibrarySnapshot>>>,
}

impl LibraryCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            snapshot: RwLock::new(None),
        }
    }

    /// A catalog that never touches the disk
    pub fn from_snapshot(snapshot: LibrarySnapshot) -> Self {
        Self {
            path: PathBuf::new(),
            snapshot: RwLock::new(Some(Arc::new(snapshot))),
        }
    }

    pub async fn load_from_disk(&self) -> Result<()> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading {}", self.path.display()))?;
        let snapshot: LibrarySnapshot = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        tracing::info!(
            path = %self.path.display(),
            library_songs = snapshot.library.songs.len(),
            catalog_songs = snapshot.catalog.songs.len(),
            "Library snapshot loaded"
        );
        *self.snapshot.write().await = Some(Arc::new(snapshot));
        Ok(())
    }

    async fn snapshot(&self) -> Option<Arc<LibrarySnapshot>> {
        let cached = self.snapshot.read().await.clone();
        if cached.is_some() {
            return cached;
        }
        match self.load_from_disk().await {
            Ok(()) => self.snapshot.read().await.clone(),
            Err(e) => {
                tracing::warn!(error = %e, "Library snapshot unavailable");
                None
            }
        }
    }
}

impl Catalog for LibraryCatalog {
    async fn fetch_typed(
        &self,
        kind: ItemKind,
        scope: CollectionScope,
        phrase: Option<&str>,
        limit: u32,
    ) -> Option<Collection> {
        tracing::debug!(?kind, ?scope, phrase, limit, "Fetching typed collection");
        let snapshot = self.snapshot().await?;
        let shelf = snapshot.shelf(scope);
        let limit = limit as usize;
        let collection = match kind {
            ItemKind::Song => Collection::Songs(ranked(&shelf.songs, phrase, limit, |s| {
                vec![s.title.as_str(), s.artist_name.as_str()]
            })),
            ItemKind::Album => Collection::Albums(ranked(&shelf.albums, phrase, limit, |a| {
                vec![a.title.as_str(), a.artist_name.as_str()]
            })),
            ItemKind::Artist => Collection::Artists(ranked(&shelf.artists, phrase, limit, |a| {
                vec![a.name.as_str()]
            })),
            ItemKind::Playlist => Collection::Playlists(ranked(&shelf.playlists, phrase, limit, |p| {
                vec![p.name.as_str()]
            })),
            ItemKind::Station => {
                if scope == CollectionScope::Library {
                    tracing::debug!("Stations are not part of the user library");
                    return None;
                }
                Collection::Stations(ranked(&shelf.stations, phrase, limit, |s| vec![s.name.as_str()]))
            }
        };
        Some(collection)
    }

    async fn fetch_recently_played(&self, limit: u32) -> Option<Collection> {
        let snapshot = self.snapshot().await?;
        let items = snapshot.recently_played.iter().take(limit as usize).cloned().collect();
        Some(Collection::Mixed(items))
    }

    async fn fetch_recommendations(&self, limit: u32) -> Option<Collection> {
        let snapshot = self.snapshot().await?;
        let items = snapshot.recommendations.iter().take(limit as usize).cloned().collect();
        Some(Collection::Recommendations(items))
    }

    async fn describe(&self, item: &Item) -> Option<ResultVariant> {
        let snapshot = self.snapshot().await?;
        let detail = match item {
            Item::Song(song) => ResultVariant::SongDetail(snapshot.describe_song(song)),
            Item::Album(album) => ResultVariant::AlbumDetail(snapshot.describe_album(album)),
            Item::Artist(artist) => ResultVariant::ArtistDetail(snapshot.describe_artist(artist)),
            Item::Playlist(playlist) => ResultVariant::PlaylistDetail(snapshot.describe_playlist(playlist)),
            Item::Recommendation(r) => ResultVariant::RecommendationDetail(RecommendationDetail {
                recommendation: r.clone(),
                albums: non_empty(r.albums.clone()),
                stations: non_empty(r.stations.clone()),
                playlists: non_empty(r.playlists.clone()),
            }),
            Item::Station(station) => {
                tracing::debug!(station = %station.name, "Stations have no detail view");
                return None;
            }
        };
        Some(detail)
    }
}

/// Case-insensitive match score of a phrase against an item's fields
fn match_score(phrase: &str, fields: &[&str]) -> u32 {
    fields
        .iter()
        .map(|field| {
            let field = field.to_lowercase();
            if field == phrase {
                100
            } else if field.starts_with(phrase) {
                80
            } else if field.contains(phrase) {
                60
            } else {
                0
            }
        })
        .max()
        .unwrap_or(0)
}

fn ranked<T, F>(items: &[T], phrase: Option<&str>, limit: usize, fields: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Vec<&str>,
{
    let Some(phrase) = phrase else {
        return items.iter().take(limit).cloned().collect();
    };
    let phrase = phrase.to_lowercase();
    let mut scored: Vec<(u32, &T)> = items
        .iter()
        .map(|item| (match_score(&phrase, &fields(item)), item))
        .filter(|(score, _)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, item)| item.clone()).collect()
}

fn dedup_by_id<'a, T, I, F>(items: I, id: F) -> Vec<&'a T>
where
    I: Iterator<Item = &'a T>,
    F: Fn(&T) -> &String,
{
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(id(*item).clone())).collect()
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}
