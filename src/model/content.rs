//! Content data: catalog items, collections and the result variants a view can show

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::types::{ItemKind, SearchKind};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist_name: String,
    #[serde(default)]
    pub album_title: Option<String>,
    #[serde(default)]
    pub duration_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist_name: String,
    #[serde(default)]
    pub track_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genre: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub curator: Option<String>,
    #[serde(default)]
    pub song_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
}

/// A personal recommendation groups albums, stations and playlists under one title
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

/// Any single catalog item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Song(Song),
    Album(Album),
    Artist(Artist),
    Playlist(Playlist),
    Station(Station),
    Recommendation(Recommendation),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Song(s) => &s.title,
            Item::Album(a) => &a.title,
            Item::Artist(a) => &a.name,
            Item::Playlist(p) => &p.name,
            Item::Station(s) => &s.name,
            Item::Recommendation(r) => &r.title,
        }
    }

    /// Secondary line shown next to the name
    pub fn subtitle(&self) -> Option<&str> {
        match self {
            Item::Song(s) => Some(&s.artist_name),
            Item::Album(a) => Some(&a.artist_name),
            Item::Artist(a) => a.genre.as_deref(),
            Item::Playlist(p) => p.curator.as_deref(),
            Item::Station(_) | Item::Recommendation(_) => None,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            Item::Song(_) => "song",
            Item::Album(_) => "album",
            Item::Artist(_) => "artist",
            Item::Playlist(_) => "playlist",
            Item::Station(_) => "station",
            Item::Recommendation(_) => "recommendation",
        }
    }
}

/// A fetched list of items, typed by what the request asked for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Collection {
    Songs(Vec<Song>),
    Albums(Vec<Album>),
    Artists(Vec<Artist>),
    Playlists(Vec<Playlist>),
    Stations(Vec<Station>),
    Recommendations(Vec<Recommendation>),
    /// Recently played entries can be of any kind
    Mixed(Vec<Item>),
}

impl Collection {
    pub fn len(&self) -> usize {
        match self {
            Collection::Songs(v) => v.len(),
            Collection::Albums(v) => v.len(),
            Collection::Artists(v) => v.len(),
            Collection::Playlists(v) => v.len(),
            Collection::Stations(v) => v.len(),
            Collection::Recommendations(v) => v.len(),
            Collection::Mixed(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Item> {
        match self {
            Collection::Songs(v) => v.get(index).cloned().map(Item::Song),
            Collection::Albums(v) => v.get(index).cloned().map(Item::Album),
            Collection::Artists(v) => v.get(index).cloned().map(Item::Artist),
            Collection::Playlists(v) => v.get(index).cloned().map(Item::Playlist),
            Collection::Stations(v) => v.get(index).cloned().map(Item::Station),
            Collection::Recommendations(v) => v.get(index).cloned().map(Item::Recommendation),
            Collection::Mixed(v) => v.get(index).cloned(),
        }
    }

    pub fn items(&self) -> Vec<Item> {
        (0..self.len()).filter_map(|i| self.get(i)).collect()
    }

    pub fn into_songs(self) -> Option<Vec<Song>> {
        match self {
            Collection::Songs(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_albums(self) -> Option<Vec<Album>> {
        match self {
            Collection::Albums(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_artists(self) -> Option<Vec<Artist>> {
        match self {
            Collection::Artists(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_playlists(self) -> Option<Vec<Playlist>> {
        match self {
            Collection::Playlists(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlatResult {
    pub timestamp: DateTime<Local>,
    pub search_kind: SearchKind,
    pub item_kind: ItemKind,
    pub phrase: Option<String>,
    pub items: Collection,
}

/// Artists, albums and songs for one phrase, shown side by side
#[derive(Clone, Debug, PartialEq)]
pub struct MultiColumnResult {
    pub timestamp: DateTime<Local>,
    pub search_kind: SearchKind,
    pub phrase: String,
    pub artists: Option<Vec<Artist>>,
    pub albums: Option<Vec<Album>>,
    pub songs: Option<Vec<Song>>,
}

/// Library and catalog playlists for one phrase
#[derive(Clone, Debug, PartialEq)]
pub struct DualListResult {
    pub timestamp: DateTime<Local>,
    pub phrase: String,
    pub library: Option<Vec<Playlist>>,
    pub catalog: Option<Vec<Playlist>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SongDetail {
    pub song: Song,
    /// Prefix `w`
    pub artists: Option<Vec<Artist>>,
    /// Prefix `a`
    pub album: Option<Album>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AlbumDetail {
    pub album: Album,
    /// Prefix `s`
    pub songs: Vec<Song>,
    /// Prefix `w`
    pub artists: Option<Vec<Artist>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArtistDetail {
    pub artist: Artist,
    /// Prefix `t`
    pub top_songs: Option<Vec<Song>>,
    /// Prefix `a`
    pub recent_albums: Option<Vec<Album>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaylistDetail {
    pub playlist: Playlist,
    pub songs: Vec<Song>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationDetail {
    pub recommendation: Recommendation,
    /// Prefix `a`
    pub albums: Option<Vec<Album>>,
    /// Prefix `s`
    pub stations: Option<Vec<Station>>,
    /// Prefix `p`
    pub playlists: Option<Vec<Playlist>>,
}

/// Everything a history entry can display
#[derive(Clone, Debug, PartialEq)]
pub enum ResultVariant {
    Flat(FlatResult),
    MultiColumn(MultiColumnResult),
    DualList(DualListResult),
    SongDetail(SongDetail),
    AlbumDetail(AlbumDetail),
    ArtistDetail(ArtistDetail),
    PlaylistDetail(PlaylistDetail),
    RecommendationDetail(RecommendationDetail),
    Help,
}

impl ResultVariant {
    /// List results render inline in the main area; details and help are pages
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            ResultVariant::Flat(_) | ResultVariant::MultiColumn(_) | ResultVariant::DualList(_)
        )
    }

    pub fn title(&self) -> String {
        match self {
            ResultVariant::Flat(r) => match &r.phrase {
                Some(phrase) => format!("{} {}: \"{}\"", r.search_kind.label(), r.item_kind.label(), phrase),
                None => r.search_kind.label().to_string(),
            },
            ResultVariant::MultiColumn(r) => format!("{}: \"{}\"", r.search_kind.label(), r.phrase),
            ResultVariant::DualList(r) => format!("Playlists: \"{}\"", r.phrase),
            ResultVariant::SongDetail(d) => format!("Song: {}", d.song.title),
            ResultVariant::AlbumDetail(d) => format!("Album: {}", d.album.title),
            ResultVariant::ArtistDetail(d) => format!("Artist: {}", d.artist.name),
            ResultVariant::PlaylistDetail(d) => format!("Playlist: {}", d.playlist.name),
            ResultVariant::RecommendationDetail(d) => format!("Recommendation: {}", d.recommendation.title),
            ResultVariant::Help => "Help".to_string(),
        }
    }
}
