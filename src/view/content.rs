//! Row building for inline views and overlay pages

use crate::controller::COMMANDS;
use crate::model::{Album, Artist, Item, Playlist, ResultVariant, Song, Station};

use super::utils::format_duration;

/// One displayed line. Selectable rows are counted by the selection index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub title: String,
    pub detail: String,
    pub selectable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub rows: Vec<Row>,
}

impl Section {
    fn new(heading: &str, rows: Vec<Row>) -> Self {
        Self { heading: heading.to_string(), rows }
    }
}

/// Cached rows of the inline node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineView {
    pub node_id: u64,
    pub title: String,
    /// One section per column that has data
    pub columns: Vec<Section>,
}

impl InlineView {
    pub fn build(node_id: u64, variant: &ResultVariant) -> Self {
        Self {
            node_id,
            title: variant.title(),
            columns: sections(variant),
        }
    }
}

fn song_row(label: String, song: &Song, selectable: bool) -> Row {
    Row {
        label,
        title: song.title.clone(),
        detail: format!("{}  {}", song.artist_name, format_duration(song.duration_ms)),
        selectable,
    }
}

fn album_row(label: String, album: &Album, selectable: bool) -> Row {
    Row {
        label,
        title: album.title.clone(),
        detail: format!("{}  {} tracks", album.artist_name, album.track_count),
        selectable,
    }
}

fn artist_row(label: String, artist: &Artist, selectable: bool) -> Row {
    Row {
        label,
        title: artist.name.clone(),
        detail: artist.genre.clone().unwrap_or_default(),
        selectable,
    }
}

fn playlist_row(label: String, playlist: &Playlist, selectable: bool) -> Row {
    Row {
        label,
        title: playlist.name.clone(),
        detail: playlist.curator.clone().unwrap_or_default(),
        selectable,
    }
}

fn station_row(label: String, station: &Station, selectable: bool) -> Row {
    Row { label, title: station.name.clone(), detail: String::new(), selectable }
}

fn item_row(label: String, item: &Item) -> Row {
    Row {
        label,
        title: item.name().to_string(),
        detail: format!("{}  {}", item.kind_label(), item.subtitle().unwrap_or_default()),
        selectable: true,
    }
}

/// Rows for `items`, labelled `<prefix><index>`
fn rows<T>(items: &[T], prefix: &str, selectable: bool, row: fn(String, &T, bool) -> Row) -> Vec<Row> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| row(format!("{}{}", prefix, i), item, selectable))
        .collect()
}

/// Push a section unless its list is missing or empty
fn push_section<T>(
    sections: &mut Vec<Section>,
    heading: &str,
    items: Option<&[T]>,
    prefix: &str,
    selectable: bool,
    row: fn(String, &T, bool) -> Row,
) {
    if let Some(items) = items.filter(|items| !items.is_empty()) {
        sections.push(Section::new(heading, rows(items, prefix, selectable, row)));
    }
}

/// Sections in display order. Selectable rows appear in selection-index order.
pub fn sections(variant: &ResultVariant) -> Vec<Section> {
    let mut sections = Vec::new();
    match variant {
        ResultVariant::Flat(r) => {
            let rows = r
                .items
                .items()
                .iter()
                .enumerate()
                .map(|(i, item)| item_row(i.to_string(), item))
                .collect();
            sections.push(Section::new(r.item_kind.label(), rows));
        }
        ResultVariant::MultiColumn(r) => {
            push_section(&mut sections, "Artists", r.artists.as_deref(), "", true, artist_row);
            push_section(&mut sections, "Albums", r.albums.as_deref(), "", true, album_row);
            push_section(&mut sections, "Songs", r.songs.as_deref(), "", true, song_row);
        }
        ResultVariant::DualList(r) => {
            push_section(&mut sections, "Library playlists", r.library.as_deref(), "", true, playlist_row);
            push_section(&mut sections, "Catalog playlists", r.catalog.as_deref(), "", true, playlist_row);
        }
        ResultVariant::SongDetail(d) => {
            sections.push(Section::new("Song", vec![song_row("0".to_string(), &d.song, true)]));
            push_section(&mut sections, "Artists", d.artists.as_deref(), "w", false, artist_row);
            if let Some(album) = &d.album {
                sections.push(Section::new("Album", vec![album_row("a0".to_string(), album, false)]));
            }
        }
        ResultVariant::AlbumDetail(d) => {
            push_section(&mut sections, "Songs", Some(d.songs.as_slice()), "s", true, song_row);
            push_section(&mut sections, "Artists", d.artists.as_deref(), "w", false, artist_row);
        }
        ResultVariant::ArtistDetail(d) => {
            push_section(&mut sections, "Albums", d.recent_albums.as_deref(), "a", true, album_row);
            push_section(&mut sections, "Top songs", d.top_songs.as_deref(), "t", false, song_row);
        }
        ResultVariant::PlaylistDetail(d) => {
            push_section(&mut sections, "Songs", Some(d.songs.as_slice()), "", true, song_row);
        }
        ResultVariant::RecommendationDetail(d) => {
            push_section(&mut sections, "Albums", d.albums.as_deref(), "a", true, album_row);
            push_section(&mut sections, "Stations", d.stations.as_deref(), "s", true, station_row);
            push_section(&mut sections, "Playlists", d.playlists.as_deref(), "p", true, playlist_row);
        }
        ResultVariant::Help => {
            let rows = COMMANDS
                .iter()
                .map(|(name, short, _)| Row {
                    label: short.to_string(),
                    title: name.to_string(),
                    detail: String::new(),
                    selectable: false,
                })
                .collect();
            sections.push(Section::new("Commands", rows));
        }
    }
    sections
}

/// Position of the `selected`-th selectable row in a flattened listing where
/// every section contributes a heading line followed by its rows
pub fn flattened_position(sections: &[Section], selected: usize) -> Option<usize> {
    let mut line = 0;
    let mut seen = 0;
    for section in sections {
        line += 1;
        for row in &section.rows {
            if row.selectable {
                if seen == selected {
                    return Some(line);
                }
                seen += 1;
            }
            line += 1;
        }
    }
    None
}
