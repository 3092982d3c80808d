//! Model module - Navigation state and data types
//!
//! This module contains the data structures the navigation core works on.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core enums (item kinds, search kinds, columns, queue positions)
//! - `content`: Catalog items, collections and result variants
//! - `history`: The result history stack
//! - `pages`: The presentation queue paired with the history
//! - `selection`: Cursor state
//! - `argument`: Item arguments (`3`, `s2`, `a`)
//! - `catalog`: Catalog collaborator trait
//! - `library`: Catalog backed by a JSON snapshot on disk
//! - `playback`: Playback collaborator trait and a queue-only player

mod types;
mod content;
mod history;
mod pages;
mod selection;
mod argument;
mod catalog;
mod library;
mod playback;

// Re-export all public types for convenient access
pub use types::{CollectionScope, ColumnKind, ItemKind, QueuePosition, SearchKind};

pub use content::{
    Album, AlbumDetail, Artist, ArtistDetail, Collection, DualListResult, FlatResult, Item,
    MultiColumnResult, Playlist, PlaylistDetail, Recommendation, RecommendationDetail,
    ResultVariant, Song, SongDetail, Station,
};

pub use history::{ResultHistory, ResultNode};
pub use pages::{PresentationNode, PresentationQueue};
pub use selection::SelectionState;
pub use argument::{ItemArgument, ParseArgumentError};
pub use catalog::Catalog;
pub use library::{LibraryCatalog, LibrarySnapshot, Shelf};
pub use playback::{Playback, PlaybackStatus, PlayerState, QueueEntry, QueuePlayer};
