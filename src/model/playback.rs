//! Playback collaborator and an in-memory queue player

use anyhow::{Result, bail};

use super::content::{Item, Playlist};
use super::types::QueuePosition;

const VOLUME_STEP: u8 = 10;
const MAX_VOLUME: u8 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueEntry {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
}

impl QueueEntry {
    fn from_item(item: &Item) -> Result<Self> {
        match item {
            Item::Artist(_) | Item::Recommendation(_) => {
                bail!("A {} can't be added to the queue", item.kind_label())
            }
            Item::Song(s) => Ok(Self { id: s.id.clone(), title: s.title.clone(), subtitle: Some(s.artist_name.clone()) }),
            Item::Album(a) => Ok(Self { id: a.id.clone(), title: a.title.clone(), subtitle: Some(a.artist_name.clone()) }),
            Item::Playlist(p) => Ok(Self::from_playlist(p)),
            Item::Station(s) => Ok(Self { id: s.id.clone(), title: s.name.clone(), subtitle: None }),
        }
    }

    fn from_playlist(playlist: &Playlist) -> Self {
        Self {
            id: playlist.id.clone(),
            title: playlist.name.clone(),
            subtitle: playlist.curator.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub status: PlaybackStatus,
    pub volume: u8,
}

#[allow(async_fn_in_trait)]
pub trait Playback {
    async fn enqueue(&mut self, items: &[Item], position: QueuePosition) -> Result<()>;
    async fn enqueue_playlist(&mut self, playlist: &Playlist, position: QueuePosition) -> Result<()>;
    async fn play(&mut self) -> Result<()>;
    async fn pause(&mut self) -> Result<()>;
    async fn play_pause_toggle(&mut self) -> Result<()>;
    async fn stop(&mut self) -> Result<()>;
    async fn clear_queue(&mut self) -> Result<()>;
    async fn skip_to_next(&mut self) -> Result<()>;
    async fn skip_to_previous(&mut self) -> Result<()>;
    async fn restart(&mut self) -> Result<()>;
    async fn volume_up(&mut self) -> Result<()>;
    async fn volume_down(&mut self) -> Result<()>;
    /// Remove an entry by its index in the visible queue, where 0 is the current entry
    async fn remove_at(&mut self, visible_index: usize) -> Result<()>;
    /// The visible queue, starting at the current entry
    fn queue_snapshot(&self) -> Vec<QueueEntry>;
    fn state(&self) -> PlayerState;
}

/// Queue-only player: keeps order, position, status and volume without producing audio
#[derive(Debug)]
pub struct QueuePlayer {
    entries: Vec<QueueEntry>,
    current: Option<usize>,
    status: PlaybackStatus,
    volume: u8,
}

impl Default for QueuePlayer {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            current: None,
            status: PlaybackStatus::Stopped,
            volume: 50,
        }
    }
}

impl QueuePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, new_entries: Vec<QueueEntry>, position: QueuePosition) {
        match (position, self.current) {
            (QueuePosition::AfterCurrent, Some(current)) => {
                let at = current + 1;
                self.entries.splice(at..at, new_entries);
            }
            _ => self.entries.extend(new_entries),
        }
    }

    fn require_current(&self) -> Result<usize> {
        match self.current {
            Some(current) => Ok(current),
            None => bail!("Nothing is playing"),
        }
    }
}

impl Playback for QueuePlayer {
    async fn enqueue(&mut self, items: &[Item], position: QueuePosition) -> Result<()> {
        let new_entries = items.iter().map(QueueEntry::from_item).collect::<Result<Vec<_>>>()?;
        tracing::debug!(count = new_entries.len(), ?position, "Adding items to queue");
        self.insert(new_entries, position);
        Ok(())
    }

    async fn enqueue_playlist(&mut self, playlist: &Playlist, position: QueuePosition) -> Result<()> {
        tracing::debug!(playlist = %playlist.name, ?position, "Adding playlist to queue");
        self.insert(vec![QueueEntry::from_playlist(playlist)], position);
        Ok(())
    }

    async fn play(&mut self) -> Result<()> {
        if self.entries.is_empty() {
            bail!("Queue is empty");
        }
        if self.current.is_none() {
            self.current = Some(0);
        }
        self.status = PlaybackStatus::Playing;
        Ok(())
    }

    async fn pause(&mut self) -> Result<()> {
        if self.status == PlaybackStatus::Playing {
            self.status = PlaybackStatus::Paused;
        }
        Ok(())
    }

    async fn play_pause_toggle(&mut self) -> Result<()> {
        match self.status {
            PlaybackStatus::Playing => self.pause().await,
            PlaybackStatus::Paused | PlaybackStatus::Stopped => self.play().await,
        }
    }

    async fn stop(&mut self) -> Result<()> {
        self.status = PlaybackStatus::Stopped;
        Ok(())
    }

    async fn clear_queue(&mut self) -> Result<()> {
        self.entries.clear();
        self.current = None;
        self.status = PlaybackStatus::Stopped;
        Ok(())
    }

    async fn skip_to_next(&mut self) -> Result<()> {
        let current = self.require_current()?;
        if current + 1 >= self.entries.len() {
            bail!("No next entry in the queue");
        }
        self.current = Some(current + 1);
        Ok(())
    }

    async fn skip_to_previous(&mut self) -> Result<()> {
        let current = self.require_current()?;
        self.current = Some(current.saturating_sub(1));
        Ok(())
    }

    async fn restart(&mut self) -> Result<()> {
        self.require_current()?;
        self.status = PlaybackStatus::Playing;
        Ok(())
    }

    async fn volume_up(&mut self) -> Result<()> {
        self.volume = self.volume.saturating_add(VOLUME_STEP).min(MAX_VOLUME);
        Ok(())
    }

    async fn volume_down(&mut self) -> Result<()> {
        self.volume = self.volume.saturating_sub(VOLUME_STEP);
        Ok(())
    }

    async fn remove_at(&mut self, visible_index: usize) -> Result<()> {
        let index = self.current.unwrap_or(0) + visible_index;
        if index >= self.entries.len() {
            bail!("Queue index {} out of range", visible_index);
        }
        self.entries.remove(index);
        if self.entries.is_empty() {
            self.current = None;
            self.status = PlaybackStatus::Stopped;
        } else if self.current.is_some_and(|c| c >= self.entries.len()) {
            self.current = Some(self.entries.len() - 1);
        }
        Ok(())
    }

    fn queue_snapshot(&self) -> Vec<QueueEntry> {
        let start = self.current.unwrap_or(0).min(self.entries.len());
        self.entries[start..].to_vec()
    }

    fn state(&self) -> PlayerState {
        PlayerState {
            status: self.status,
            volume: self.volume,
        }
    }
}
