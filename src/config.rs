//! Settings loaded from `.config/musik-tui.json`
//!
//! Every field is optional; anything missing falls back to its default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const SETTINGS_FILE: &str = ".config/musik-tui.json";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Items per column for phrase searches
    pub search_item_limit: u32,
    pub recently_played_limit: u32,
    pub recommendation_limit: u32,
    pub library_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_item_limit: 10,
            recently_played_limit: 25,
            recommendation_limit: 10,
            library_path: PathBuf::from(".cache/library.json"),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }
}
