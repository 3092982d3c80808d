//! Item arguments: `3`, `s2`, `a` and friends, as typed after `open` or `addToQueue`

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemArgument {
    /// Every navigable item of the current view
    All,
    /// An index, optionally scoped to a sub-list of a detail page
    Index { prefix: Option<char>, index: usize },
}

impl ItemArgument {
    pub fn plain(index: usize) -> Self {
        ItemArgument::Index { prefix: None, index }
    }

    pub fn prefixed(prefix: char, index: usize) -> Self {
        ItemArgument::Index { prefix: Some(prefix), index }
    }
}

impl fmt::Display for ItemArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemArgument::All => write!(f, "a"),
            ItemArgument::Index { prefix: Some(p), index } => write!(f, "{}{}", p, index),
            ItemArgument::Index { prefix: None, index } => write!(f, "{}", index),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Invalid item argument \"{0}\"")]
pub struct ParseArgumentError(pub String);

impl FromStr for ItemArgument {
    type Err = ParseArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "a" || s.eq_ignore_ascii_case("all") {
            return Ok(ItemArgument::All);
        }
        let mut chars = s.chars();
        let first = chars.next().ok_or_else(|| ParseArgumentError(s.to_string()))?;
        let (prefix, digits) = if first.is_ascii_alphabetic() {
            (Some(first.to_ascii_lowercase()), chars.as_str())
        } else {
            (None, s)
        };
        let index = digits
            .parse::<usize>()
            .map_err(|_| ParseArgumentError(s.to_string()))?;
        Ok(ItemArgument::Index { prefix, index })
    }
}
