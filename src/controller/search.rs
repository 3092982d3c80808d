//! Search command arguments: keyword shortcuts, flags, validation and routing

use thiserror::Error;

use crate::model::{ItemKind, SearchKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Can't search user library for stations")]
    LibraryStations,
    #[error("Search phrase is required for catalog and library searches.")]
    MissingPhrase,
    #[error("Unknown search type \"{0}\"")]
    UnknownType(String),
    #[error("Error: wrong arguments")]
    WrongArguments,
}

/// Which controller search a request runs
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchRoute {
    DualList { phrase: String },
    MultiColumn { phrase: String, search_kind: SearchKind },
    Flat { phrase: Option<String>, item_kind: ItemKind, search_kind: SearchKind },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub search_kind: SearchKind,
    /// Set only when `-t` was given
    pub item_kind: Option<ItemKind>,
    pub phrase: Option<String>,
}

impl SearchRequest {
    /// Parse search arguments after keyword preprocessing
    pub fn parse(arguments: &[String]) -> Result<Self, SearchError> {
        let arguments = preprocess_keywords(arguments);
        let mut search_kind = None;
        let mut item_kind = None;
        let mut words = Vec::new();

        let mut iter = arguments.iter();
        while let Some(arg) = iter.next() {
            let kind = match arg.as_str() {
                "-r" | "--recently-played" => Some(SearchKind::RecentlyPlayed),
                "-s" | "--recommended" => Some(SearchKind::Recommended),
                "-c" | "--catalog" => Some(SearchKind::CatalogSearch),
                "-l" | "--library" => Some(SearchKind::LibrarySearch),
                "-t" | "--type" => {
                    let value = iter.next().ok_or(SearchError::WrongArguments)?;
                    let kind = ItemKind::from_flag(value).ok_or_else(|| SearchError::UnknownType(value.clone()))?;
                    item_kind = Some(kind);
                    continue;
                }
                flag if flag.starts_with('-') && flag.len() > 1 => return Err(SearchError::WrongArguments),
                _ => {
                    words.push(arg.as_str());
                    continue;
                }
            };
            // source flags are mutually exclusive
            if search_kind.is_some() {
                return Err(SearchError::WrongArguments);
            }
            search_kind = kind;
        }

        let phrase = if words.is_empty() { None } else { Some(words.join(" ")) };
        let request = Self {
            search_kind: search_kind.unwrap_or(SearchKind::CatalogSearch),
            item_kind,
            phrase,
        };
        request.validate()?;
        Ok(request)
    }

    fn validate(&self) -> Result<(), SearchError> {
        if self.item_kind == Some(ItemKind::Station) && self.search_kind == SearchKind::LibrarySearch {
            return Err(SearchError::LibraryStations);
        }
        if self.search_kind.scope().is_some() && self.phrase.is_none() {
            return Err(SearchError::MissingPhrase);
        }
        Ok(())
    }

    pub fn route(self) -> SearchRoute {
        let is_phrase_search = self.search_kind.scope().is_some();
        match (self.item_kind, self.phrase) {
            (Some(ItemKind::Playlist), Some(phrase)) if self.search_kind == SearchKind::CatalogSearch => {
                SearchRoute::DualList { phrase }
            }
            (None, Some(phrase)) if is_phrase_search => SearchRoute::MultiColumn {
                phrase,
                search_kind: self.search_kind,
            },
            (item_kind, phrase) => SearchRoute::Flat {
                phrase,
                item_kind: item_kind.unwrap_or(ItemKind::Song),
                search_kind: self.search_kind,
            },
        }
    }
}

/// Turn natural-language words into flags.
///
/// `my` selects the library, a single `recent` or `recommended` word picks
/// that source, and a leading type word becomes `-t`. Arguments that already
/// carry flags are left alone.
pub fn preprocess_keywords(arguments: &[String]) -> Vec<String> {
    if arguments.is_empty() || arguments.iter().any(|a| a.starts_with('-')) {
        return arguments.to_vec();
    }

    let mut words: &[String] = arguments;
    let mut result = Vec::new();
    let mut consumed = false;

    if words[0].eq_ignore_ascii_case("my") {
        result.push("-l".to_string());
        words = &words[1..];
        consumed = true;
    }

    if let [word] = words {
        match word.to_lowercase().as_str() {
            "recent" | "recently" | "recents" => return vec!["-r".to_string()],
            "recommended" | "recommendations" | "recs" | "foryou" => return vec!["-s".to_string()],
            _ => {}
        }
    }

    if let Some(first) = words.first() {
        let short = match first.to_lowercase().as_str() {
            "song" | "songs" => Some("so"),
            "album" | "albums" => Some("al"),
            "artist" | "artists" => Some("ar"),
            "playlist" | "playlists" => Some("pl"),
            "station" | "stations" => Some("st"),
            _ => None,
        };
        if let Some(short) = short {
            result.push("-t".to_string());
            result.push(short.to_string());
            words = &words[1..];
            consumed = true;
        }
    }

    if !consumed {
        return arguments.to_vec();
    }
    result.extend(words.iter().cloned());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn keywords_become_flags() {
        assert_eq!(preprocess_keywords(&args("my playlists 2026")), args("-l -t pl 2026"));
        assert_eq!(preprocess_keywords(&args("my songs bowie")), args("-l -t so bowie"));
        assert_eq!(preprocess_keywords(&args("album biffy clyro")), args("-t al biffy clyro"));
        assert_eq!(preprocess_keywords(&args("biffy clyro")), args("biffy clyro"));
        assert_eq!(preprocess_keywords(&args("recent")), args("-r"));
        assert_eq!(preprocess_keywords(&args("Recs")), args("-s"));
        assert_eq!(preprocess_keywords(&args("-t so my")), args("-t so my"));
    }

    #[test]
    fn untyped_phrase_searches_go_multi_column() {
        let route = SearchRequest::parse(&args("biffy clyro")).unwrap().route();
        assert_eq!(route, SearchRoute::MultiColumn {
            phrase: "biffy clyro".into(),
            search_kind: SearchKind::CatalogSearch,
        });

        let route = SearchRequest::parse(&args("my bowie")).unwrap().route();
        assert_eq!(route, SearchRoute::MultiColumn {
            phrase: "bowie".into(),
            search_kind: SearchKind::LibrarySearch,
        });
    }

    #[test]
    fn catalog_playlist_searches_go_dual_list() {
        let route = SearchRequest::parse(&args("playlist rock")).unwrap().route();
        assert_eq!(route, SearchRoute::DualList { phrase: "rock".into() });

        // library playlists stay flat
        let route = SearchRequest::parse(&args("my playlists rock")).unwrap().route();
        assert_eq!(route, SearchRoute::Flat {
            phrase: Some("rock".into()),
            item_kind: ItemKind::Playlist,
            search_kind: SearchKind::LibrarySearch,
        });
    }

    #[test]
    fn source_only_searches_go_flat() {
        let route = SearchRequest::parse(&args("recommended")).unwrap().route();
        assert_eq!(route, SearchRoute::Flat {
            phrase: None,
            item_kind: ItemKind::Song,
            search_kind: SearchKind::Recommended,
        });
    }

    #[test]
    fn validation_messages() {
        assert_eq!(SearchRequest::parse(&args("-l -t st chill")), Err(SearchError::LibraryStations));
        assert_eq!(SearchRequest::parse(&args("-c")), Err(SearchError::MissingPhrase));
        assert_eq!(SearchRequest::parse(&[]), Err(SearchError::MissingPhrase));
        assert_eq!(SearchRequest::parse(&args("-t podcast x")), Err(SearchError::UnknownType("podcast".into())));
        assert_eq!(SearchRequest::parse(&args("-r -s")), Err(SearchError::WrongArguments));
        assert_eq!(
            SearchError::MissingPhrase.to_string(),
            "Search phrase is required for catalog and library searches."
        );
    }
}
