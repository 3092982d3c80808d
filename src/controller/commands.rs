//! Command table: long names, short tokens and command-line parsing

use thiserror::Error;

use crate::model::ParseArgumentError;

use super::navigation::NavigationError;
use super::search::SearchError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    AddToQueue,
    Play,
    PlayPauseToggle,
    Pause,
    Stop,
    ClearQueue,
    PlayNext,
    PlayPrevious,
    RestartSong,
    QuitApplication,
    Search,
    Open,
    Close,
    CloseAll,
    Help,
    SelectDown,
    SelectUp,
    AddSelectedAndPlay,
    OpenSelected,
    PlayIndex,
    AddAllAndPlay,
    VolumeUp,
    VolumeDown,
    SelectLeft,
    SelectRight,
    ToggleQueueFocus,
    RemoveFromQueue,
}

/// (name, short token, command)
pub const COMMANDS: &[(&str, &str, Command)] = &[
    ("addToQueue", "a", Command::AddToQueue),
    ("play", "pl", Command::Play),
    ("playPauseToggle", "pp", Command::PlayPauseToggle),
    ("pause", "pa", Command::Pause),
    ("stop", "s", Command::Stop),
    ("clearQueue", "cq", Command::ClearQueue),
    ("playNext", "pn", Command::PlayNext),
    ("playPrevious", "b", Command::PlayPrevious),
    ("restartSong", "r", Command::RestartSong),
    ("quitApplication", "q", Command::QuitApplication),
    ("search", "/", Command::Search),
    ("open", "o", Command::Open),
    ("close", "c", Command::Close),
    ("closeAll", "ca", Command::CloseAll),
    ("help", "h", Command::Help),
    ("selectDown", "sd", Command::SelectDown),
    ("selectUp", "su", Command::SelectUp),
    ("addSelectedAndPlay", "asp", Command::AddSelectedAndPlay),
    ("openSelected", "os", Command::OpenSelected),
    ("playIndex", "pi", Command::PlayIndex),
    ("addAllAndPlay", "aap", Command::AddAllAndPlay),
    ("volumeUp", "vu", Command::VolumeUp),
    ("volumeDown", "vd", Command::VolumeDown),
    ("selectLeft", "sl", Command::SelectLeft),
    ("selectRight", "sr", Command::SelectRight),
    ("toggleQueueFocus", "tqf", Command::ToggleQueueFocus),
    ("removeFromQueue", "rfq", Command::RemoveFromQueue),
];

impl Command {
    /// Look up a command by long name or short token
    pub fn from_token(token: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|(name, short, _)| *name == token || *short == token)
            .map(|(_, _, command)| *command)
    }

    pub fn name(self) -> &'static str {
        COMMANDS
            .iter()
            .find(|(_, _, command)| *command == self)
            .map(|(name, _, _)| *name)
            .unwrap_or("unknown")
    }
}

/// Failures reported on the command line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command \"{0}\"")]
    Unknown(String),
    #[error("{0} requires an argument")]
    MissingArgument(&'static str),
    #[error("playIndex requires a number argument")]
    PlayIndexArgument,
    #[error("Index out of range")]
    IndexOutOfRange,
    #[error("Can't remove currently playing song")]
    RemoveCurrent,
    #[error(transparent)]
    Argument(#[from] ParseArgumentError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("{0}")]
    Playback(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine {
    pub command: Command,
    pub arguments: Vec<String>,
}

impl CommandLine {
    /// Split a typed line into a command and its arguments. Empty lines give `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut parts = line.split_whitespace();
        let Some(token) = parts.next() else {
            return Ok(None);
        };
        let command = Command::from_token(token).ok_or_else(|| CommandError::Unknown(token.to_string()))?;
        Ok(Some(Self {
            command,
            arguments: parts.map(str::to_string).collect(),
        }))
    }
}
