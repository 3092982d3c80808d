//! Controller module - Application logic and event handling
//!
//! This module owns the navigation state and routes user input to it.
//! It is organized into submodules by responsibility:
//!
//! - `navigation`: Result history, searches and drill-downs
//! - `selection`: Selection queries and item arguments
//! - `synchronizer`: Pairs the presentation queue with the history
//! - `commands`: Command table and command-line parsing
//! - `search`: Search argument parsing and routing
//! - `dispatcher`: Command execution
//! - `input`: Key event handling

mod navigation;
mod selection;
mod synchronizer;
mod commands;
mod search;
mod dispatcher;
mod input;

pub use commands::{COMMANDS, Command, CommandError, CommandLine};
pub use input::{KeyAction, key_action};
pub use navigation::{NavigationController, NavigationError};
pub use search::{SearchError, SearchRequest, SearchRoute, preprocess_keywords};
pub use synchronizer::{StackSynchronizer, presents_inline};

use ratatui::layout::Rect;

use crate::config::Settings;
use crate::model::{Playback, PresentationQueue};
use crate::view::Presenter;

/// Everything the event loop and the dispatcher work on
pub struct AppController<C, P, Pr: Presenter> {
    pub(crate) navigator: NavigationController<C>,
    pub(crate) pages: PresentationQueue<Pr::Page>,
    pub(crate) presenter: Pr,
    pub(crate) playback: P,
    pub(crate) settings: Settings,
    /// Text typed after `:` while the command line is open
    pub(crate) command_line: Option<String>,
    pub(crate) last_output: Option<String>,
    should_quit: bool,
}

impl<C, P: Playback, Pr: Presenter> AppController<C, P, Pr> {
    pub fn new(catalog: C, playback: P, presenter: Pr, settings: Settings) -> Self {
        let navigator = NavigationController::new(catalog).with_recently_played_limit(settings.recently_played_limit);
        Self {
            navigator,
            pages: PresentationQueue::new(),
            presenter,
            playback,
            settings,
            command_line: None,
            last_output: None,
            should_quit: false,
        }
    }

    pub fn navigator(&self) -> &NavigationController<C> {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut NavigationController<C> {
        &mut self.navigator
    }

    pub fn pages(&self) -> &PresentationQueue<Pr::Page> {
        &self.pages
    }

    pub fn presenter(&self) -> &Pr {
        &self.presenter
    }

    pub fn playback(&self) -> &P {
        &self.playback
    }

    pub fn command_line(&self) -> Option<&str> {
        self.command_line.as_deref()
    }

    pub fn last_output(&self) -> Option<&str> {
        self.last_output.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn set_should_quit(&mut self) {
        self.should_quit = true;
    }

    /// Reconcile the stacks and let the presenter draw its pages
    pub fn prepare_frame(&mut self, bounds: Rect) {
        let queue_len = self.playback.queue_snapshot().len();
        self.navigator.selection_mut().clamp_queue(queue_len);
        StackSynchronizer::prepare_frame(self.navigator.history(), &mut self.pages, &mut self.presenter, bounds);
    }

    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        let error_str = error.to_string();

        // Map common playback failures to something actionable
        if error_str.contains("Queue is empty") {
            "Nothing to play. Add something to the queue first.".to_string()
        } else if error_str.contains("Nothing is playing") {
            "No active playback. Start playing a song first.".to_string()
        } else if error_str.contains("No next entry") {
            "Already at the end of the queue.".to_string()
        } else {
            format!("Error: {}", error_str)
        }
    }
}
