//! Command execution

use crate::model::{Catalog, Item, ItemArgument, Playback, QueuePosition, SearchKind};
use crate::view::Presenter;

use super::AppController;
use super::commands::{Command, CommandError, CommandLine};
use super::navigation::NavigationError;
use super::search::{SearchRequest, SearchRoute};

type CommandResult = Result<Option<String>, CommandError>;

impl<C: Catalog, P: Playback, Pr: Presenter> AppController<C, P, Pr> {
    /// Parse and run one command line, leaving its message in `last_output`
    pub async fn dispatch(&mut self, line: &str) {
        let result = match CommandLine::parse(line) {
            Ok(Some(command_line)) => self.execute(command_line).await,
            Ok(None) => return,
            Err(e) => Err(e),
        };
        match result {
            Ok(output) => self.last_output = output,
            Err(e) => {
                tracing::debug!(line, error = %e, "Command failed");
                self.last_output = Some(e.to_string());
            }
        }
    }

    pub async fn execute(&mut self, line: CommandLine) -> CommandResult {
        tracing::debug!(command = line.command.name(), arguments = ?line.arguments, "Executing command");
        let args = line.arguments.as_slice();

        match line.command {
            Command::AddToQueue => self.add_to_queue(args).await,
            Command::Play => {
                self.playback.play().await.map_err(Self::playback_error)?;
                Ok(None)
            }
            Command::PlayPauseToggle => {
                self.playback.play_pause_toggle().await.map_err(Self::playback_error)?;
                Ok(None)
            }
            Command::Pause => {
                self.playback.pause().await.map_err(Self::playback_error)?;
                Ok(None)
            }
            Command::Stop => {
                self.playback.stop().await.map_err(Self::playback_error)?;
                Ok(None)
            }
            Command::ClearQueue => {
                self.playback.clear_queue().await.map_err(Self::playback_error)?;
                self.navigator.selection_mut().clamp_queue(0);
                Ok(Some("Queue cleared".to_string()))
            }
            Command::PlayNext => {
                self.playback.skip_to_next().await.map_err(Self::playback_error)?;
                Ok(None)
            }
            Command::PlayPrevious => {
                self.playback.skip_to_previous().await.map_err(Self::playback_error)?;
                Ok(None)
            }
            Command::RestartSong => {
                self.playback.restart().await.map_err(Self::playback_error)?;
                Ok(None)
            }
            Command::QuitApplication => {
                self.set_should_quit();
                Ok(None)
            }
            Command::Search => self.search(args).await,
            Command::Open => {
                let argument: ItemArgument = args
                    .first()
                    .ok_or(CommandError::MissingArgument("open"))?
                    .parse()?;
                self.navigator.open(argument).await?;
                Ok(None)
            }
            Command::Close => {
                self.navigator.close(&mut self.pages, &mut self.presenter).await;
                Ok(None)
            }
            Command::CloseAll => {
                self.navigator.close_all(&mut self.pages, &mut self.presenter).await;
                Ok(None)
            }
            Command::Help => {
                self.navigator.show_help();
                Ok(None)
            }
            Command::SelectDown => {
                if self.navigator.selection().queue_focused {
                    let len = self.playback.queue_snapshot().len();
                    self.navigator.selection_mut().queue_down(len);
                } else {
                    self.navigator.select_next();
                }
                Ok(None)
            }
            Command::SelectUp => {
                if self.navigator.selection().queue_focused {
                    self.navigator.selection_mut().queue_up();
                } else {
                    self.navigator.select_previous();
                }
                Ok(None)
            }
            Command::AddSelectedAndPlay => self.activate_selected().await,
            Command::OpenSelected => {
                let argument = self.navigator.selected_item_argument();
                self.navigator.open(argument).await?;
                Ok(None)
            }
            Command::PlayIndex => {
                let index: i64 = args
                    .first()
                    .and_then(|arg| arg.parse().ok())
                    .ok_or(CommandError::PlayIndexArgument)?;
                let index = usize::try_from(index)
                    .ok()
                    .filter(|index| *index < self.navigator.current_item_count())
                    .ok_or(CommandError::IndexOutOfRange)?;
                self.navigator.selection_mut().selected_index = index;
                self.activate_selected().await
            }
            Command::AddAllAndPlay => self.add_all_and_play().await,
            Command::VolumeUp => {
                self.playback.volume_up().await.map_err(Self::playback_error)?;
                Ok(Some(format!("Volume: {}", self.playback.state().volume)))
            }
            Command::VolumeDown => {
                self.playback.volume_down().await.map_err(Self::playback_error)?;
                Ok(Some(format!("Volume: {}", self.playback.state().volume)))
            }
            Command::SelectLeft => {
                if self.navigator.is_multi_search() {
                    self.navigator.select_left();
                } else {
                    self.navigator.close(&mut self.pages, &mut self.presenter).await;
                }
                Ok(None)
            }
            Command::SelectRight => {
                if self.navigator.is_multi_search() {
                    self.navigator.select_right();
                } else {
                    let argument = self.navigator.selected_item_argument();
                    self.navigator.open(argument).await?;
                }
                Ok(None)
            }
            Command::ToggleQueueFocus => {
                let len = self.playback.queue_snapshot().len();
                let selection = self.navigator.selection_mut();
                selection.queue_focused = !selection.queue_focused;
                selection.clamp_queue(len);
                Ok(None)
            }
            Command::RemoveFromQueue => self.remove_from_queue().await,
        }
    }

    async fn search(&mut self, args: &[String]) -> CommandResult {
        let request = SearchRequest::parse(args)?;
        tracing::info!(?request, "Search");
        let limit = self.settings.search_item_limit;

        let pushed = match request.route() {
            SearchRoute::DualList { phrase } => {
                self.navigator.new_dual_list_search(&phrase, limit).await;
                true
            }
            SearchRoute::MultiColumn { phrase, search_kind } => {
                self.navigator.new_multi_column_search(&phrase, search_kind, limit).await
            }
            SearchRoute::Flat { phrase, item_kind, search_kind } => {
                let limit = match search_kind {
                    SearchKind::RecentlyPlayed => self.settings.recently_played_limit,
                    SearchKind::Recommended => self.settings.recommendation_limit,
                    SearchKind::CatalogSearch | SearchKind::LibrarySearch => limit,
                };
                self.navigator
                    .new_search(phrase.as_deref(), item_kind, search_kind, true, limit)
                    .await
            }
        };
        Ok((!pushed).then(|| "No results".to_string()))
    }

    async fn add_to_queue(&mut self, args: &[String]) -> CommandResult {
        let mut position = QueuePosition::Tail;
        let mut target = None;
        for arg in args {
            if arg == "-n" {
                position = QueuePosition::AfterCurrent;
            } else {
                target = Some(arg.parse::<ItemArgument>()?);
            }
        }
        let argument = target.ok_or(CommandError::MissingArgument("addToQueue"))?;

        let items = match argument {
            ItemArgument::All => self.navigator.navigable_items(),
            ItemArgument::Index { .. } => vec![self.item_for(argument)?],
        };
        match items.as_slice() {
            [] => Ok(Some("Nothing to add".to_string())),
            [item] => {
                self.enqueue(&items, position).await?;
                Ok(Some(format!("Added \"{}\" to queue", item.name())))
            }
            _ => {
                self.enqueue(&items, position).await?;
                Ok(Some(format!("Added {} items to queue", items.len())))
            }
        }
    }

    /// Open the selected item, or queue and play it and return to the root
    async fn activate_selected(&mut self) -> CommandResult {
        let argument = self.navigator.selected_item_argument();
        if self.navigator.selected_item_should_open() {
            let opened = self.navigator.open(argument).await;
            if opened.is_err() {
                self.navigator.reset_selection();
            }
            opened?;
            return Ok(None);
        }

        let item = self.item_for(argument)?;
        self.enqueue(std::slice::from_ref(&item), QueuePosition::Tail).await?;
        self.playback.play().await.map_err(Self::playback_error)?;

        self.navigator.reset_selection();
        self.navigator.unwind_to_root(&mut self.pages, &mut self.presenter);
        Ok(Some(format!("Playing: {}", item.name())))
    }

    async fn add_all_and_play(&mut self) -> CommandResult {
        let items = self.navigator.navigable_items();
        if items.is_empty() {
            return Ok(Some("Nothing to add".to_string()));
        }
        self.enqueue(&items, QueuePosition::Tail).await?;
        self.playback.play().await.map_err(Self::playback_error)?;

        self.navigator.reset_selection();
        self.navigator.unwind_to_root(&mut self.pages, &mut self.presenter);
        Ok(Some(format!("Playing {} items", items.len())))
    }

    async fn remove_from_queue(&mut self) -> CommandResult {
        let selection = *self.navigator.selection();
        if !selection.queue_focused {
            return Ok(None);
        }
        let index = selection.queue_selected_index;
        if index == 0 {
            return Err(CommandError::RemoveCurrent);
        }
        if index >= self.playback.queue_snapshot().len() {
            return Err(CommandError::IndexOutOfRange);
        }

        self.playback.remove_at(index).await.map_err(Self::playback_error)?;
        let len = self.playback.queue_snapshot().len();
        self.navigator.selection_mut().clamp_queue(len);
        Ok(None)
    }

    async fn enqueue(&mut self, items: &[Item], position: QueuePosition) -> Result<(), CommandError> {
        let result = match items {
            [Item::Playlist(playlist)] => self.playback.enqueue_playlist(playlist, position).await,
            _ => self.playback.enqueue(items, position).await,
        };
        result.map_err(Self::playback_error)
    }

    fn item_for(&self, argument: ItemArgument) -> Result<Item, CommandError> {
        self.navigator
            .item_for_argument(argument)
            .ok_or_else(|| NavigationError::NoItem(argument.to_string()).into())
    }

    fn playback_error(error: anyhow::Error) -> CommandError {
        tracing::error!(error = %error, "Playback command failed");
        CommandError::Playback(Self::format_error(&error))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Settings;
    use crate::controller::AppController;
    use crate::model::{
        FlatResult, Playback, PlaybackStatus, QueuePlayer, ResultVariant, SearchKind,
    };
    use crate::testing::{MockCatalog, RecordingPresenter, fixtures};

    type TestApp = AppController<MockCatalog, QueuePlayer, RecordingPresenter>;

    async fn app() -> TestApp {
        let mut app = AppController::new(
            MockCatalog::with_fixtures(),
            QueuePlayer::new(),
            RecordingPresenter::default(),
            Settings::default(),
        );
        assert!(app.navigator.load_recently_played().await);
        app.prepare_frame(fixtures::bounds());
        app
    }

    fn queue_titles(app: &TestApp) -> Vec<String> {
        app.playback().queue_snapshot().into_iter().map(|e| e.title).collect()
    }

    #[tokio::test]
    async fn unknown_commands_are_reported() {
        let mut app = app().await;
        app.dispatch("zz 1").await;
        assert_eq!(app.last_output(), Some("Unknown command \"zz\""));
        app.dispatch("   ").await;
        assert_eq!(app.last_output(), Some("Unknown command \"zz\""));
    }

    #[tokio::test]
    async fn search_pushes_a_multi_column_result() {
        let mut app = app().await;
        app.dispatch("/ cold").await;
        assert!(matches!(app.navigator().top(), Some(ResultVariant::MultiColumn(_))));
        app.prepare_frame(fixtures::bounds());
        assert_eq!(app.pages().len(), 2);
        assert_eq!(app.pages().pages_opened(), 0);
    }

    #[tokio::test]
    async fn search_validation_is_shown_to_the_user() {
        let mut app = app().await;
        app.dispatch("/ -l -t st chill").await;
        assert_eq!(app.last_output(), Some("Can't search user library for stations"));
        assert_eq!(app.navigator().history().len(), 1);
    }

    #[tokio::test]
    async fn activating_an_artist_column_opens_the_artist() {
        let mut app = app().await;
        app.dispatch("/ cold").await;
        app.dispatch("asp").await;

        let node = app.navigator().history().top().unwrap();
        assert!(matches!(node.result, ResultVariant::ArtistDetail(_)));
        assert!(node.in_place);
        app.prepare_frame(fixtures::bounds());
        assert_eq!(app.pages().pages_opened(), 1);
    }

    #[tokio::test]
    async fn activating_a_song_plays_it_and_unwinds_to_the_root() {
        let mut app = app().await;
        app.dispatch("/ cold").await;
        app.dispatch("sr").await;
        app.dispatch("sr").await;
        app.dispatch("asp").await;

        assert_eq!(app.last_output(), Some("Playing: Song 0"));
        assert_eq!(queue_titles(&app), ["Song 0"]);
        assert_eq!(app.playback().state().status, PlaybackStatus::Playing);
        assert_eq!(app.navigator().history().len(), 1);
        assert_eq!(app.navigator().selection().selected_column, 0);

        app.prepare_frame(fixtures::bounds());
        assert_eq!(app.pages().ids_from_root(), app.navigator().history().ids_from_root());
    }

    #[tokio::test]
    async fn recommendation_stations_are_played_not_opened() {
        let mut app = app().await;
        app.dispatch("/ recs").await;
        app.dispatch("asp").await;
        assert!(matches!(app.navigator().top(), Some(ResultVariant::RecommendationDetail(_))));

        app.dispatch("pi 2").await;
        assert_eq!(app.last_output(), Some("Playing: Station 0"));
        assert_eq!(app.navigator().history().len(), 1);
        assert!(matches!(
            app.navigator().top(),
            Some(ResultVariant::Flat(FlatResult { search_kind: SearchKind::RecentlyPlayed, .. }))
        ));
    }

    #[tokio::test]
    async fn play_index_checks_its_argument() {
        let mut app = app().await;
        app.dispatch("pi 99").await;
        assert_eq!(app.last_output(), Some("Index out of range"));
        app.dispatch("pi x").await;
        assert_eq!(app.last_output(), Some("playIndex requires a number argument"));
        app.dispatch("pi -1").await;
        assert_eq!(app.last_output(), Some("Index out of range"));
        assert!(app.playback().queue_snapshot().is_empty());
    }

    #[tokio::test]
    async fn failed_open_still_resets_the_selection() {
        let mut app = app().await;
        app.dispatch("/ -t ar cold").await;
        assert!(matches!(app.navigator().top(), Some(ResultVariant::Flat(_))));
        app.navigator_mut().selection_mut().selected_index = 4;

        app.dispatch("asp").await;
        assert_eq!(app.last_output(), Some("No item at \"4\""));
        assert_eq!(app.navigator().selection().selected_index, 0);
        assert_eq!(app.navigator().history().len(), 2);
    }

    #[tokio::test]
    async fn add_to_queue_honours_after_current() {
        let mut app = app().await;
        app.dispatch("a 1").await;
        assert_eq!(app.last_output(), Some("Added \"Song 0\" to queue"));
        app.dispatch("pl").await;
        app.dispatch("a -n 0").await;
        app.dispatch("a 2").await;
        assert_eq!(queue_titles(&app), ["Song 0", "Album 0", "Road Trip"]);

        app.dispatch("a").await;
        assert_eq!(app.last_output(), Some("addToQueue requires an argument"));
        app.dispatch("a 7").await;
        assert_eq!(app.last_output(), Some("No item at \"7\""));
    }

    #[tokio::test]
    async fn remove_from_queue_protects_the_playing_entry() {
        let mut app = app().await;
        app.dispatch("aap").await;
        assert_eq!(queue_titles(&app).len(), 3);

        // ignored until the queue has focus
        app.dispatch("rfq").await;
        assert_eq!(queue_titles(&app).len(), 3);

        app.dispatch("tqf").await;
        app.dispatch("rfq").await;
        assert_eq!(app.last_output(), Some("Can't remove currently playing song"));

        app.dispatch("sd").await;
        app.dispatch("sd").await;
        app.dispatch("rfq").await;
        assert_eq!(queue_titles(&app), ["Album 0", "Song 0"]);
        assert_eq!(app.navigator().selection().queue_selected_index, 1);
        assert_eq!(app.navigator().selection().selected_index, 0);
    }

    #[tokio::test]
    async fn select_left_outside_multi_views_closes() {
        let mut app = app().await;
        app.dispatch("h").await;
        app.prepare_frame(fixtures::bounds());
        assert_eq!(app.navigator().history().len(), 2);

        app.dispatch("sl").await;
        assert_eq!(app.navigator().history().len(), 1);
        assert_eq!(app.presenter().destroyed.len(), 1);
    }

    #[tokio::test]
    async fn close_all_leaves_a_single_root() {
        let mut app = app().await;
        app.dispatch("/ cold").await;
        app.dispatch("os").await;
        app.prepare_frame(fixtures::bounds());
        app.dispatch("ca").await;
        app.prepare_frame(fixtures::bounds());

        assert_eq!(app.navigator().history().len(), 1);
        assert_eq!(app.pages().len(), 1);
        assert_eq!(app.pages().pages_opened(), 0);
    }

    #[tokio::test]
    async fn playback_failures_become_messages() {
        let mut app = app().await;
        app.dispatch("pl").await;
        assert_eq!(app.last_output(), Some("Nothing to play. Add something to the queue first."));
        app.dispatch("vu").await;
        assert_eq!(app.last_output(), Some("Volume: 60"));
    }

    #[tokio::test]
    async fn quit_sets_the_flag() {
        let mut app = app().await;
        assert!(!app.should_quit());
        app.dispatch("q").await;
        assert!(app.should_quit());
    }
}
