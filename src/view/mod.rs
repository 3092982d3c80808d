//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Main layout structure (inline content, queue, command bar)
//! - `content`: Rows built from result variants
//! - `overlays`: Overlay pages drawn as popups

mod utils;
mod layout;
mod content;
mod overlays;

pub use content::{InlineView, Row, Section};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::controller::AppController;
use crate::model::{Playback, ResultVariant};

/// Creates and draws the pages paired with history nodes
pub trait Presenter {
    type Page;

    /// Called once before each frame is prepared
    fn begin_frame(&mut self) {}
    fn create_overlay_page(&mut self, variant: &ResultVariant) -> Self::Page;
    fn destroy(&mut self, page: Self::Page);
    fn render(&mut self, page: &mut Self::Page);
    fn resize(&mut self, page: &mut Self::Page, bounds: Rect);
    /// Discard cached inline rows
    fn refresh_inline(&mut self);
    /// Show the given node in the shared main area
    fn present_inline(&mut self, node_id: u64, variant: &ResultVariant);
}

/// A popup page for one detail or help node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayPage {
    pub id: u64,
    pub title: String,
    pub sections: Vec<Section>,
    pub area: Rect,
}

/// Presenter that draws into the terminal through [`AppView`]
#[derive(Default)]
pub struct TerminalPresenter {
    next_page: u64,
    inline: Option<InlineView>,
    visible: Option<OverlayPage>,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inline(&self) -> Option<&InlineView> {
        self.inline.as_ref()
    }

    /// The overlay rendered for the current frame
    pub fn visible_overlay(&self) -> Option<&OverlayPage> {
        self.visible.as_ref()
    }
}

impl Presenter for TerminalPresenter {
    type Page = OverlayPage;

    fn begin_frame(&mut self) {
        self.visible = None;
    }

    fn create_overlay_page(&mut self, variant: &ResultVariant) -> OverlayPage {
        self.next_page += 1;
        tracing::debug!(page = self.next_page, title = %variant.title(), "Created overlay page");
        OverlayPage {
            id: self.next_page,
            title: variant.title(),
            sections: content::sections(variant),
            area: Rect::default(),
        }
    }

    fn destroy(&mut self, page: OverlayPage) {
        tracing::debug!(page = page.id, "Destroyed overlay page");
        if self.visible.as_ref().is_some_and(|v| v.id == page.id) {
            self.visible = None;
        }
    }

    fn render(&mut self, page: &mut OverlayPage) {
        self.visible = Some(page.clone());
    }

    fn resize(&mut self, page: &mut OverlayPage, bounds: Rect) {
        page.area = overlays::popup_area(bounds);
    }

    fn refresh_inline(&mut self) {
        self.inline = None;
    }

    fn present_inline(&mut self, node_id: u64, variant: &ResultVariant) {
        if self.inline.as_ref().is_some_and(|view| view.node_id == node_id) {
            return;
        }
        tracing::debug!(node = node_id, "Rebuilding inline rows");
        self.inline = Some(InlineView::build(node_id, variant));
    }
}

pub struct AppView;

impl AppView {
    pub fn render<C, P: Playback>(frame: &mut Frame, app: &AppController<C, P, TerminalPresenter>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Main content (inline + queue)
                Constraint::Length(3), // Command bar
            ])
            .split(frame.area());

        let queue = app.playback().queue_snapshot();
        let selection = *app.navigator().selection();
        let presenter = app.presenter();

        let content_area = if queue.is_empty() {
            chunks[0]
        } else {
            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(70), // Inline content
                    Constraint::Percentage(30), // Queue
                ])
                .split(chunks[0]);
            let queue_selected = selection.queue_focused.then_some(selection.queue_selected_index);
            layout::render_queue(frame, main_chunks[1], &queue, queue_selected);
            main_chunks[0]
        };

        // Selection belongs to the top node; highlight inline rows only when they are the top
        let top_id = app.navigator().history().top().map(|node| node.id());
        let inline = presenter.inline();
        let inline_selection = inline
            .filter(|view| Some(view.node_id) == top_id && !selection.queue_focused)
            .map(|_| (selection.selected_column, selection.selected_index));
        layout::render_inline(frame, content_area, inline, inline_selection);

        layout::render_command_bar(
            frame,
            chunks[1],
            app.command_line(),
            app.last_output(),
            app.playback().state(),
            app.pages().pages_opened(),
        );

        if let Some(page) = presenter.visible_overlay() {
            let selected = (!selection.queue_focused).then_some(selection.selected_index);
            overlays::render_overlay_page(frame, page, selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::model::QueuePlayer;
    use crate::testing::{MockCatalog, fixtures};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn inline_rows_are_cached_per_node() {
        let mut presenter = TerminalPresenter::new();
        presenter.present_inline(1, &fixtures::flat_songs(2));
        presenter.present_inline(1, &fixtures::flat_songs(5));
        assert_eq!(presenter.inline().unwrap().columns[0].rows.len(), 2);

        presenter.refresh_inline();
        presenter.present_inline(1, &fixtures::flat_songs(5));
        assert_eq!(presenter.inline().unwrap().columns[0].rows.len(), 5);

        presenter.present_inline(2, &fixtures::flat_songs(3));
        assert_eq!(presenter.inline().unwrap().node_id, 2);
    }

    #[test]
    fn visible_overlay_lasts_one_frame() {
        let mut presenter = TerminalPresenter::new();
        let mut page = presenter.create_overlay_page(&ResultVariant::Help);
        presenter.resize(&mut page, fixtures::bounds());
        presenter.render(&mut page);
        assert_eq!(presenter.visible_overlay().map(|p| p.id), Some(1));
        assert!(!page.area.is_empty());

        presenter.begin_frame();
        assert!(presenter.visible_overlay().is_none());
    }

    #[tokio::test]
    async fn renders_root_and_help_overlay() {
        let mut app = AppController::new(
            MockCatalog::with_fixtures(),
            QueuePlayer::new(),
            TerminalPresenter::new(),
            Settings::default(),
        );
        app.navigator_mut().load_recently_played().await;
        app.dispatch("h").await;

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let bounds = Rect::new(0, 0, 100, 40);
        app.prepare_frame(bounds);
        terminal.draw(|f| AppView::render(f, &app)).unwrap();

        assert_eq!(app.pages().len(), 2);
        assert_eq!(app.presenter().visible_overlay().map(|p| p.title.as_str()), Some("Help"));
        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Help (Esc to close)"));
        assert!(text.contains("addSelectedAndPlay"));
        assert!(text.contains("Command [1 open]"));
    }
}
