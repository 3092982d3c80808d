//! Keeps the presentation queue paired with the result history
//!
//! Runs once per frame. Presentation nodes whose history node is gone are
//! popped and destroyed, then one node is materialized for every history
//! level that has none yet.

use ratatui::layout::Rect;

use crate::model::{PresentationNode, PresentationQueue, ResultHistory, ResultNode, ResultVariant};
use crate::view::Presenter;

pub struct StackSynchronizer;

impl StackSynchronizer {
    /// Prepare both stacks for drawing a frame into `bounds`
    pub fn prepare_frame<Pr: Presenter>(
        history: &ResultHistory,
        pages: &mut PresentationQueue<Pr::Page>,
        presenter: &mut Pr,
        bounds: Rect,
    ) {
        presenter.begin_frame();
        if pages.take_inline_refresh() {
            presenter.refresh_inline();
        }
        Self::reconcile(history, pages, presenter);
        Self::materialize(history, pages, presenter);
        if pages.take_inline_refresh() {
            presenter.refresh_inline();
        }

        if let Some(node) = pages.top_inline() {
            presenter.present_inline(node.node_id, &node.kind);
        }
        // Only the top overlay is drawn
        if let Some(page) = pages.top_mut().and_then(|node| node.page.as_mut()) {
            presenter.resize(page, bounds);
            presenter.render(page);
        }
    }

    /// Pop presentation nodes that no longer pair with a history node.
    ///
    /// A node is stale when the queue is longer than the history or when its
    /// recorded node id differs from the history node at the same depth.
    /// Returns the number of nodes popped.
    pub fn reconcile<Pr: Presenter>(
        history: &ResultHistory,
        pages: &mut PresentationQueue<Pr::Page>,
        presenter: &mut Pr,
    ) -> usize {
        let history_ids = history.ids_from_root();
        let page_ids = pages.ids_from_root();
        let keep = history_ids
            .iter()
            .zip(&page_ids)
            .take_while(|(history_id, page_id)| history_id == page_id)
            .count();

        let mut popped = 0;
        while pages.len() > keep {
            if !Self::pop_top(pages, presenter) {
                break;
            }
            popped += 1;
        }
        if popped > 0 {
            tracing::debug!(popped, history = history.len(), pages = pages.len(), "Reconciled presentation queue");
        }
        popped
    }

    /// Push one presentation node per history level that has none
    pub fn materialize<Pr: Presenter>(
        history: &ResultHistory,
        pages: &mut PresentationQueue<Pr::Page>,
        presenter: &mut Pr,
    ) {
        while pages.len() < history.len() {
            let Some(node) = history.get_from_root(pages.len()) else {
                break;
            };
            if presents_inline(node) {
                pages.push_inline(node.result.clone(), node.id());
            } else {
                let page = presenter.create_overlay_page(&node.result);
                pages.push_overlay(page, node.result.clone(), node.id());
            }
        }
    }

    /// Pop and dispose the top node. Returns false when the queue was empty.
    pub fn pop_top<Pr: Presenter>(pages: &mut PresentationQueue<Pr::Page>, presenter: &mut Pr) -> bool {
        match pages.pop() {
            Some(node) => {
                dispose(node, pages, presenter);
                true
            }
            None => false,
        }
    }

    /// Pop every node and schedule an inline refresh
    pub fn destroy_all<Pr: Presenter>(pages: &mut PresentationQueue<Pr::Page>, presenter: &mut Pr) {
        while Self::pop_top(pages, presenter) {}
        pages.request_inline_refresh();
    }
}

/// Whether a history node is drawn inline rather than as an overlay page
pub fn presents_inline(node: &ResultNode) -> bool {
    match &node.result {
        ResultVariant::Flat(_) | ResultVariant::MultiColumn(_) | ResultVariant::DualList(_) => true,
        ResultVariant::PlaylistDetail(_) => node.in_place,
        ResultVariant::SongDetail(_)
        | ResultVariant::AlbumDetail(_)
        | ResultVariant::ArtistDetail(_)
        | ResultVariant::RecommendationDetail(_)
        | ResultVariant::Help => false,
    }
}

fn dispose<Pr: Presenter>(node: PresentationNode<Pr::Page>, pages: &mut PresentationQueue<Pr::Page>, presenter: &mut Pr) {
    match node.page {
        Some(page) => presenter.destroy(page),
        None => pages.request_inline_refresh(),
    }
}
