//! Presentation queue: the open visual pages paired with the result history
//!
//! A node without a page is inline content drawn in the main area. A node with
//! a page is an overlay that owns its surface until the presenter destroys it.

use chrono::{DateTime, Local};

use super::content::ResultVariant;

pub struct PresentationNode<P> {
    previous: Option<Box<PresentationNode<P>>>,
    pub page: Option<P>,
    pub kind: ResultVariant,
    pub node_id: u64,
    pub timestamp: DateTime<Local>,
}

impl<P> PresentationNode<P> {
    pub fn is_inline(&self) -> bool {
        self.page.is_none()
    }
}

pub struct PresentationQueue<P> {
    top: Option<Box<PresentationNode<P>>>,
    len: usize,
    needs_inline_refresh: bool,
}

impl<P> Default for PresentationQueue<P> {
    fn default() -> Self {
        Self { top: None, len: 0, needs_inline_refresh: false }
    }
}

impl<P> PresentationQueue<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_inline(&mut self, kind: ResultVariant, node_id: u64) {
        self.push(None, kind, node_id);
    }

    pub fn push_overlay(&mut self, page: P, kind: ResultVariant, node_id: u64) {
        self.push(Some(page), kind, node_id);
    }

    fn push(&mut self, page: Option<P>, kind: ResultVariant, node_id: u64) {
        let node = Box::new(PresentationNode {
            previous: self.top.take(),
            page,
            kind,
            node_id,
            timestamp: Local::now(),
        });
        self.top = Some(node);
        self.len += 1;
    }

    /// Remove the top node, handing back its page (if any) for destruction
    pub fn pop(&mut self) -> Option<PresentationNode<P>> {
        let mut node = self.top.take()?;
        self.top = node.previous.take();
        self.len -= 1;
        Some(*node)
    }

    pub fn top(&self) -> Option<&PresentationNode<P>> {
        self.top.as_deref()
    }

    pub fn top_mut(&mut self) -> Option<&mut PresentationNode<P>> {
        self.top.as_deref_mut()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Iterate from the top down
    pub fn iter(&self) -> impl Iterator<Item = &PresentationNode<P>> {
        std::iter::successors(self.top.as_deref(), |node| node.previous.as_deref())
    }

    /// Recorded node ids ordered from the root upwards
    pub fn ids_from_root(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.iter().map(|node| node.node_id).collect();
        ids.reverse();
        ids
    }

    /// Number of overlay pages currently open
    pub fn pages_opened(&self) -> usize {
        self.iter().filter(|node| node.page.is_some()).count()
    }

    /// Nearest inline node from the top
    pub fn top_inline(&self) -> Option<&PresentationNode<P>> {
        self.iter().find(|node| node.is_inline())
    }

    pub fn request_inline_refresh(&mut self) {
        self.needs_inline_refresh = true;
    }

    /// Read and clear the inline refresh request
    pub fn take_inline_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_inline_refresh)
    }
}

impl<P> Drop for PresentationQueue<P> {
    fn drop(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.previous.take();
        }
    }
}
