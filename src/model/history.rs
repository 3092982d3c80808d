//! Result history: the stack of everything the user has searched for or opened

use super::content::ResultVariant;

/// One entry in the result history. Each node owns its predecessor.
#[derive(Debug)]
pub struct ResultNode {
    previous: Option<Box<ResultNode>>,
    id: u64,
    pub result: ResultVariant,
    pub in_place: bool,
}

impl ResultNode {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn previous(&self) -> Option<&ResultNode> {
        self.previous.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct ResultHistory {
    top: Option<Box<ResultNode>>,
    len: usize,
    next_id: u64,
}

impl ResultHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a result on top and return the id of the new node
    pub fn push(&mut self, result: ResultVariant, in_place: bool) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let node = Box::new(ResultNode {
            previous: self.top.take(),
            id,
            result,
            in_place,
        });
        self.top = Some(node);
        self.len += 1;
        id
    }

    pub fn pop(&mut self) -> Option<ResultVariant> {
        let mut node = self.top.take()?;
        self.top = node.previous.take();
        self.len -= 1;
        let node = *node;
        Some(node.result)
    }

    pub fn top(&self) -> Option<&ResultNode> {
        self.top.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn has_parent(&self) -> bool {
        self.len > 1
    }

    /// Iterate from the top of the stack down to the root
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.top.as_deref() }
    }

    /// Node at `depth`, where the root is depth 0
    pub fn get_from_root(&self, depth: usize) -> Option<&ResultNode> {
        if depth >= self.len {
            return None;
        }
        self.iter().nth(self.len - 1 - depth)
    }

    /// Node ids ordered from the root upwards
    pub fn ids_from_root(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.iter().map(ResultNode::id).collect();
        ids.reverse();
        ids
    }

    /// Pop everything above the root
    pub fn unwind_to_root(&mut self) {
        while self.has_parent() {
            self.pop();
        }
    }

    /// Make the top node the only node
    pub fn detach_below_top(&mut self) {
        if let Some(top) = self.top.as_mut() {
            drop_chain(top.previous.take());
            self.len = 1;
        }
    }

    pub fn clear(&mut self) {
        drop_chain(self.top.take());
        self.len = 0;
    }
}

impl Drop for ResultHistory {
    fn drop(&mut self) {
        drop_chain(self.top.take());
    }
}

// Unlink nodes one at a time so long histories don't recurse on drop
fn drop_chain(mut link: Option<Box<ResultNode>>) {
    while let Some(mut node) = link {
        link = node.previous.take();
    }
}

pub struct Iter<'a> {
    next: Option<&'a ResultNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ResultNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.previous.as_deref();
        Some(node)
    }
}
