//! Shared display regions.

use std::sync::{Arc, Mutex, MutexGuard};

use super::node::Node;

/// A display region of the page, e.g. the title area or the content area.
///
/// `Region` is a cheap cloneable handle; all clones see the same node list.
/// Writers replace or append, nothing in the viewer reads a region back to
/// decide what to render.
#[derive(Debug, Clone, Default)]
pub struct Region {
    nodes: Arc<Mutex<Vec<Node>>>,
}

impl Region {
    /// Create an empty region.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Node>> {
        // A panic while holding the lock leaves a valid Vec behind.
        self.nodes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the whole content of the region.
    pub fn replace(&self, nodes: Vec<Node>) {
        *self.lock() = nodes;
    }

    /// Remove every node.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Append one node.
    pub fn append(&self, node: Node) {
        self.lock().push(node);
    }

    /// Append several nodes in order.
    pub fn extend(&self, nodes: Vec<Node>) {
        self.lock().extend(nodes);
    }

    /// Snapshot of the current nodes.
    pub fn nodes(&self) -> Vec<Node> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Concatenated text content of all nodes.
    pub fn text(&self) -> String {
        self.lock().iter().map(Node::text_content).collect()
    }

    /// Serialize the region's nodes to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in self.lock().iter() {
            node.write_html(&mut out);
        }
        out
    }
}
