use core::cmp::Ordering;

/// position of a node in the node array of a [`Tree`](crate::Tree)
pub type NodeId = u32;

/// A leaf carries a symbol, a parent carries the positions of exactly two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind<S> {
    Leaf { symbol: S },
    Internal { left: NodeId, right: NodeId },
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node<S> {
    /// the number of occurences, for parents the sum of both children
    pub(crate) count: u64,
    pub(crate) kind: NodeKind<S>,
}

impl<S: Copy> Node<S> {
    pub(crate) fn leaf(symbol: S, count: u64) -> Self {
        Node {
            count,
            kind: NodeKind::Leaf { symbol },
        }
    }

    pub(crate) fn internal(left: NodeId, right: NodeId, count: u64) -> Self {
        Node {
            count,
            kind: NodeKind::Internal { left, right },
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn kind(&self) -> &NodeKind<S> {
        &self.kind
    }

    /// the symbol of a leaf, `None` for parents
    pub fn symbol(&self) -> Option<S> {
        match self.kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }

    /// positions of the left and right child, `None` for leafs
    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Internal { left, right } => Some((left, right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            NodeKind::Leaf { symbol } => f.write_fmt(format_args!(
                "Node{{ symbol:{:?} count:{} }}",
                symbol, self.count
            )),
            NodeKind::Internal { left, right } => f.write_fmt(format_args!(
                "Node{{ count:{} left:{} right:{} }}",
                self.count, left, right
            )),
        }
    }
}

/// Entry of the priority queue used while building the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QueueEntry {
    pub(crate) count: u64,
    pub(crate) node: NodeId,
}

impl std::cmp::PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl std::cmp::Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that the we flip the ordering on counts.
        // In case of a tie the node created first wins, node positions are creation order.
        other
            .count
            .cmp(&self.count)
            .then_with(|| other.node.cmp(&self.node))
    }
}
