use super::tree_node::Node;
use super::tree_node::NodeId;
use super::tree_node::NodeKind;
use crate::tree::render_tree::render_plan_to;
use common::Symbol;
use common::SINGLE_SYMBOL_CODEWORD;

/// A binary code tree stored as a node array.
///
/// Once built the tree is never mutated, so it can be shared freely between encoders and
/// decoders.
#[derive(Debug, Clone)]
pub struct Tree<S> {
    pub(crate) nodes: Vec<Node<S>>,
    /// the root is the last node created, a leaf only if the alphabet has a single symbol
    pub(crate) root_node: NodeId,

    /// the nodes with the symbols are at the beginning of the tree, followed by the parents
    pub(crate) num_symbol_nodes: usize,
}

impl<S: Symbol> Tree<S> {
    pub(crate) fn new(nodes: Vec<Node<S>>, root_node: NodeId, num_symbol_nodes: usize) -> Self {
        debug_assert!(num_symbol_nodes > 0);
        // a strict binary tree with n leafs has n - 1 parents
        debug_assert_eq!(nodes.len(), 2 * num_symbol_nodes - 1);
        debug_assert_eq!(root_node as usize, nodes.len() - 1);
        Tree {
            nodes,
            root_node,
            num_symbol_nodes,
        }
    }

    pub fn get_node(&self, node_pos: NodeId) -> &Node<S> {
        &self.nodes[node_pos as usize]
    }
    pub fn root_node(&self) -> NodeId {
        self.root_node
    }
    pub fn get_root_node(&self) -> &Node<S> {
        &self.nodes[self.root_node as usize]
    }
    pub fn nodes(&self) -> &[Node<S>] {
        &self.nodes
    }
    pub fn get_num_symbol_nodes(&self) -> usize {
        self.num_symbol_nodes
    }

    /// returns all nodes in the tree containing a symbol, excluding intermediate parent nodes
    pub fn get_symbol_nodes(&self) -> &[Node<S>] {
        &self.nodes[..self.num_symbol_nodes]
    }

    /// true if the whole tree is a single leaf
    pub fn is_single_symbol(&self) -> bool {
        self.get_root_node().is_leaf()
    }

    /// sum of all symbol counts
    pub fn total_count(&self) -> u64 {
        self.get_root_node().count
    }

    /// length of the longest path from the root to a leaf
    pub fn get_depth(&self) -> usize {
        let mut max_depth = 0;
        self.walk_tree(self.root_node, &mut |_node, depth| {
            max_depth = max_depth.max(depth);
        });
        max_depth
    }

    /// Sum of `count * codeword length` over all symbols, i.e. the number of bits needed to encode
    /// the counted input.
    pub fn weighted_path_length(&self) -> u64 {
        let mut size_in_bits = 0;
        self.walk_tree(self.root_node, &mut |node, depth| {
            if node.is_leaf() {
                let num_bits = depth.max(SINGLE_SYMBOL_CODEWORD.len());
                size_in_bits += node.count * num_bits as u64;
            }
        });
        size_in_bits
    }

    /// returns estimated compressed size in byte
    pub fn estimate_compressed_size(&self) -> usize {
        ((self.weighted_path_length() + 7) / 8) as usize
    }

    /// Visits `start_node_pos` and all nodes below it, left before right. `fun` receives each node
    /// and its distance to `start_node_pos`.
    pub fn walk_tree<F>(&self, start_node_pos: NodeId, fun: &mut F)
    where
        F: FnMut(&Node<S>, usize),
    {
        let mut stack = vec![(start_node_pos, 0_usize)];
        while let Some((node_pos, depth)) = stack.pop() {
            let node = self.get_node(node_pos);
            fun(node, depth);
            if let NodeKind::Internal { left, right } = node.kind {
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
        }
    }
}

impl<S: Symbol> std::fmt::Display for Tree<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render_plan_to(self, f)
    }
}
