use crate::tree::tree_node::Node;
use crate::tree::tree_node::NodeId;
use crate::tree::tree_node::QueueEntry;
use crate::tree::Tree;
use common::FrequencyMap;
use common::Symbol;
use log::*;
use std::collections::BinaryHeap;

/// Creates a code tree by repeatedly merging the two nodes with the lowest count.
///
/// Every symbol of `counts` gets a leaf, including symbols with a count of zero. Returns `None`
/// for an empty map. A map with a single symbol yields a tree which is only a leaf.
///
/// Leafs enter the queue in ascending symbol order and the queue breaks ties by node position,
/// so the same map always produces the same tree.
pub fn build_tree<S: Symbol>(counts: &FrequencyMap<S>) -> Option<Tree<S>> {
    let symbols = sorted_symbols(counts, |(symbol, _count)| *symbol);
    if symbols.is_empty() {
        debug!("no symbols, no tree");
        return None;
    }
    let num_symbol_nodes = symbols.len();

    let mut nodes = Vec::with_capacity(2 * num_symbol_nodes - 1);
    let mut heap = BinaryHeap::with_capacity(num_symbol_nodes);
    for (symbol, count) in symbols {
        heap.push(QueueEntry {
            count,
            node: nodes.len() as NodeId,
        });
        nodes.push(Node::leaf(symbol, count));
    }

    let root_node = loop {
        match (heap.pop(), heap.pop()) {
            (Some(left), Some(right)) => {
                let count = left.count + right.count;
                trace!("merge {} + {} -> {}", left.node, right.node, nodes.len());
                // add internal Node with aggregated count
                heap.push(QueueEntry {
                    count,
                    node: nodes.len() as NodeId,
                });
                nodes.push(Node::internal(left.node, right.node, count));
            }
            // last node, which will be the root node
            (Some(root), None) => break root.node,
            (None, _) => return None,
        }
    };

    debug!(
        "built tree with {} symbols, root count {}",
        num_symbol_nodes, nodes[root_node as usize].count
    );
    Some(Tree::new(nodes, root_node, num_symbol_nodes))
}

/// Creates a code tree without a priority queue.
///
/// The leafs are sorted by count once. Since every new parent has a count at least as high as
/// the previous one, the parents form a second sorted queue behind the leafs and the two lowest
/// nodes are always at the front of one of the two queues. On equal counts the leaf is taken
/// first.
///
/// The resulting code has the same total length as the one from [`build_tree`], the shape may
/// differ when counts tie.
pub fn build_tree_fast<S: Symbol>(counts: &FrequencyMap<S>) -> Option<Tree<S>> {
    // sort all nodes with a symbol ASC by count
    let symbols = sorted_symbols(counts, |(symbol, count)| (*count, *symbol));
    if symbols.is_empty() {
        return None;
    }
    let num_symbol_nodes = symbols.len();

    let mut nodes = Vec::with_capacity(2 * num_symbol_nodes - 1);
    nodes.extend(
        symbols
            .into_iter()
            .map(|(symbol, count)| Node::leaf(symbol, count)),
    );

    // parents are appended behind the leafs
    let mut leaf_pos: usize = 0;
    let mut parent_pos: usize = num_symbol_nodes;

    // walking upwards until only the root is left unconnected
    while (num_symbol_nodes - leaf_pos) + (nodes.len() - parent_pos) > 1 {
        let node1_pos = take_lowest(&nodes, num_symbol_nodes, &mut leaf_pos, &mut parent_pos);
        let node2_pos = take_lowest(&nodes, num_symbol_nodes, &mut leaf_pos, &mut parent_pos);
        let count = nodes[node1_pos].count + nodes[node2_pos].count;
        debug_assert!(nodes.last().map_or(true, |last| last.is_leaf() || last.count <= count));
        nodes.push(Node::internal(
            node1_pos as NodeId,
            node2_pos as NodeId,
            count,
        ));
    }

    let root_node = (nodes.len() - 1) as NodeId;
    debug!(
        "built tree with {} symbols, root count {}",
        num_symbol_nodes, nodes[root_node as usize].count
    );
    Some(Tree::new(nodes, root_node, num_symbol_nodes))
}

fn sorted_symbols<S: Symbol, K: Ord, F>(counts: &FrequencyMap<S>, key: F) -> Vec<(S, u64)>
where
    F: FnMut(&(S, u64)) -> K,
{
    let mut symbols: Vec<(S, u64)> = counts
        .iter()
        .map(|(symbol, count)| (*symbol, *count))
        .collect();
    // keys are unique, so unstable sorting is still deterministic
    symbols.sort_unstable_by_key(key);
    symbols
}

/// returns the position of the lower front node of the leaf queue and the parent queue
#[inline]
fn take_lowest<S>(
    nodes: &[Node<S>],
    num_symbol_nodes: usize,
    leaf_pos: &mut usize,
    parent_pos: &mut usize,
) -> usize {
    let has_leaf = *leaf_pos < num_symbol_nodes;
    let has_parent = *parent_pos < nodes.len();
    debug_assert!(has_leaf || has_parent);
    if has_leaf && (!has_parent || nodes[*leaf_pos].count <= nodes[*parent_pos].count) {
        increment_return_old(leaf_pos)
    } else {
        increment_return_old(parent_pos)
    }
}

#[inline]
pub fn increment_return_old(val: &mut usize) -> usize {
    *val += 1;
    *val - 1
}
