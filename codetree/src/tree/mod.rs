pub mod build_tree;
pub mod render_tree;
mod tree;
pub(crate) mod tree_node;
pub use build_tree::build_tree;
pub use build_tree::build_tree_fast;
pub use tree_node::Node;
pub use tree_node::NodeId;
pub use tree_node::NodeKind;

pub use tree::Tree;

/// we can calculate the minimum depth of a code tree, by its binary tree properties.
/// A symbol is always a leaf (to uphold the prefix characteristic), therefore the maximum number of symbols is 2^depth (perfectly balanced tree).
/// A single symbol still needs one bit.
#[inline]
pub fn minimum_tree_depth(num_symbols: usize) -> usize {
    (num_symbols.next_power_of_two().trailing_zeros() as usize).max(1)
}

#[test]
fn test_minimum_depth() {
    assert_eq!(minimum_tree_depth(0), 1);
    assert_eq!(minimum_tree_depth(1), 1);
    assert_eq!(minimum_tree_depth(2), 1);
    assert_eq!(minimum_tree_depth(3), 2);
    assert_eq!(minimum_tree_depth(4), 2);
    assert_eq!(minimum_tree_depth(5), 3);
    assert_eq!(minimum_tree_depth(6), 3);
    assert_eq!(minimum_tree_depth(7), 3);
    assert_eq!(minimum_tree_depth(8), 3);
    assert_eq!(minimum_tree_depth(9), 4);
    assert_eq!(minimum_tree_depth(256), 8);
}
