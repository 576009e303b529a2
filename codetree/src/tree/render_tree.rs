use super::tree_node::NodeId;
use super::tree_node::NodeKind;
use crate::Tree;
use common::Symbol;
use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    transition: u8, // 0 or 1
}

pub fn render_plan_to<S: Symbol, W: core::fmt::Write>(
    graph: &Tree<S>,
    output: &mut W,
) -> std::result::Result<(), core::fmt::Error> {
    dot::render(graph, output)
}

impl<'a, S: Symbol + 'a> dot::Labeller<'a> for Tree<S> {
    type Node = NodeId;
    type Edge = Edge;
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("huffman").unwrap()
    }

    fn node_id(&'a self, n: &NodeId) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label<'b>(&'b self, n: &NodeId) -> dot::LabelText<'b> {
        let node = self.get_node(*n);
        let out = match node.kind() {
            NodeKind::Leaf { symbol } => format!("Cnt:{:?} Symbl:{:?}", node.count(), symbol),
            NodeKind::Internal { .. } => format!("Cnt:{:?}", node.count()),
        };
        dot::LabelText::LabelStr(out.into())
    }

    /// Adds attr to `n` that will be used in the rendered output.
    fn node_attr(&'a self, n: &Self::Node) -> Option<String> {
        let out = if self.get_node(*n).is_leaf() {
            "color=dodgerblue4 fontcolor=dodgerblue4 ".to_string()
        } else {
            "color=azure4 fontcolor=azure4 ".to_string()
        };
        Some(out)
    }

    fn edge_label<'b>(&'b self, ed: &Edge) -> dot::LabelText<'b> {
        dot::LabelText::LabelStr(ed.transition.to_string().into())
    }
}

impl<'a, S: Symbol + 'a> dot::GraphWalk<'a> for Tree<S> {
    type Node = NodeId;
    type Edge = Edge;
    fn nodes(&self) -> dot::Nodes<NodeId> {
        (0..self.nodes.len() as NodeId).collect()
    }

    fn edges(&self) -> dot::Edges<Edge> {
        let mut edges = vec![];
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some((left, right)) = node.children() {
                edges.push(Edge {
                    from: i as NodeId,
                    to: left,
                    transition: 0,
                });
                edges.push(Edge {
                    from: i as NodeId,
                    to: right,
                    transition: 1,
                });
            }
        }
        Cow::Owned(edges)
    }

    fn source(&self, e: &Edge) -> NodeId {
        e.from
    }

    fn target(&self, e: &Edge) -> NodeId {
        e.to
    }
}

#[cfg(test)]
mod tests {
    use crate::build_tree;
    use common::FrequencyMap;

    #[test]
    fn renders_all_nodes_and_edges() {
        let freqs: FrequencyMap<char> = vec![('a', 3), ('b', 1)].into_iter().collect();
        let tree = build_tree(&freqs).unwrap();
        let rendered = tree.to_string();
        assert!(rendered.contains("huffman"));
        assert!(rendered.contains("Cnt:3 Symbl:"));
        assert!(rendered.contains("Cnt:1 Symbl:"));
        assert!(rendered.contains("Cnt:4"));
        assert!(rendered.contains("N2"));
    }
}
