use crate::tree::NodeId;
use crate::tree::NodeKind;
use crate::Tree;
use common::CodeError;
use common::Symbol;
use common::SINGLE_SYMBOL_CODEWORD;
use log::log_enabled;
use log::Level::Trace;
use log::*;
use std::collections::HashMap;

/// Codeword per symbol, each codeword is a string of `'0'` and `'1'`.
pub type CodeTable<S> = HashMap<S, String>;

/// Lookup table from symbol to codeword, built by walking a [`Tree`] once.
///
/// Going left appends a `'0'`, going right a `'1'`. If the tree is a single leaf, its symbol gets
/// the codeword `"0"`.
#[derive(Debug, Clone)]
pub struct Encoder<S> {
    codes: CodeTable<S>,
}

impl<S: Symbol> Encoder<S> {
    pub fn new(tree: &Tree<S>) -> Self {
        let mut codes = CodeTable::with_capacity(tree.get_num_symbol_nodes());
        let mut code = String::new();
        fill(tree, tree.root_node(), &mut code, &mut codes);

        if log_enabled!(Trace) {
            let mut sorted: Vec<_> = codes.iter().collect();
            sorted.sort();
            for (symbol, code) in sorted {
                trace!("{:?}: {}", symbol, code);
            }
        }
        Encoder { codes }
    }

    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    pub fn into_codes(self) -> CodeTable<S> {
        self.codes
    }

    /// codeword of `symbol`, `None` if the symbol was not in the tree
    pub fn get(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }
}

fn fill<S: Symbol>(tree: &Tree<S>, node_pos: NodeId, code: &mut String, codes: &mut CodeTable<S>) {
    match *tree.get_node(node_pos).kind() {
        NodeKind::Internal { left, right } => {
            code.push('0');
            fill(tree, left, code, codes);
            code.pop();
            code.push('1');
            fill(tree, right, code, codes);
            code.pop();
        }
        NodeKind::Leaf { symbol } if code.is_empty() => {
            // the root is the only node
            codes.insert(symbol, SINGLE_SYMBOL_CODEWORD.to_string());
        }
        NodeKind::Leaf { symbol } => {
            codes.insert(symbol, code.clone());
        }
    }
}

/// Checks that no codeword is a prefix of another one.
///
/// After sorting, a codeword which is a prefix of others sorts directly before the first of them,
/// so comparing neighbours is enough.
pub fn verify_prefix_property<S>(table: &CodeTable<S>) -> Result<(), CodeError> {
    let mut codewords: Vec<&str> = table.values().map(String::as_str).collect();
    codewords.sort_unstable();
    for pair in codewords.windows(2) {
        if pair[1].starts_with(pair[0]) {
            return Err(CodeError::PrefixViolation {
                prefix: pair[0].to_string(),
                codeword: pair[1].to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_tree;
    use common::FrequencyMap;

    fn freqs(pairs: &[(char, u64)]) -> FrequencyMap<char> {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn single_symbol_gets_zero() {
        let tree = build_tree(&freqs(&[('a', 5)])).unwrap();
        let encoder = Encoder::new(&tree);
        assert_eq!(encoder.codes().len(), 1);
        assert_eq!(encoder.get(&'a'), Some("0"));
    }

    #[test]
    fn two_symbols() {
        let tree = build_tree(&freqs(&[('a', 1), ('b', 2)])).unwrap();
        let codes = Encoder::new(&tree).into_codes();
        assert_eq!(codes[&'a'], "0");
        assert_eq!(codes[&'b'], "1");
    }

    #[test]
    fn codeword_lengths_follow_counts() {
        let tree = build_tree(&freqs(&[('a', 5), ('b', 2), ('c', 1), ('d', 1)])).unwrap();
        let encoder = Encoder::new(&tree);
        assert_eq!(encoder.get(&'a').map(str::len), Some(1));
        assert_eq!(encoder.get(&'b').map(str::len), Some(2));
        assert_eq!(encoder.get(&'c').map(str::len), Some(3));
        assert_eq!(encoder.get(&'d').map(str::len), Some(3));
        assert_eq!(encoder.get(&'e'), None);
        verify_prefix_property(encoder.codes()).unwrap();
    }

    #[test]
    fn every_leaf_has_a_codeword() {
        let counts: FrequencyMap<u8> = (0..=u8::MAX).map(|b| (b, b as u64 % 7)).collect();
        let tree = build_tree(&counts).unwrap();
        let encoder = Encoder::new(&tree);
        assert_eq!(encoder.codes().len(), 256);
        for code in encoder.codes().values() {
            assert!(!code.is_empty());
            assert!(code.bytes().all(|b| b == b'0' || b == b'1'));
        }
        verify_prefix_property(encoder.codes()).unwrap();
    }

    #[test]
    fn detects_prefix_violation() {
        let mut table = CodeTable::new();
        table.insert('a', "01".to_string());
        table.insert('b', "1".to_string());
        table.insert('c', "011".to_string());
        assert_eq!(
            verify_prefix_property(&table),
            Err(CodeError::PrefixViolation {
                prefix: "01".to_string(),
                codeword: "011".to_string()
            })
        );

        // equal codewords are ambiguous too
        let mut table = CodeTable::new();
        table.insert('a', "10".to_string());
        table.insert('b', "10".to_string());
        assert!(verify_prefix_property(&table).is_err());
    }
}
