use crate::tree::NodeKind;
use crate::Tree;
use common::bit_direction;
use common::CodeError;
use common::Symbol;

/// Finds symbols in a [`Tree`] by their codeword.
///
/// The decoder only borrows the tree, any number of decoders can walk the same tree at once.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a, S> {
    tree: &'a Tree<S>,
}

impl<'a, S: Symbol> Decoder<'a, S> {
    pub fn new(tree: &'a Tree<S>) -> Self {
        Decoder { tree }
    }

    /// Returns the symbol whose path from the root is exactly `codeword`.
    ///
    /// `None` if the codeword stops at a parent, continues after a leaf or contains anything
    /// other than `'0'` and `'1'`. A tree with a single symbol returns that symbol for any input.
    pub fn find(&self, codeword: &str) -> Option<S> {
        let root = self.tree.get_root_node();
        if let Some(symbol) = root.symbol() {
            return Some(symbol);
        }

        let bits = codeword.as_bytes();
        match self.decode_at(bits, 0) {
            Ok((symbol, end)) if end == bits.len() => Some(symbol),
            _ => None,
        }
    }

    /// Walks from the root, starting at `bits[pos]`, until a leaf is reached.
    ///
    /// Returns the symbol and the position behind its codeword, which is where the next codeword
    /// of a concatenated stream begins. A tree with a single symbol consumes one bit per symbol.
    pub fn decode_at(&self, bits: &[u8], mut pos: usize) -> Result<(S, usize), CodeError> {
        let mut node = self.tree.get_root_node();
        if let Some(symbol) = node.symbol() {
            next_direction(bits, pos)?;
            return Ok((symbol, pos + 1));
        }

        loop {
            match *node.kind() {
                NodeKind::Leaf { symbol } => return Ok((symbol, pos)),
                NodeKind::Internal { left, right } => {
                    let go_right = next_direction(bits, pos)?;
                    node = self.tree.get_node(if go_right { right } else { left });
                    pos += 1;
                }
            }
        }
    }
}

#[inline]
fn next_direction(bits: &[u8], position: usize) -> Result<bool, CodeError> {
    let bit = *bits
        .get(position)
        .ok_or(CodeError::IncompleteCodeword { position })?;
    bit_direction(bit).ok_or(CodeError::InvalidBit {
        bit: bit as char,
        position,
    })
}
