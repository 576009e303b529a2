use codetree::Decoder;
use codetree::Tree;
use common::CodeError;
use common::Symbol;
use log::*;

/// Splits a concatenation of codewords back into symbols.
///
/// Each codeword ends where the walk from the root hits a leaf, so no separators are needed.
/// Bits which end inside a codeword yield [`CodeError::IncompleteCodeword`].
#[inline]
pub fn decode_bits<S: Symbol>(tree: &Tree<S>, bits: &str) -> Result<Vec<S>, CodeError> {
    let decoder = Decoder::new(tree);
    let bits = bits.as_bytes();

    let mut symbols = vec![];
    let mut pos = 0;
    while pos < bits.len() {
        let (symbol, next_pos) = decoder.decode_at(bits, pos)?;
        symbols.push(symbol);
        pos = next_pos;
    }
    debug!("decoded {} symbols from {} bits", symbols.len(), bits.len());
    Ok(symbols)
}
