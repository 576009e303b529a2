/*!
huffcode turns text into a huffman code and back.

The heavy lifting happens in [`codetree`]: a tree is built from the symbol counts, the encoder
collects one codeword per symbol and the decoder walks the tree to find the symbol of a
codeword. This crate adds the plumbing around it: counting the input with [`hist`],
concatenating codewords into a bitstring and splitting a bitstring back into symbols.

Bits are kept as a string of `'0'` and `'1'`. Packing them into bytes, storing the tree and
framing the result is left to the caller.

```
let compressed = huffcode::compress("abracadabra").unwrap();
assert!(compressed.num_bits() < 11 * 8);
assert_eq!(huffcode::decompress(&compressed).unwrap(), "abracadabra");
```
*/

pub use crate::compress::encode_symbols;
pub use crate::compress::encode_text;
pub use crate::decompress::decode_bits;
pub use codetree::build_tree;
pub use codetree::CodeTable;
pub use codetree::Decoder;
pub use codetree::Encoder;
pub use codetree::Tree;
pub use common::CodeError;
pub use common::FrequencyMap;
pub use hist::count_chars;

use log::*;

pub mod compress;
pub mod decompress;

/// Result of [`compress`]: the code tree, the code table derived from it and the encoded bits.
#[derive(Debug, Clone)]
pub struct Compressed {
    pub tree: Tree<char>,
    pub codes: CodeTable<char>,
    pub bits: String,
}

impl Compressed {
    pub fn num_bits(&self) -> usize {
        self.bits.len()
    }

    /// size in byte once the bits are packed, the last byte padded
    pub fn num_bytes(&self) -> usize {
        (self.bits.len() + 7) / 8
    }
}

/// Counts the chars of `text`, builds the code and encodes `text` with it.
pub fn compress(text: &str) -> Result<Compressed, CodeError> {
    let counts = count_chars(text);
    let tree = build_tree(&counts).ok_or(CodeError::EmptyInput)?;
    let codes = Encoder::new(&tree).into_codes();
    let bits = encode_text(&codes, text)?;
    debug!(
        "compressed {} chars into {} bits using {} symbols",
        text.chars().count(),
        bits.len(),
        codes.len()
    );
    Ok(Compressed { tree, codes, bits })
}

pub fn decompress(compressed: &Compressed) -> Result<String, CodeError> {
    let symbols = decode_bits(&compressed.tree, &compressed.bits)?;
    Ok(symbols.into_iter().collect())
}

#[cfg(test)]
mod tests {

    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Setup function that is only run once, even if called multiple times.
    fn setup() {
        INIT.call_once(|| {
            env_logger::init();
        });
    }

    use super::*;

    const A_CHAR: char = 'a';
    const B_CHAR: char = 'b';
    const C_CHAR: char = 'c';

    fn get_test_data() -> String {
        let mut buffer = String::new();
        buffer.extend(std::iter::repeat(A_CHAR).take(45)); // 45% prob
        buffer.extend(std::iter::repeat(B_CHAR).take(35)); // 35% prob
        buffer.extend(std::iter::repeat(C_CHAR).take(20)); // 20% prob
        buffer
    }

    #[test]
    fn test_compress() {
        setup();
        let test_data = get_test_data();
        let counts = count_chars(&test_data);
        assert_eq!(counts[&A_CHAR], 45);
        assert_eq!(counts[&B_CHAR], 35);
        assert_eq!(counts[&C_CHAR], 20);

        let out = compress(&test_data).unwrap();
        // a gets one bit, b and c two bits
        assert_eq!(out.codes[&A_CHAR].len(), 1);
        assert_eq!(out.codes[&B_CHAR].len(), 2);
        assert_eq!(out.codes[&C_CHAR].len(), 2);
        assert_eq!(out.num_bits(), 45 + 35 * 2 + 20 * 2);
        assert_eq!(out.num_bytes(), 20);
        assert_eq!(out.tree.estimate_compressed_size(), out.num_bytes());

        assert_eq!(decompress(&out).unwrap(), test_data);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compress("").unwrap_err(), CodeError::EmptyInput);
    }

    #[test]
    fn test_single_symbol() {
        setup();
        let out = compress("zzzz").unwrap();
        assert_eq!(out.bits, "0000");
        assert_eq!(decompress(&out).unwrap(), "zzzz");
    }

    #[test]
    fn test_roundtrip_text() {
        setup();
        let texts = [
            "abracadabra",
            "the quick brown fox jumps over the lazy dog",
            "größenwahn → ünïcödé ✓",
            "ab",
            "a\nb\n\tc",
        ];
        for text in texts.iter() {
            let out = compress(text).unwrap();
            codetree::verify_prefix_property(&out.codes).unwrap();
            assert_eq!(out.bits.len() as u64, out.tree.weighted_path_length());
            assert_eq!(&decompress(&out).unwrap(), text);
        }
    }

    #[test]
    fn test_roundtrip_bytes() {
        let input: Vec<u8> = (0..=u8::MAX).chain(vec![7, 7, 7, 7, 9, 9]).collect();
        let counts = hist::count_bytes(&input);
        let tree = build_tree(&counts).unwrap();
        let codes = Encoder::new(&tree).into_codes();
        let bits = encode_symbols(&codes, input.iter().cloned()).unwrap();
        assert_eq!(decode_bits(&tree, &bits).unwrap(), input);
    }

    #[test]
    fn test_corrupted_bits() {
        let mut out = compress("abracadabra").unwrap();
        out.bits.push('2');
        let position = out.bits.len() - 1;
        assert_eq!(
            decompress(&out),
            Err(CodeError::InvalidBit { bit: '2', position })
        );
    }
}
