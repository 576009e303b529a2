/*!
Shared vocabulary of the huffcode crates: the symbol bound, the frequency map handed to the tree
builder and the error type of all encode and decode paths.
*/

mod error;

use core::fmt::Debug;
use core::hash::Hash;
use std::collections::HashMap;

pub use error::CodeError;

/// Bit character for a transition to the left child.
pub const ZERO_BIT: u8 = b'0';
/// Bit character for a transition to the right child.
pub const ONE_BIT: u8 = b'1';

/// Codeword assigned when the alphabet has a single symbol. The tree is then a lone leaf without
/// a path, but every occurrence still needs one bit.
pub const SINGLE_SYMBOL_CODEWORD: &str = "0";

/// An element of the input alphabet.
///
/// `Ord` is only used to fix the order in which leaves enter the priority queue, so equal counts
/// are merged the same way on every run.
pub trait Symbol: Copy + Eq + Hash + Ord + Debug {}

impl<T: Copy + Eq + Hash + Ord + Debug> Symbol for T {}

/// Number of occurences per symbol
pub type FrequencyMap<S> = HashMap<S, u64>;

/// Maps a bit character to the child it selects, `false` is left and `true` is right.
#[inline]
pub fn bit_direction(bit: u8) -> Option<bool> {
    match bit {
        ZERO_BIT => Some(false),
        ONE_BIT => Some(true),
        _ => None,
    }
}

#[test]
fn test_bit_direction() {
    assert_eq!(bit_direction(b'0'), Some(false));
    assert_eq!(bit_direction(b'1'), Some(true));
    assert_eq!(bit_direction(b'2'), None);
    assert_eq!(bit_direction(b' '), None);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        CodeError::InvalidBit { bit: 'x', position: 3 }.to_string(),
        "invalid bit 'x' at position 3"
    );
    assert_eq!(
        CodeError::IncompleteCodeword { position: 7 }.to_string(),
        "codeword ends at an internal node at bit 7"
    );
    assert_eq!(
        CodeError::PrefixViolation {
            prefix: "01".to_string(),
            codeword: "011".to_string()
        }
        .to_string(),
        "codeword \"01\" is a prefix of \"011\""
    );
}
