/*!
codetree builds a binary prefix code from symbol counts and translates between symbols and
codewords.

[`build_tree`] merges the two rarest nodes until one root is left, the classic huffman
construction. The [`Encoder`] walks the finished tree once to collect a codeword per symbol,
the [`Decoder`] walks it per lookup, one bit per level.

```
use codetree::{build_tree, Decoder, Encoder};
use common::FrequencyMap;

let counts: FrequencyMap<char> = vec![('a', 1), ('b', 2)].into_iter().collect();
let tree = build_tree(&counts).unwrap();
let encoder = Encoder::new(&tree);
assert_eq!(encoder.get(&'b'), Some("1"));
assert_eq!(Decoder::new(&tree).find("0"), Some('a'));
```
*/

pub mod decoder;
pub mod encoder;
pub mod tree;

pub use crate::decoder::Decoder;
pub use crate::encoder::verify_prefix_property;
pub use crate::encoder::CodeTable;
pub use crate::encoder::Encoder;
pub use crate::tree::build_tree;
pub use crate::tree::build_tree_fast;
pub use crate::tree::Tree;
