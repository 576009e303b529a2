#![no_main]

use codetree::build_tree;
use codetree::Decoder;
use codetree::Encoder;
use hist::count_bytes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let counts = count_bytes(&data);
    let tree = match build_tree(&counts) {
        Some(tree) => tree,
        None => return,
    };
    let encoder = Encoder::new(&tree);
    let decoder = Decoder::new(&tree);
    let mut bits = String::new();
    for byte in data {
        let code = encoder.get(byte).unwrap();
        assert_eq!(decoder.find(code), Some(*byte));
        bits.push_str(code);
    }

    let bits = bits.as_bytes();
    let mut pos = 0;
    for byte in data {
        let (symbol, next) = decoder.decode_at(bits, pos).unwrap();
        assert_eq!(symbol, *byte);
        pos = next;
    }
    assert_eq!(pos, bits.len());
});
