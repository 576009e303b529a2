#![no_main]

use codetree::build_tree;
use codetree::verify_prefix_property;
use codetree::Encoder;
use hist::count_bytes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let counts = count_bytes(&data);
    let tree = match build_tree(&counts) {
        Some(tree) => tree,
        None => return,
    };
    verify_prefix_property(Encoder::new(&tree).codes()).unwrap();
});
