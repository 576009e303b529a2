#![no_main]

use codetree::build_tree;
use codetree::build_tree_fast;
use common::FrequencyMap;
use libfuzzer_sys::fuzz_target;

// every two bytes are a symbol and its count
fuzz_target!(|data: &[u8]| {
    let counts: FrequencyMap<u8> = data
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1] as u64))
        .collect();
    let heap_tree = build_tree(&counts);
    let fast_tree = build_tree_fast(&counts);
    match (heap_tree, fast_tree) {
        (Some(heap_tree), Some(fast_tree)) => {
            assert_eq!(heap_tree.weighted_path_length(), fast_tree.weighted_path_length());
            assert_eq!(heap_tree.total_count(), fast_tree.total_count());
        }
        (None, None) => assert!(counts.is_empty()),
        _ => panic!("builders disagree on {:?}", counts),
    }
});
