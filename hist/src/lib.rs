/*!
Frequency counting for the tree builder. Each function scans some input once and tallies how
often each symbol occurs.
*/

use common::FrequencyMap;
use common::Symbol;
use log::log_enabled;
use log::Level::Trace;
use log::*;
use std::io::BufRead;

/// creates a table with the counts of each byte
#[inline]
pub fn count_bytes(input: &[u8]) -> FrequencyMap<u8> {
    // a dense table is much faster than hashing every byte
    let mut counts = [0_u64; 256];
    for byte in input {
        counts[*byte as usize] += 1;
    }

    let freqs: FrequencyMap<u8> = counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count != 0)
        .map(|(byte, count)| (byte as u8, *count))
        .collect();
    dump_counts(&freqs);
    freqs
}

/// creates a table with the counts of each char
#[inline]
pub fn count_chars(input: &str) -> FrequencyMap<char> {
    let mut freqs = FrequencyMap::new();
    add_chars(&mut freqs, input);
    dump_counts(&freqs);
    freqs
}

/// Counts the chars of every line in `reader`.
///
/// Line terminators are not counted, so `"ab\nb\n"` yields `a: 1, b: 2`.
pub fn count_lines<R: BufRead>(reader: R) -> std::io::Result<FrequencyMap<char>> {
    let mut freqs = FrequencyMap::new();
    let mut num_lines = 0;
    for line in reader.lines() {
        add_chars(&mut freqs, &line?);
        num_lines += 1;
    }
    debug!("counted {} lines, {} distinct chars", num_lines, freqs.len());
    dump_counts(&freqs);
    Ok(freqs)
}

fn add_chars(freqs: &mut FrequencyMap<char>, input: &str) {
    for c in input.chars() {
        *freqs.entry(c).or_insert(0) += 1;
    }
}

fn dump_counts<S: Symbol>(freqs: &FrequencyMap<S>) {
    if log_enabled!(Trace) {
        let mut sorted: Vec<_> = freqs.iter().collect();
        sorted.sort();
        for (symbol, count) in sorted {
            trace!("{:?}: {}", symbol, count);
        }
    }
}

#[cfg(test)]
mod tests {

    use super::count_bytes;
    use super::count_chars;
    use super::count_lines;

    const A_BYTE: u8 = "a".as_bytes()[0];
    const B_BYTE: u8 = "b".as_bytes()[0];
    const C_BYTE: u8 = "c".as_bytes()[0];

    fn get_test_data() -> Vec<u8> {
        use std::io::Read;
        let mut buffer = Vec::new();
        std::io::repeat(A_BYTE)
            .take(45)
            .read_to_end(&mut buffer)
            .unwrap(); // 45% prob
        std::io::repeat(B_BYTE)
            .take(35)
            .read_to_end(&mut buffer)
            .unwrap(); // 35% prob
        std::io::repeat(C_BYTE)
            .take(20)
            .read_to_end(&mut buffer)
            .unwrap(); // 20% prob

        buffer
    }

    #[test]
    fn test_count_bytes() {
        let test_data = get_test_data();

        let counts = count_bytes(&test_data);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&A_BYTE], 45);
        assert_eq!(counts[&B_BYTE], 35);
        assert_eq!(counts[&C_BYTE], 20);
    }

    #[test]
    fn test_count_bytes_full_range() {
        let all_bytes = (0..=u8::MAX).collect::<Vec<u8>>();
        let counts = count_bytes(&all_bytes);
        assert_eq!(counts.len(), 256);
        assert!(counts.values().all(|count| *count == 1));
    }

    #[test]
    fn test_count_chars() {
        let test_data = String::from_utf8(get_test_data()).unwrap();
        let counts = count_chars(&test_data);
        assert_eq!(counts[&'a'], 45);
        assert_eq!(counts[&'b'], 35);
        assert_eq!(counts[&'c'], 20);

        let counts = count_chars("größe ß");
        assert_eq!(counts[&'ß'], 2);
        assert_eq!(counts[&' '], 1);
        assert_eq!(counts.len(), 6);

        assert!(count_chars("").is_empty());
    }

    #[test]
    fn test_count_lines_skips_line_terminators() {
        let input = "ab\nb\r\n\nbc";
        let counts = count_lines(input.as_bytes()).unwrap();
        assert_eq!(counts[&'a'], 1);
        assert_eq!(counts[&'b'], 3);
        assert_eq!(counts[&'c'], 1);
        assert!(!counts.contains_key(&'\n'));
        assert!(!counts.contains_key(&'\r'));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_count_lines_empty() {
        let counts = count_lines(&b""[..]).unwrap();
        assert!(counts.is_empty());
    }
}
