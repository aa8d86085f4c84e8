//! Single-pass character accumulator preserving first-seen order.

use std::io::{self, BufRead, BufReader, Read};

use indexmap::IndexMap;

/// Occurrence counts keyed by character, iterated in first-seen order.
pub type Tally = IndexMap<char, u64>;

const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Consume `src` to exhaustion and count every decoded character, line
/// terminators included.
///
/// Empty input yields an empty tally. Malformed UTF-8 surfaces as the
/// `InvalidData` error the buffered reader reports; it is not recovered
/// here.
pub fn accumulate<R: Read>(src: R) -> io::Result<Tally> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut line = String::new();
    let mut tally = Tally::new();

    loop {
        line.clear();
        let n = rdr.read_line(&mut line)?;
        if n == 0 {
            break;
        }
        for c in line.chars() {
            *tally.entry(c).or_insert(0) += 1;
        }
    }
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::{Tally, accumulate};

    fn tally_of(input: &str) -> Tally {
        accumulate(input.as_bytes()).unwrap()
    }

    #[test]
    fn counts_in_first_seen_order() {
        let t = tally_of("aab");
        let entries: Vec<_> = t.iter().map(|(c, n)| (*c, *n)).collect();
        assert_eq!(entries, vec![('a', 2), ('b', 1)]);
    }

    #[test]
    fn empty_input_gives_empty_tally() {
        assert!(tally_of("").is_empty());
    }

    #[test]
    fn line_terminators_are_counted() {
        let t = tally_of("a\tb\n");
        let entries: Vec<_> = t.iter().map(|(c, n)| (*c, *n)).collect();
        assert_eq!(entries, vec![('a', 1), ('\t', 1), ('b', 1), ('\n', 1)]);
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        let t = tally_of("héé💯");
        assert_eq!(t[&'h'], 1);
        assert_eq!(t[&'é'], 2);
        assert_eq!(t[&'💯'], 1);
    }

    #[test]
    fn counts_sum_to_input_length() {
        let input = "the quick brown fox\njumps över the lazy dog\n";
        let t = tally_of(input);
        let total: u64 = t.values().sum();
        assert_eq!(total, input.chars().count() as u64);
    }

    #[test]
    fn later_occurrences_do_not_reorder() {
        let t = tally_of("abcabcabca");
        let keys: Vec<_> = t.keys().copied().collect();
        assert_eq!(keys, vec!['a', 'b', 'c']);
        assert_eq!(t[&'a'], 4);
    }

    #[test]
    fn malformed_utf8_is_an_io_error() {
        let bad: &[u8] = b"ok\xFF\xFEnope";
        let err = accumulate(bad).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
