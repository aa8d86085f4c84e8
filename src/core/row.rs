//! Pairs each tallied character with its count, ready for the writer.

use crate::core::{escape::escape, tally::Tally};

/// One output record: escaped key plus decimal count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub count: String,
}

/// Lazy view over `tally` in insertion order, one `Row` per distinct
/// character.
pub fn rows(tally: &Tally) -> impl Iterator<Item = Row> + '_ {
    tally.iter().map(|(c, n)| Row {
        key: escape(*c),
        count: n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::rows;
    use crate::core::tally::Tally;

    #[test]
    fn rows_follow_insertion_order_and_escape_keys() {
        let mut tally = Tally::new();
        tally.insert('a', 2);
        tally.insert('\t', 1);
        tally.insert('b', 7);

        let got: Vec<_> = rows(&tally).map(|r| (r.key, r.count)).collect();
        assert_eq!(
            got,
            vec![
                ("a".to_owned(), "2".to_owned()),
                ("\\t".to_owned(), "1".to_owned()),
                ("b".to_owned(), "7".to_owned()),
            ]
        );
    }

    #[test]
    fn empty_tally_yields_no_rows() {
        let tally = Tally::new();
        assert_eq!(rows(&tally).count(), 0);
    }
}
