//! Named bundles of delimited-output conventions.

use csv::QuoteStyle;

use crate::core::error::UsageError;

/// Record terminator written after each row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineTerminator {
    Crlf,
    Lf,
}

/// A named bundle of formatting conventions handed to the writer.
#[derive(Clone, Copy, Debug)]
pub struct Dialect {
    pub name: &'static str,
    pub delimiter: u8,
    pub quote_style: QuoteStyle,
    pub terminator: LineTerminator,
}

/// Registered dialects. `excel` and `excel-tab` follow spreadsheet
/// conventions (minimal quoting, CRLF); `unix` quotes every field and ends
/// records with a bare LF.
static DIALECTS: [Dialect; 3] = [
    Dialect {
        name: "excel",
        delimiter: b',',
        quote_style: QuoteStyle::Necessary,
        terminator: LineTerminator::Crlf,
    },
    Dialect {
        name: "excel-tab",
        delimiter: b'\t',
        quote_style: QuoteStyle::Necessary,
        terminator: LineTerminator::Crlf,
    },
    Dialect {
        name: "unix",
        delimiter: b',',
        quote_style: QuoteStyle::Always,
        terminator: LineTerminator::Lf,
    },
];

/// The dialect in force when the user names none: the spreadsheet-style
/// `excel` bundle, the same implicit default the underlying delimited-text
/// machinery applies on its own.
pub fn default() -> &'static Dialect {
    &DIALECTS[0]
}

/// Look a dialect up by its exact name.
pub fn lookup(name: &str) -> Result<&'static Dialect, UsageError> {
    DIALECTS
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| UsageError::UnknownDialect(name.to_owned()))
}

/// Registered names, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    DIALECTS.iter().map(|d| d.name)
}

#[cfg(test)]
mod tests {
    use super::{LineTerminator, default, lookup, names};

    #[test]
    fn registered_names_resolve() {
        for name in ["excel", "excel-tab", "unix"] {
            assert_eq!(lookup(name).unwrap().name, name);
        }
    }

    #[test]
    fn unknown_name_is_a_usage_error() {
        let err = lookup("bogus").unwrap_err();
        assert_eq!(err.to_string(), "no such dialect: bogus");
    }

    #[test]
    fn names_list_in_registry_order() {
        let all: Vec<_> = names().collect();
        assert_eq!(all, vec!["excel", "excel-tab", "unix"]);
    }

    #[test]
    fn unnamed_default_is_excel() {
        let d = default();
        assert_eq!(d.name, "excel");
        assert_eq!(d.terminator, LineTerminator::Crlf);
    }
}
