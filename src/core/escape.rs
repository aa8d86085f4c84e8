//! C-style escaping for characters that would break delimited output.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Nonprinting or otherwise 'weird' characters that may break
/// interoperability with other programs, paired with their mnemonics.
const EVIL_KEYS: [(char, &str); 8] = [
    ('\0', "\\0"),     // null character
    ('\u{07}', "\\a"), // alert, bell
    ('\u{08}', "\\b"), // backspace
    ('\u{0C}', "\\f"), // formfeed (page break)
    ('\n', "\\n"),     // newline
    ('\r', "\\r"),     // carriage return
    ('\t', "\\t"),     // tab
    ('\u{0B}', "\\v"), // vertical tab
];

/// Map one character to its printable representation.
///
/// Evil keys get a two-character mnemonic, other non-printable code points a
/// `\U`-prefixed 8-digit lowercase hex escape, everything else passes
/// through unchanged. Total: every `char` has a defined mapping.
#[must_use]
pub fn escape(key: char) -> String {
    if let Some((_, mnemonic)) = EVIL_KEYS.iter().find(|(c, _)| *c == key) {
        return (*mnemonic).to_owned();
    }
    if !is_printable(key) {
        return format!("\\U{:08x}", u32::from(key));
    }
    key.to_string()
}

/// Printability per the Unicode general category: everything outside the
/// `Separator` (Z*) and `Other` (C*) groups, with the plain space exempted.
#[must_use]
pub fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Separator | GeneralCategoryGroup::Other
    )
}
