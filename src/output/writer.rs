//! Thin adapter over the `csv` writer: option resolution + row emission.

use std::io::{self, Write};

use csv::{Terminator, WriterBuilder};

use crate::core::{
    error::{CountError, UsageError},
    row::Row,
};

use super::dialect::{self, Dialect, LineTerminator};

/// Aliases recognised in a delimiter argument.
const SPECIAL_DELIMITERS: [(&str, u8); 2] = [("\\t", b'\t'), ("\\0", b'\0')];

/// Resolve a raw delimiter argument to the single byte the writer needs.
///
/// The two escape aliases resolve first; anything else must be exactly one
/// single-byte character.
pub fn resolve_delimiter(arg: &str) -> Result<u8, UsageError> {
    if let Some((_, byte)) = SPECIAL_DELIMITERS.iter().find(|(alias, _)| *alias == arg) {
        return Ok(*byte);
    }
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(UsageError::BadDelimiter(arg.to_owned())),
    }
}

/// Validated writer configuration: an optional dialect bundle plus an
/// optional delimiter override.
#[derive(Clone, Copy, Debug, Default)]
pub struct WriterOptions {
    delimiter: Option<u8>,
    dialect: Option<&'static Dialect>,
}

impl WriterOptions {
    /// Resolve raw CLI arguments. Rejection happens here, before any
    /// resource is acquired.
    pub fn resolve(delimiter: Option<&str>, dialect: Option<&str>) -> Result<Self, UsageError> {
        Ok(Self {
            delimiter: delimiter.map(resolve_delimiter).transpose()?,
            dialect: dialect.map(dialect::lookup).transpose()?,
        })
    }

    /// The dialect in force: the named one, else the implicit default.
    fn active(self) -> &'static Dialect {
        self.dialect.unwrap_or_else(dialect::default)
    }

    fn builder(self) -> WriterBuilder {
        let d = self.active();
        let mut b = WriterBuilder::new();
        b.delimiter(d.delimiter);
        b.quote_style(d.quote_style);
        // records leave the csv writer LF-terminated; CRLF dialects are
        // expanded at the sink
        b.terminator(Terminator::Any(b'\n'));
        // an explicit delimiter wins over the dialect's
        if let Some(byte) = self.delimiter {
            b.delimiter(byte);
        }
        b
    }

    /// Drain `rows` into `out`, one two-field record per row, then flush.
    ///
    /// Field-level quoting is the underlying writer's business; escaped keys
    /// arrive here already free of raw control characters.
    pub fn write_rows<W, I>(self, out: W, rows: I) -> Result<(), CountError>
    where
        W: Write,
        I: Iterator<Item = Row>,
    {
        match self.active().terminator {
            LineTerminator::Crlf => self.drain(CrlfWriter(out), rows),
            LineTerminator::Lf => self.drain(out, rows),
        }
    }

    fn drain<W, I>(self, out: W, rows: I) -> Result<(), CountError>
    where
        W: Write,
        I: Iterator<Item = Row>,
    {
        let mut wtr = self.builder().from_writer(out);
        for row in rows {
            wtr.write_record([row.key.as_str(), row.count.as_str()])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Expands each record terminator the inner csv writer emits to `\r\n`.
///
/// Sound only because no field ever contains a raw newline: escaped keys
/// and decimal counts are newline-free, so every `\n` seen here ends a
/// record. (The csv library's own CRLF terminator setting concerns reading;
/// its writer always emits a single byte.)
struct CrlfWriter<W: Write>(W);

impl<W: Write> Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match buf.iter().position(|&b| b == b'\n') {
            Some(i) => {
                self.0.write_all(&buf[..i])?;
                self.0.write_all(b"\r\n")?;
                Ok(i + 1)
            }
            None => {
                self.0.write_all(buf)?;
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
