use std::{fs::File, io, time::Instant};

use crate::{
    core::{
        error::{CountError, UsageError},
        row::rows,
        tally::{self, Tally},
    },
    output::{dialect, writer::WriterOptions},
};

use super::parse::Cli;

/// Print the crate version and nothing else.
pub fn version() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// List every registered dialect name on its own line.
pub fn dialects() {
    for name in dialect::names() {
        println!("{name}");
    }
}

/// The whole pipeline: validate options, tally the input, emit the rows.
pub fn count(a: &Cli) -> Result<(), CountError> {
    // Option validation first, so a bad flag never touches a file.
    let opts = WriterOptions::resolve(a.output_delimiter.as_deref(), a.output_dialect.as_deref())?;

    let t_ingest = Instant::now();
    let tally = read_input(a.input.as_deref())?;
    let dur_ingest = t_ingest.elapsed().as_micros();

    let t_emit = Instant::now();
    write_output(a.output.as_deref(), opts, &tally)?;

    if a.debug {
        let total: u64 = tally.values().sum();
        eprintln!(
            "ingest: {dur_ingest} µs   ({total} chars, {} distinct)   emit: {} µs",
            tally.len(),
            t_emit.elapsed().as_micros()
        );
    }
    Ok(())
}

// The input handle is scoped here: dropped before any output is opened.
fn read_input(path: Option<&str>) -> Result<Tally, CountError> {
    match path {
        None => Ok(tally::accumulate(io::stdin().lock())?),
        Some(p) => {
            let file = File::open(p).map_err(|e| UsageError::InputOpen {
                path: p.to_owned(),
                source: e,
            })?;
            Ok(tally::accumulate(file)?)
        }
    }
}

fn write_output(path: Option<&str>, opts: WriterOptions, tally: &Tally) -> Result<(), CountError> {
    match path {
        None => opts.write_rows(io::stdout().lock(), rows(tally)),
        Some(p) => {
            let file = File::create(p).map_err(|e| UsageError::OutputOpen {
                path: p.to_owned(),
                source: e,
            })?;
            opts.write_rows(file, rows(tally))
        }
    }
}
