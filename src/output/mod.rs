//! Output layer: dialect registry + the delimited writer adapter.

pub mod dialect;
pub mod writer;

pub use dialect::{Dialect, LineTerminator};
pub use writer::{WriterOptions, resolve_delimiter};
