//! Aggregates the "business logic" layer.

pub mod error;
pub mod escape;
pub mod row;
pub mod tally;

// re-export frequently-used items for convenience
pub use error::{CountError, UsageError};
pub use escape::escape;
pub use row::{Row, rows};
pub use tally::{Tally, accumulate};
