use serde::{Deserialize, Serialize};
use std::fmt;

/// Resumption cursor for keyset pagination: the highest `book_id` already
/// consumed in the current run. Process-local, never persisted across runs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Watermark(pub i64);

impl Watermark {
    /// Initial cursor, meaning no rows consumed yet.
    pub const START: Watermark = Watermark(0);

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
