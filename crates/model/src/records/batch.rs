use crate::{pagination::cursor::Watermark, records::row::RowData};

/// One non-empty page of source rows, ordered by ascending `book_id`.
#[derive(Debug, Clone)]
pub struct Batch {
    pub rows: Vec<RowData>,
    /// Resume-from cursor: the id of the last row in this batch.
    pub next: Watermark,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Outcome of one extractor call. Exhaustion is an explicit variant, not an
/// empty-batch sentinel, so the driver loop terminates on a plain match.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Batch(Batch),
    Exhausted,
}
