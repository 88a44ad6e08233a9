/// Aggregate counts for one run: created at run start, incremented per batch,
/// reported once at run end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_processed: usize,
    pub batches: usize,
}

impl RunSummary {
    pub fn record_batch(&mut self, rows: usize) {
        self.rows_processed += rows;
        self.batches += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.rows_processed == 0
    }
}
