use crate::error::DbError;
use async_trait::async_trait;
use chrono::NaiveDate;
use model::{pagination::cursor::Watermark, records::batch::FetchOutcome};

/// Paginated read access to the source table.
///
/// Implementations must return rows with `last_updated >= cutoff` and
/// `book_id > watermark`, ordered by ascending `book_id`, at most `limit` per
/// call. The ascending order is what makes the watermark a valid resumption
/// cursor.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn fetch_batch(
        &self,
        cutoff: NaiveDate,
        watermark: Watermark,
        limit: usize,
    ) -> Result<FetchOutcome, DbError>;
}
