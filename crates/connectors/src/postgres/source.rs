use crate::{
    error::DbError,
    postgres::{adapter::PgAdapter, row::DbRow},
    source::Extractor,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use model::{
    core::value::Value,
    pagination::cursor::Watermark,
    records::{
        batch::{Batch, FetchOutcome},
        row::RowData,
    },
};
use tracing::debug;

pub const SOURCE_TABLE: &str = "books";

/// Keyset pagination over `books`: rows past the watermark that satisfy the
/// recency cutoff, in cursor order, one page at a time. The ORDER BY is
/// correctness-critical; without it, advancing the watermark to the last id
/// seen could skip rows.
///
/// The watermark binds as int8; the cast keeps the prepared statement's
/// inferred parameter type at int8 even when `book_id` is int4, which would
/// otherwise reject the i64 binding at prepare time.
const FETCH_BOOKS_SQL: &str = "SELECT book_id, title, price, genre, stock_quantity, last_updated \
     FROM books \
     WHERE last_updated >= $1 AND book_id > $2::int8 \
     ORDER BY book_id \
     LIMIT $3";

pub struct PgBookSource {
    adapter: PgAdapter,
}

impl PgBookSource {
    pub fn new(adapter: PgAdapter) -> Self {
        Self { adapter }
    }
}

#[async_trait]
impl Extractor for PgBookSource {
    async fn fetch_batch(
        &self,
        cutoff: NaiveDate,
        watermark: Watermark,
        limit: usize,
    ) -> Result<FetchOutcome, DbError> {
        let params = vec![
            Value::Date(cutoff),
            Value::Int(watermark.value()),
            Value::Int(limit as i64),
        ];
        let rows = self.adapter.query(FETCH_BOOKS_SQL, params).await?;

        if rows.is_empty() {
            return Ok(FetchOutcome::Exhausted);
        }
        debug!(rows = rows.len(), %watermark, "Fetched source rows");

        let rows: Vec<RowData> = rows
            .iter()
            .map(|row| DbRow(row).to_row_data(SOURCE_TABLE))
            .collect();

        // Rows come back ordered by book_id, so the last one is the cursor.
        let next = rows
            .last()
            .and_then(|row| row.get_value("book_id").as_i64())
            .map(Watermark)
            .ok_or_else(|| DbError::RowShape("books row has no readable book_id".to_string()))?;

        Ok(FetchOutcome::Batch(Batch { rows, next }))
    }
}
