use crate::{error::DbError, postgres::adapter::PgAdapter, sink::Loader};
use async_trait::async_trait;
use model::records::row::RowData;
use tracing::debug;

pub const DESTINATION_TABLE: &str = "books_processed";

/// The exact persisted projection, in column order. Nothing else is written.
pub const PROCESSED_COLUMNS: [&str; 6] = [
    "book_id",
    "title",
    "original_price",
    "rounded_price",
    "genre",
    "price_category",
];

/// Append-only writer for `books_processed`. Writes in sub-batches no larger
/// than `batch_size` to bound per-statement payload size independent of the
/// caller's batch size.
pub struct PgProcessedSink {
    adapter: PgAdapter,
    batch_size: usize,
}

impl PgProcessedSink {
    pub fn new(adapter: PgAdapter, batch_size: usize) -> Self {
        Self {
            adapter,
            batch_size,
        }
    }
}

#[async_trait]
impl Loader for PgProcessedSink {
    async fn append(&self, rows: &[RowData]) -> Result<usize, DbError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let mut written = 0usize;
        for chunk in rows.chunks(self.batch_size) {
            let sql = insert_statement(DESTINATION_TABLE, &PROCESSED_COLUMNS, chunk.len());
            let mut params = Vec::with_capacity(chunk.len() * PROCESSED_COLUMNS.len());
            for row in chunk {
                for column in PROCESSED_COLUMNS {
                    params.push(row.get_value(column));
                }
            }
            written += self.adapter.execute(&sql, params).await? as usize;
            debug!(rows = chunk.len(), table = DESTINATION_TABLE, "Appended sub-batch");
        }

        Ok(written)
    }
}

/// Columns whose value binds as a Rust i64. The explicit cast keeps the
/// prepared statement's inferred parameter type at int8 even when the
/// destination column is int4; Postgres applies the assignment cast on insert.
fn placeholder_cast(column: &str) -> Option<&'static str> {
    match column {
        "book_id" => Some("int8"),
        _ => None,
    }
}

/// Renders a multi-row parameterized INSERT:
/// `INSERT INTO t (a, b) VALUES ($1, $2), ($3, $4)`.
fn insert_statement(table: &str, columns: &[&str], row_count: usize) -> String {
    let mut sql = String::from("INSERT INTO ");
    sql.push_str(table);
    sql.push_str(" (");
    sql.push_str(&columns.join(", "));
    sql.push_str(") VALUES ");

    let mut placeholder = 1usize;
    for i in 0..row_count {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push('(');
        for (j, column) in columns.iter().enumerate() {
            if j > 0 {
                sql.push_str(", ");
            }
            sql.push('$');
            sql.push_str(&placeholder.to_string());
            if let Some(cast) = placeholder_cast(column) {
                sql.push_str("::");
                sql.push_str(cast);
            }
            placeholder += 1;
        }
        sql.push(')');
    }
    sql
}
