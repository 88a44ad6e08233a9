use crate::error::DbError;
use async_trait::async_trait;
use model::records::row::RowData;

/// Append-only write access to the destination table. Existing rows are never
/// updated or deleted; re-loading the same logical row produces a duplicate.
#[async_trait]
pub trait Loader: Send + Sync {
    /// Appends the rows, returning the number written.
    async fn append(&self, rows: &[RowData]) -> Result<usize, DbError>;
}
