use crate::{
    error::EtlError, settings::EtlSettings, summary::RunSummary, transform,
    transform::pipeline::TransformPipeline,
};
use chrono::NaiveDate;
use connectors::{sink::Loader, source::Extractor};
use model::{pagination::cursor::Watermark, records::batch::FetchOutcome};
use std::sync::Arc;
use tracing::info;

/// Drives the extract-transform-load loop for one run.
///
/// Owns the watermark and the running totals; no other component reads or
/// writes them. Each batch is fully extracted, transformed, and loaded before
/// the next fetch, so at most one batch is in flight and peak memory stays
/// bounded by the batch size. The watermark strictly increases on every
/// non-empty batch, which bounds the loop at
/// `ceil(matching_rows / batch_size)` iterations.
pub struct EtlRunner {
    extractor: Arc<dyn Extractor>,
    loader: Arc<dyn Loader>,
    pipeline: TransformPipeline,
    batch_size: usize,
}

impl EtlRunner {
    pub fn new(
        extractor: Arc<dyn Extractor>,
        loader: Arc<dyn Loader>,
        settings: &EtlSettings,
    ) -> Self {
        Self {
            extractor,
            loader,
            pipeline: transform::reshape_pipeline(),
            batch_size: settings.batch_size,
        }
    }

    pub async fn run(&self, cutoff: NaiveDate) -> Result<RunSummary, EtlError> {
        let mut watermark = Watermark::START;
        let mut summary = RunSummary::default();
        info!(%cutoff, batch_size = self.batch_size, "Starting ETL run");

        loop {
            let outcome = self
                .extractor
                .fetch_batch(cutoff, watermark, self.batch_size)
                .await
                .map_err(EtlError::Extraction)?;

            let batch = match outcome {
                FetchOutcome::Exhausted => break,
                FetchOutcome::Batch(batch) => batch,
            };

            let reshaped = self.pipeline.apply_batch(&batch.rows)?;
            let written = self
                .loader
                .append(&reshaped)
                .await
                .map_err(EtlError::Load)?;

            watermark = batch.next;
            summary.record_batch(written);
            info!(rows = written, %watermark, "Batch loaded");
        }

        if summary.is_empty() {
            info!("No new rows");
        } else {
            info!(
                rows = summary.rows_processed,
                batches = summary.batches,
                "ETL run complete"
            );
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use connectors::error::DbError;
    use model::{
        core::value::{FieldValue, Value},
        records::{batch::Batch, row::RowData},
    };
    use std::sync::Mutex;

    fn book_row(id: i64, price: &str, updated: &str) -> RowData {
        RowData::new(
            "books",
            vec![
                FieldValue::new("book_id", Value::Int(id)),
                FieldValue::new("title", Value::String(format!("Book {id}"))),
                FieldValue::new("price", Value::Decimal(price.parse().unwrap())),
                FieldValue::new("genre", Value::String("fiction".into())),
                FieldValue::new("stock_quantity", Value::Int(5)),
                FieldValue::new("last_updated", Value::Date(updated.parse().unwrap())),
            ],
        )
    }

    fn cutoff() -> NaiveDate {
        "2025-01-01".parse().unwrap()
    }

    /// In-memory source table honoring the extractor contract: rows past the
    /// watermark that satisfy the cutoff, ascending by id, `limit` at a time.
    struct TableSource {
        rows: Vec<RowData>,
        calls: Mutex<Vec<Watermark>>,
    }

    impl TableSource {
        fn new(rows: Vec<RowData>) -> Self {
            Self {
                rows,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Extractor for TableSource {
        async fn fetch_batch(
            &self,
            cutoff: NaiveDate,
            watermark: Watermark,
            limit: usize,
        ) -> Result<FetchOutcome, DbError> {
            self.calls.lock().unwrap().push(watermark);
            let page: Vec<RowData> = self
                .rows
                .iter()
                .filter(|row| {
                    let id = row.get_value("book_id").as_i64().unwrap();
                    let updated = match row.get_value("last_updated") {
                        Value::Date(d) => d,
                        other => panic!("unexpected last_updated: {other:?}"),
                    };
                    id > watermark.value() && updated >= cutoff
                })
                .take(limit)
                .cloned()
                .collect();

            match page.last() {
                None => Ok(FetchOutcome::Exhausted),
                Some(last) => {
                    let next = Watermark(last.get_value("book_id").as_i64().unwrap());
                    Ok(FetchOutcome::Batch(Batch { rows: page, next }))
                }
            }
        }
    }

    struct RecordingSink {
        written: Mutex<Vec<RowData>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                written: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Loader for RecordingSink {
        async fn append(&self, rows: &[RowData]) -> Result<usize, DbError> {
            self.written.lock().unwrap().extend_from_slice(rows);
            Ok(rows.len())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl Loader for FailingSink {
        async fn append(&self, _rows: &[RowData]) -> Result<usize, DbError> {
            Err(DbError::RowShape("disk full".into()))
        }
    }

    struct FailingSource;

    #[async_trait]
    impl Extractor for FailingSource {
        async fn fetch_batch(
            &self,
            _cutoff: NaiveDate,
            _watermark: Watermark,
            _limit: usize,
        ) -> Result<FetchOutcome, DbError> {
            Err(DbError::RowShape("connection reset".into()))
        }
    }

    fn runner(source: Arc<TableSource>, sink: Arc<RecordingSink>, batch_size: usize) -> EtlRunner {
        EtlRunner::new(source, sink, &EtlSettings { batch_size })
    }

    #[tokio::test]
    async fn two_rows_land_reshaped_in_the_destination() {
        let source = Arc::new(TableSource::new(vec![
            book_row(1, "499.95", "2025-02-01"),
            book_row(2, "1500.0", "2025-03-01"),
        ]));
        let sink = Arc::new(RecordingSink::new());
        let summary = runner(source, sink.clone(), 1000)
            .run(cutoff())
            .await
            .unwrap();

        assert_eq!(summary.rows_processed, 2);
        let written = sink.written.lock().unwrap();
        assert_eq!(written.len(), 2);

        let first = &written[0];
        assert_eq!(first.get_value("book_id").as_i64(), Some(1));
        assert_eq!(
            first.get_value("original_price"),
            Value::Decimal("499.95".parse().unwrap())
        );
        assert_eq!(
            first.get_value("rounded_price"),
            Value::Decimal("500.0".parse().unwrap())
        );
        assert_eq!(first.get_value("price_category"), Value::String("premium".into()));

        let second = &written[1];
        assert_eq!(
            second.get_value("rounded_price"),
            Value::Decimal("1500.0".parse().unwrap())
        );
        assert_eq!(second.get_value("price_category"), Value::String("premium".into()));
    }

    #[tokio::test]
    async fn no_matching_rows_writes_nothing() {
        let source = Arc::new(TableSource::new(vec![book_row(1, "9.99", "2024-01-01")]));
        let sink = Arc::new(RecordingSink::new());
        let summary = runner(source.clone(), sink.clone(), 1000)
            .run(cutoff())
            .await
            .unwrap();

        assert!(summary.is_empty());
        assert_eq!(summary.batches, 0);
        assert!(sink.written.lock().unwrap().is_empty());
        assert_eq!(source.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn chunk_plus_one_rows_take_two_full_fetches_and_a_terminating_one() {
        let rows: Vec<RowData> = (1..=5)
            .map(|id| book_row(id, "10.00", "2025-02-01"))
            .collect();
        let source = Arc::new(TableSource::new(rows));
        let sink = Arc::new(RecordingSink::new());
        let summary = runner(source.clone(), sink.clone(), 4)
            .run(cutoff())
            .await
            .unwrap();

        assert_eq!(summary.rows_processed, 5);
        assert_eq!(summary.batches, 2);

        // Three extractor calls: 4 rows, 1 row, exhausted. The watermark
        // passed to each call is the id of the previous batch's last row.
        let calls = source.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[Watermark(0), Watermark(4), Watermark(5)]);
    }

    #[tokio::test]
    async fn watermark_strictly_increases_and_never_rereads_rows() {
        let rows: Vec<RowData> = (1..=9)
            .map(|id| book_row(id, "1.00", "2025-02-01"))
            .collect();
        let source = Arc::new(TableSource::new(rows));
        let sink = Arc::new(RecordingSink::new());
        runner(source.clone(), sink.clone(), 3)
            .run(cutoff())
            .await
            .unwrap();

        let calls = source.calls.lock().unwrap();
        assert!(calls.windows(2).all(|w| w[0] < w[1]));

        let written = sink.written.lock().unwrap();
        let ids: Vec<i64> = written
            .iter()
            .map(|r| r.get_value("book_id").as_i64().unwrap())
            .collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn extraction_failure_is_fatal() {
        let result = EtlRunner::new(
            Arc::new(FailingSource),
            Arc::new(RecordingSink::new()),
            &EtlSettings::default(),
        )
        .run(cutoff())
        .await;

        assert!(matches!(result, Err(EtlError::Extraction(_))));
    }

    #[tokio::test]
    async fn load_failure_is_fatal() {
        let source = Arc::new(TableSource::new(vec![book_row(1, "1.00", "2025-02-01")]));
        let result = EtlRunner::new(
            source,
            Arc::new(FailingSink),
            &EtlSettings::default(),
        )
        .run(cutoff())
        .await;

        assert!(matches!(result, Err(EtlError::Load(_))));
    }
}
