use crate::transform::error::TransformError;
use model::records::row::RowData;
use std::sync::Arc;

/// One reshaping step. Pure: no I/O, no cross-row state.
pub trait Transform: Send + Sync {
    fn apply(&self, row: &RowData) -> Result<RowData, TransformError>;
}

#[derive(Clone, Default)]
pub struct TransformPipeline {
    transforms: Vec<Arc<dyn Transform>>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    pub fn add_transform<T: Transform + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Arc::new(transform));
        self
    }

    pub fn apply(&self, row: &RowData) -> Result<RowData, TransformError> {
        self.transforms
            .iter()
            .try_fold(row.clone(), |acc, transform| transform.apply(&acc))
    }

    /// Applies the pipeline to every row independently. Output has the same
    /// length and order as the input.
    pub fn apply_batch(&self, rows: &[RowData]) -> Result<Vec<RowData>, TransformError> {
        rows.iter().map(|row| self.apply(row)).collect()
    }
}
