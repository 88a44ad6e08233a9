use crate::transform::error::TransformError;
use connectors::error::DbError;
use thiserror::Error;

/// Run-fatal failures of the ETL loop. Every error is caught at its
/// component's boundary and wrapped here; there is no internal retry.
#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Extraction failed: {0}")]
    Extraction(#[source] DbError),

    #[error("Transformation failed: {0}")]
    Transform(#[from] TransformError),

    #[error("Load failed: {0}")]
    Load(#[source] DbError),
}
