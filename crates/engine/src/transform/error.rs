use model::core::value::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Source column `{0}` is missing")]
    MissingColumn(String),

    #[error("Column `{column}` is not numeric: {value}")]
    NotNumeric { column: String, value: Value },
}
