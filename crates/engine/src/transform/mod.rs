pub mod computed;
pub mod error;
pub mod mapping;
pub mod pipeline;
pub mod pruner;

use crate::transform::{
    computed::PriceComputes, mapping::FieldMapper, pipeline::TransformPipeline,
    pruner::FieldPruner,
};
use connectors::postgres::sink::PROCESSED_COLUMNS;

/// Builds the fixed reshape pipeline for `books` rows:
/// rename `price` to `original_price`, derive `rounded_price` and
/// `price_category`, then project to the persisted columns.
///
/// The pipeline is single-application by contract: already-reshaped rows lack
/// the `price` column and are rejected by the first step.
pub fn reshape_pipeline() -> TransformPipeline {
    TransformPipeline::new()
        .add_transform(FieldMapper::new("price", "original_price"))
        .add_transform(PriceComputes)
        .add_transform(FieldPruner::new(&PROCESSED_COLUMNS))
}
