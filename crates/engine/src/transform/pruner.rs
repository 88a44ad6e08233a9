use crate::transform::{error::TransformError, pipeline::Transform};
use model::records::row::RowData;

/// Projects a row to a fixed list of columns, in the listed order. Transient
/// columns (the renamed-away `price`, `stock_quantity`, `last_updated`) are
/// dropped here.
pub struct FieldPruner {
    keep: Vec<String>,
}

impl FieldPruner {
    pub fn new(keep: &[&str]) -> Self {
        Self {
            keep: keep.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl Transform for FieldPruner {
    fn apply(&self, row: &RowData) -> Result<RowData, TransformError> {
        let mut fields = Vec::with_capacity(self.keep.len());
        for name in &self.keep {
            let field = row
                .get(name)
                .ok_or_else(|| TransformError::MissingColumn(name.clone()))?;
            fields.push(field.clone());
        }
        Ok(RowData::new(&row.entity, fields))
    }
}
