use crate::transform::{error::TransformError, pipeline::Transform};
use model::records::row::RowData;

/// Renames one column, leaving its value untouched. The source column must be
/// present; its absence is an input-contract violation.
pub struct FieldMapper {
    from: String,
    to: String,
}

impl FieldMapper {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl Transform for FieldMapper {
    fn apply(&self, row: &RowData) -> Result<RowData, TransformError> {
        let mut new_row = row.clone();
        let column = new_row
            .field_values
            .iter_mut()
            .find(|col| col.name.eq_ignore_ascii_case(&self.from))
            .ok_or_else(|| TransformError::MissingColumn(self.from.clone()))?;
        column.name = self.to.clone();
        Ok(new_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::value::{FieldValue, Value};

    #[test]
    fn renames_without_touching_the_value() {
        let row = RowData::new(
            "books",
            vec![FieldValue::new("price", Value::Decimal("9.99".parse().unwrap()))],
        );
        let out = FieldMapper::new("price", "original_price").apply(&row).unwrap();
        assert!(out.get("price").is_none());
        assert_eq!(
            out.get_value("original_price"),
            Value::Decimal("9.99".parse().unwrap())
        );
    }

    #[test]
    fn missing_source_column_is_an_error() {
        let row = RowData::new("books", vec![]);
        let err = FieldMapper::new("price", "original_price")
            .apply(&row)
            .unwrap_err();
        assert!(matches!(err, TransformError::MissingColumn(col) if col == "price"));
    }
}
