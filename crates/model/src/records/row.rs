use crate::core::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

/// One row read from or destined for a table, as an ordered list of fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }

    /// Replaces the named field's value in place, or appends a new field when
    /// the row has no such column yet.
    pub fn set_value(&mut self, field: &str, value: Value) {
        if let Some(col) = self
            .field_values
            .iter_mut()
            .find(|col| col.name.eq_ignore_ascii_case(field))
        {
            col.data_type = value.data_type();
            col.value = Some(value);
        } else {
            self.field_values.push(FieldValue::new(field, value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RowData {
        RowData::new(
            "books",
            vec![
                FieldValue::new("book_id", Value::Int(7)),
                FieldValue::new("title", Value::String("Dune".into())),
            ],
        )
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(row().get_value("BOOK_ID").as_i64(), Some(7));
    }

    #[test]
    fn missing_field_reads_as_null() {
        assert_eq!(row().get_value("price"), Value::Null);
    }

    #[test]
    fn set_value_replaces_existing_field() {
        let mut row = row();
        row.set_value("title", Value::String("Dune Messiah".into()));
        assert_eq!(row.field_values.len(), 2);
        assert_eq!(
            row.get_value("title"),
            Value::String("Dune Messiah".into())
        );
    }

    #[test]
    fn set_value_appends_new_field() {
        let mut row = row();
        row.set_value("genre", Value::String("sci-fi".into()));
        assert_eq!(row.field_values.len(), 3);
        assert_eq!(row.field_values[2].name, "genre");
    }
}
