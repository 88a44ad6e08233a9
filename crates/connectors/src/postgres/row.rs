use chrono::NaiveDate;
use model::{
    core::{
        data_type::DataType,
        value::{FieldValue, Value},
    },
    records::row::RowData,
};
use rust_decimal::Decimal;
use tokio_postgres::Row as PgRow;
use tracing::warn;

/// Wraps a driver row for conversion into the dynamic record model.
pub struct DbRow<'a>(pub &'a PgRow);

impl DbRow<'_> {
    pub fn to_row_data(&self, entity: &str) -> RowData {
        let fields = self
            .0
            .columns()
            .iter()
            .map(|column| {
                let type_name = column.type_().name();
                let data_type = DataType::try_from(type_name).unwrap_or_else(|_| {
                    warn!(column = column.name(), type_name, "Unknown column type, reading as text");
                    DataType::String
                });

                FieldValue {
                    name: column.name().to_string(),
                    value: self.get_value(&data_type, column.name()),
                    data_type,
                }
            })
            .collect();

        RowData::new(entity, fields)
    }

    pub fn get_value(&self, data_type: &DataType, name: &str) -> Option<Value> {
        match data_type {
            DataType::SmallInt => self.try_get_i16(name).map(|v| Value::Int(v as i64)),
            DataType::Int => self.try_get_i32(name).map(|v| Value::Int(v as i64)),
            DataType::Long => self.try_get_i64(name).map(Value::Int),
            DataType::Float => self.try_get_f64(name).map(Value::Float),
            DataType::Decimal => self.try_get_decimal(name).map(Value::Decimal),
            DataType::String => self.try_get_string(name).map(Value::String),
            DataType::Date => self.try_get_date(name).map(Value::Date),
            DataType::Null => None,
        }
    }

    fn try_get_i16(&self, name: &str) -> Option<i16> {
        self.0.try_get::<_, i16>(name).ok()
    }

    fn try_get_i32(&self, name: &str) -> Option<i32> {
        self.0.try_get::<_, i32>(name).ok()
    }

    fn try_get_i64(&self, name: &str) -> Option<i64> {
        self.0.try_get::<_, i64>(name).ok()
    }

    fn try_get_f64(&self, name: &str) -> Option<f64> {
        self.0.try_get::<_, f64>(name).ok()
    }

    fn try_get_decimal(&self, name: &str) -> Option<Decimal> {
        self.0.try_get::<_, Decimal>(name).ok()
    }

    fn try_get_string(&self, name: &str) -> Option<String> {
        self.0.try_get::<_, String>(name).ok()
    }

    fn try_get_date(&self, name: &str) -> Option<NaiveDate> {
        self.0.try_get::<_, NaiveDate>(name).ok()
    }
}
