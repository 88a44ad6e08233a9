use crate::core::data_type::DataType;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    String(String),
    Date(NaiveDate),
    Null,
}

impl Value {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Float(v) => Some(*v as i64),
            Value::String(v) => v.parse::<i64>().ok(),
            Value::Decimal(_) | Value::Date(_) | Value::Null => None,
        }
    }

    /// Numeric view with exact decimal semantics. Floats go through
    /// `Decimal::from_f64_retain`, so a non-finite float yields `None`.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Int(v) => Some(Decimal::from(*v)),
            Value::Float(v) => Decimal::from_f64_retain(*v),
            Value::Decimal(v) => Some(*v),
            Value::String(v) => v.parse::<Decimal>().ok(),
            Value::Date(_) | Value::Null => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::Int(v) => Some(v.to_string()),
            Value::Float(v) => Some(v.to_string()),
            Value::Decimal(v) => Some(v.to_string()),
            Value::String(v) => Some(v.clone()),
            Value::Date(v) => Some(v.to_string()),
            Value::Null => None,
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Value::Int(_) => DataType::Long,
            Value::Float(_) => DataType::Float,
            Value::Decimal(_) => DataType::Decimal,
            Value::String(_) => DataType::String,
            Value::Date(_) => DataType::Date,
            Value::Null => DataType::Null,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_string() {
            Some(s) => write!(f, "{s}"),
            None => write!(f, "NULL"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldValue {
    pub name: String,
    pub value: Option<Value>,
    pub data_type: DataType,
}

impl FieldValue {
    pub fn new(name: &str, value: Value) -> Self {
        let data_type = value.data_type();
        FieldValue {
            name: name.to_string(),
            value: Some(value),
            data_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_view_is_exact() {
        let v = Value::Decimal("499.95".parse().unwrap());
        assert_eq!(v.as_decimal().unwrap().to_string(), "499.95");
    }

    #[test]
    fn int_coerces_to_decimal() {
        assert_eq!(Value::Int(500).as_decimal(), Some(Decimal::from(500)));
    }

    #[test]
    fn null_has_no_numeric_view() {
        assert_eq!(Value::Null.as_i64(), None);
        assert_eq!(Value::Null.as_decimal(), None);
    }

    #[test]
    fn field_value_tracks_data_type() {
        let field = FieldValue::new("price", Value::Decimal(Decimal::new(125, 1)));
        assert_eq!(field.data_type, DataType::Decimal);
    }
}
