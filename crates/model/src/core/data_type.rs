use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Unknown column type: {0}")]
pub struct UnknownDataType(pub String);

/// Column types the pipeline knows how to read and bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    SmallInt,
    Int,
    Long,
    Float,
    Decimal,
    String,
    Date,
    Null,
}

impl TryFrom<&str> for DataType {
    type Error = UnknownDataType;

    /// Maps a Postgres type name (as reported by the wire protocol) to a `DataType`.
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name.to_ascii_lowercase().as_str() {
            "int2" | "smallint" => Ok(DataType::SmallInt),
            "int4" | "integer" => Ok(DataType::Int),
            "int8" | "bigint" => Ok(DataType::Long),
            "float4" | "float8" | "real" | "double precision" => Ok(DataType::Float),
            "numeric" | "decimal" => Ok(DataType::Decimal),
            "text" | "varchar" | "bpchar" | "char" | "name" => Ok(DataType::String),
            "date" => Ok(DataType::Date),
            other => Err(UnknownDataType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_postgres_type_names() {
        assert_eq!(DataType::try_from("int4").unwrap(), DataType::Int);
        assert_eq!(DataType::try_from("int8").unwrap(), DataType::Long);
        assert_eq!(DataType::try_from("NUMERIC").unwrap(), DataType::Decimal);
        assert_eq!(DataType::try_from("varchar").unwrap(), DataType::String);
        assert_eq!(DataType::try_from("date").unwrap(), DataType::Date);
    }

    #[test]
    fn unknown_type_is_an_error() {
        assert!(DataType::try_from("tsvector").is_err());
    }
}
