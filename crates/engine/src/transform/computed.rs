use crate::transform::{error::TransformError, pipeline::Transform};
use model::{core::value::Value, records::row::RowData};
use rust_decimal::{Decimal, RoundingStrategy};

/// Derives the price columns from `original_price`:
/// - `rounded_price`: rounded to 1 decimal place, half away from zero
///   (`MidpointAwayFromZero` on exact decimals, so 499.95 becomes 500.0);
/// - `price_category`: `"budget"` below 500, `"premium"` at 500 and above.
///
/// Classification reads only `rounded_price`; no other field participates.
pub struct PriceComputes;

const PRICE_COLUMN: &str = "original_price";

impl Transform for PriceComputes {
    fn apply(&self, row: &RowData) -> Result<RowData, TransformError> {
        let field = row
            .get(PRICE_COLUMN)
            .ok_or_else(|| TransformError::MissingColumn(PRICE_COLUMN.to_string()))?;
        let price = field
            .value
            .as_ref()
            .and_then(Value::as_decimal)
            .ok_or_else(|| TransformError::NotNumeric {
                column: PRICE_COLUMN.to_string(),
                value: field.value.clone().unwrap_or(Value::Null),
            })?;

        let rounded = price.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        let category = if rounded < Decimal::new(500, 0) {
            "budget"
        } else {
            "premium"
        };

        let mut new_row = row.clone();
        new_row.set_value("rounded_price", Value::Decimal(rounded));
        new_row.set_value("price_category", Value::String(category.to_string()));
        Ok(new_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::value::FieldValue;

    fn priced_row(price: &str) -> RowData {
        RowData::new(
            "books",
            vec![FieldValue::new(
                "original_price",
                Value::Decimal(price.parse().unwrap()),
            )],
        )
    }

    #[test]
    fn exactly_500_is_premium() {
        let out = PriceComputes.apply(&priced_row("500.00")).unwrap();
        assert_eq!(out.get_value("price_category"), Value::String("premium".into()));
    }

    #[test]
    fn just_below_500_is_budget() {
        let out = PriceComputes.apply(&priced_row("499.90")).unwrap();
        assert_eq!(out.get_value("price_category"), Value::String("budget".into()));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let out = PriceComputes.apply(&priced_row("1.25")).unwrap();
        assert_eq!(
            out.get_value("rounded_price"),
            Value::Decimal("1.3".parse().unwrap())
        );
    }

    #[test]
    fn non_numeric_price_is_an_error() {
        let row = RowData::new(
            "books",
            vec![FieldValue::new("original_price", Value::String("free".into()))],
        );
        assert!(matches!(
            PriceComputes.apply(&row),
            Err(TransformError::NotNumeric { .. })
        ));
    }
}
