use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use faktur_core::{Rupiah, ValueObject};

/// One billed line: `quantity × unit_price × days`.
///
/// `days` is the rental/duration multiplier; for plain goods it stays at 1.
/// Fields are only reachable through [`LineItem::new`] and the setters, so a
/// line total can never go negative. Deserialization goes through the same
/// constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LineItemRecord")]
pub struct LineItem {
    description: String,
    quantity: Decimal,
    unit_price: Rupiah,
    days: Decimal,
}

/// Wire shape of a line; missing factors default like a blank form row.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LineItemRecord {
    description: String,
    quantity: Option<Decimal>,
    unit_price: Option<Rupiah>,
    days: Option<Decimal>,
}

impl From<LineItemRecord> for LineItem {
    fn from(record: LineItemRecord) -> Self {
        LineItem::new(
            record.description,
            record.quantity.unwrap_or(Decimal::ONE),
            record.unit_price.unwrap_or(Rupiah::ZERO),
            record.days.unwrap_or(Decimal::ONE),
        )
    }
}

impl ValueObject for LineItem {}

impl Default for LineItem {
    fn default() -> Self {
        Self::blank()
    }
}

fn positive_or_one(value: Decimal) -> Decimal {
    if value > Decimal::ZERO { value } else { Decimal::ONE }
}

impl LineItem {
    /// A fresh form row: no description, one unit, free, one day.
    pub fn blank() -> Self {
        Self {
            description: String::new(),
            quantity: Decimal::ONE,
            unit_price: Rupiah::ZERO,
            days: Decimal::ONE,
        }
    }

    /// Build a line, replacing non-positive multipliers with 1 and a negative
    /// price with 0.
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Rupiah,
        days: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            quantity: positive_or_one(quantity),
            unit_price: unit_price.non_negative(),
            days: positive_or_one(days),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Strictly positive.
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Never negative.
    pub fn unit_price(&self) -> Rupiah {
        self.unit_price
    }

    /// Strictly positive.
    pub fn days(&self) -> Decimal {
        self.days
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = positive_or_one(quantity);
    }

    pub fn set_unit_price(&mut self, unit_price: Rupiah) {
        self.unit_price = unit_price.non_negative();
    }

    pub fn set_days(&mut self, days: Decimal) {
        self.days = positive_or_one(days);
    }

    pub fn line_total(&self) -> Rupiah {
        self.unit_price.times(self.quantity).times(self.days)
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_multiplies_all_three_factors() {
        let item = LineItem::new("Sewa Avanza", Decimal::from(2), Rupiah::from(100_000), Decimal::from(3));
        assert_eq!(item.line_total(), Rupiah::from(600_000));
    }

    #[test]
    fn constructor_sanitizes_factors() {
        let item = LineItem::new("x", Decimal::ZERO, Rupiah::new(Decimal::from(-5)), Decimal::from(-1));
        assert_eq!(item.quantity(), Decimal::ONE);
        assert_eq!(item.days(), Decimal::ONE);
        assert_eq!(item.unit_price(), Rupiah::ZERO);
        assert_eq!(item.line_total(), Rupiah::ZERO);
    }

    #[test]
    fn setters_sanitize_like_the_constructor() {
        let mut item = LineItem::blank();
        item.set_quantity(Decimal::from(-4));
        item.set_days(Decimal::ZERO);
        item.set_unit_price(Rupiah::new(Decimal::from(-250_000)));
        assert_eq!(item.quantity(), Decimal::ONE);
        assert_eq!(item.days(), Decimal::ONE);
        assert_eq!(item.unit_price(), Rupiah::ZERO);
    }

    #[test]
    fn deserialized_lines_are_sanitized() {
        let item: LineItem = serde_json::from_str(
            r#"{ "description": "Sewa", "quantity": -3, "unit_price": "-100000", "days": 0 }"#,
        )
        .unwrap();
        assert_eq!(item.quantity(), Decimal::ONE);
        assert_eq!(item.days(), Decimal::ONE);
        assert_eq!(item.unit_price(), Rupiah::ZERO);
        assert!(!item.line_total().amount().is_sign_negative());

        let sparse: LineItem = serde_json::from_str(r#"{ "description": "Driver" }"#).unwrap();
        assert_eq!(sparse, LineItem::new("Driver", Decimal::ONE, Rupiah::ZERO, Decimal::ONE));
    }

    #[test]
    fn whitespace_only_description_does_not_count() {
        let mut item = LineItem::blank();
        assert!(!item.has_description());
        item.set_description("   \n");
        assert!(!item.has_description());
        item.set_description(" Driver ");
        assert!(item.has_description());
    }
}
