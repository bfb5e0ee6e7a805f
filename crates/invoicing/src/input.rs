//! Lenient numeric input.
//!
//! Form fields arrive as text (or as loosely typed JSON). Nothing here fails:
//! blank, non-numeric or out-of-range input falls back to the safe default
//! for that field.

use core::str::FromStr;

use chrono::NaiveDate;
use faktur_core::{Percent, Rupiah};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::draft::InvoiceDraft;
use crate::header::{CompanyProfile, Customer, InvoiceHeader, Signature, default_due_date, non_blank};
use crate::line_item::LineItem;
use crate::tax::{TaxConfig, TaxPolicy};

/// A line as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemInput {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(default, alias = "price")]
    pub unit_price: Option<Value>,
    #[serde(default)]
    pub days: Option<Value>,
}

impl LineItemInput {
    pub fn into_line_item(self) -> LineItem {
        LineItem::new(
            self.description,
            positive_or_one(&value_text(self.quantity.as_ref())),
            amount_or_zero(&value_text(self.unit_price.as_ref())),
            positive_or_one(&value_text(self.days.as_ref())),
        )
    }
}

/// A whole invoice form as loosely typed JSON.
///
/// Missing header values are filled in by [`InvoiceDraftInput::into_draft`];
/// numeric fields may be numbers or strings and are coerced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraftInput {
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default)]
    pub items: Vec<LineItemInput>,
    #[serde(default)]
    pub ppn_rate: Option<Value>,
    #[serde(default)]
    pub pph_rate: Option<Value>,
    #[serde(default)]
    pub down_payment: Option<Value>,
    #[serde(default)]
    pub policy: Option<TaxPolicy>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub signature: Signature,
    /// Seller details for the letterhead; not part of the draft itself.
    #[serde(default)]
    pub company: Option<CompanyProfile>,
}

impl InvoiceDraftInput {
    /// Build a draft. `invoice_number` is only called when the input has no
    /// number; `default_policy` applies when the input names none.
    pub fn into_draft(
        self,
        today: NaiveDate,
        default_policy: TaxPolicy,
        invoice_number: impl FnOnce() -> String,
    ) -> InvoiceDraft {
        let issue_date = self.issue_date.unwrap_or(today);
        let customer = Customer {
            name: self.customer.name,
            email: self.customer.email.and_then(non_blank),
            phone: self.customer.phone.and_then(non_blank),
            address: self.customer.address.and_then(non_blank),
        };
        let header = InvoiceHeader {
            invoice_number: self
                .invoice_number
                .and_then(non_blank)
                .unwrap_or_else(invoice_number),
            issue_date,
            due_date: self.due_date.unwrap_or_else(|| default_due_date(issue_date)),
            customer,
            notes: self.notes.and_then(non_blank),
            signature: Signature {
                location: self.signature.location.and_then(non_blank),
                name: self.signature.name.and_then(non_blank),
            },
        };
        let tax = TaxConfig::new(
            rate_or_zero(&value_text(self.ppn_rate.as_ref())),
            rate_or_zero(&value_text(self.pph_rate.as_ref())),
            amount_or_zero(&value_text(self.down_payment.as_ref())),
            self.policy.unwrap_or(default_policy),
        );
        let items = self.items.into_iter().map(LineItemInput::into_line_item).collect();
        InvoiceDraft::from_parts(header, items, tax)
    }
}

/// Parse a decimal, accepting plain (`12.5`) and scientific (`1e6`) notation.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Quantity and days: strictly positive, default 1.
pub fn positive_or_one(raw: &str) -> Decimal {
    parse_decimal(raw)
        .filter(|v| *v > Decimal::ZERO)
        .unwrap_or(Decimal::ONE)
}

/// Prices and the down payment: non-negative, default 0.
pub fn amount_or_zero(raw: &str) -> Rupiah {
    parse_decimal(raw)
        .filter(|v| *v >= Decimal::ZERO)
        .map(Rupiah::new)
        .unwrap_or(Rupiah::ZERO)
}

/// Tax rates: default 0, clamped to 0..=100.
pub fn rate_or_zero(raw: &str) -> Percent {
    parse_decimal(raw).map(Percent::clamped).unwrap_or(Percent::ZERO)
}

/// Text form of a loosely typed JSON field. Strings and numbers are kept;
/// anything else reads as blank.
pub fn value_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quantity_and_days_default_to_one() {
        assert_eq!(positive_or_one(""), Decimal::ONE);
        assert_eq!(positive_or_one("abc"), Decimal::ONE);
        assert_eq!(positive_or_one("0"), Decimal::ONE);
        assert_eq!(positive_or_one("-2"), Decimal::ONE);
        assert_eq!(positive_or_one(" 3 "), Decimal::from(3));
        assert_eq!(positive_or_one("1.5"), Decimal::new(15, 1));
    }

    #[test]
    fn amounts_default_to_zero() {
        assert_eq!(amount_or_zero(""), Rupiah::ZERO);
        assert_eq!(amount_or_zero("lima ribu"), Rupiah::ZERO);
        assert_eq!(amount_or_zero("-1000"), Rupiah::ZERO);
        assert_eq!(amount_or_zero("100000"), Rupiah::from(100_000));
        assert_eq!(amount_or_zero("1e6"), Rupiah::from(1_000_000));
    }

    #[test]
    fn rates_default_to_zero_and_clamp() {
        assert_eq!(rate_or_zero("x"), Percent::ZERO);
        assert_eq!(rate_or_zero("11"), Percent::from(11));
        assert_eq!(rate_or_zero("250"), Percent::from(100));
        assert_eq!(rate_or_zero("-5"), Percent::ZERO);
    }

    #[test]
    fn json_values_are_read_as_text() {
        assert_eq!(value_text(Some(&json!(2))), "2");
        assert_eq!(value_text(Some(&json!("2.5"))), "2.5");
        assert_eq!(value_text(Some(&json!(true))), "");
        assert_eq!(value_text(Some(&Value::Null)), "");
        assert_eq!(value_text(None), "");
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    #[test]
    fn draft_input_coerces_loose_json() {
        let input: InvoiceDraftInput = serde_json::from_value(json!({
            "customer": { "name": "Siti", "email": "" },
            "items": [
                { "description": "Sewa Elf", "quantity": "2", "price": 100000, "days": 3 },
                { "description": "Bensin", "quantity": null, "unit_price": "abc" }
            ],
            "ppn_rate": "11",
            "pph_rate": 2,
            "down_payment": false,
            "policy": "withholding-first"
        }))
        .unwrap();

        let draft = input.into_draft(today(), TaxPolicy::DownPaymentFirst, || "INV-GEN".to_string());
        assert_eq!(draft.header().invoice_number, "INV-GEN");
        assert_eq!(draft.header().issue_date, today());
        assert_eq!(draft.header().due_date, NaiveDate::from_ymd_opt(2025, 5, 27).unwrap());
        assert_eq!(draft.header().customer.email, None);
        assert_eq!(draft.items().len(), 2);
        assert_eq!(draft.items()[1].quantity(), Decimal::ONE);
        assert_eq!(draft.items()[1].unit_price(), Rupiah::ZERO);
        assert_eq!(draft.tax().policy(), TaxPolicy::WithholdingFirst);
        assert_eq!(draft.tax().down_payment(), Rupiah::ZERO);
        assert_eq!(draft.totals().total, Rupiah::from(652_680));
    }

    #[test]
    fn explicit_header_values_win() {
        let input: InvoiceDraftInput = serde_json::from_value(json!({
            "invoice_number": "INV-KEEP/BNN/05/2025",
            "issue_date": "2025-05-01",
            "due_date": "2025-06-01"
        }))
        .unwrap();

        let draft = input.into_draft(today(), TaxPolicy::WithholdingFirst, || {
            panic!("number should not be generated")
        });
        assert_eq!(draft.header().invoice_number, "INV-KEEP/BNN/05/2025");
        assert_eq!(draft.header().due_date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(draft.tax().policy(), TaxPolicy::WithholdingFirst);
        assert_eq!(draft.items(), &[LineItem::blank()]);
    }
}
