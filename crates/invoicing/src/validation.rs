use faktur_core::{DomainError, DomainResult};

use crate::header::InvoiceHeader;
use crate::line_item::LineItem;

/// Check that an invoice is complete enough to be printed.
///
/// Stops at the first problem; the error message is meant for the person
/// filling in the form.
pub fn validate(header: &InvoiceHeader, items: &[LineItem]) -> DomainResult<()> {
    if header.customer.name.trim().is_empty() {
        return Err(DomainError::validation("Nama pelanggan harus diisi"));
    }

    if items.is_empty() {
        return Err(DomainError::validation(
            "Invoice harus memiliki minimal satu item",
        ));
    }

    if !items.iter().all(LineItem::has_description) {
        return Err(DomainError::validation(
            "Semua item harus memiliki deskripsi",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn header(customer: &str) -> InvoiceHeader {
        let mut header = InvoiceHeader::new(
            "INV-0001/BNN/01/2025",
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        );
        header.customer.name = customer.to_string();
        header
    }

    fn item(description: &str) -> LineItem {
        let mut item = LineItem::blank();
        item.set_description(description);
        item
    }

    #[test]
    fn complete_invoice_passes() {
        assert_eq!(validate(&header("Budi"), &[item("Sewa mobil")]), Ok(()));
    }

    #[test]
    fn blank_customer_name_is_rejected_first() {
        let err = validate(&header("   "), &[item("")]).unwrap_err();
        assert_eq!(err, DomainError::validation("Nama pelanggan harus diisi"));
    }

    #[test]
    fn missing_item_description_is_rejected() {
        let err = validate(&header("Budi"), &[item("Sewa"), item(" ")]).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("deskripsi") => {}
            _ => panic!("Expected validation error for blank description"),
        }
    }

    #[test]
    fn invoice_without_items_is_rejected() {
        assert!(validate(&header("Budi"), &[]).is_err());
    }
}
