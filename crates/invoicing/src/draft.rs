//! Editable invoice state.
//!
//! The draft is plain data plus cached totals. Every edit goes through
//! [`InvoiceDraft::apply`], which changes one field and recomputes the totals
//! before returning, so the totals are always those of the current data.

use chrono::NaiveDate;

use faktur_core::{DomainError, DomainResult};

use crate::header::{InvoiceHeader, non_blank};
use crate::input;
use crate::line_item::LineItem;
use crate::print::{PrintSurface, SubmitError};
use crate::render::{DocumentRenderer, InvoiceView, RenderedDocument};
use crate::tax::{TaxConfig, TaxPolicy};
use crate::totals::{Totals, calculate};
use crate::validation::validate;

/// Editable column of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Description,
    Quantity,
    UnitPrice,
    Days,
}

/// One user edit. Numeric values arrive as raw text and are coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    SetInvoiceNumber(String),
    SetIssueDate(NaiveDate),
    SetDueDate(NaiveDate),
    SetCustomerName(String),
    SetCustomerEmail(String),
    SetCustomerPhone(String),
    SetCustomerAddress(String),
    SetNotes(String),
    SetSignatureLocation(String),
    SetSignatureName(String),
    AddItem,
    RemoveItem(usize),
    UpdateItem {
        index: usize,
        field: ItemField,
        value: String,
    },
    SetPpnRate(String),
    SetPphRate(String),
    SetDownPayment(String),
    SetPolicy(TaxPolicy),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    header: InvoiceHeader,
    items: Vec<LineItem>,
    tax: TaxConfig,
    totals: Totals,
}

impl InvoiceDraft {
    /// A fresh draft with a single blank line.
    pub fn new(invoice_number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self::from_parts(
            InvoiceHeader::new(invoice_number, issue_date),
            vec![LineItem::blank()],
            TaxConfig::default(),
        )
    }

    /// Assemble a draft from existing data. An empty item list gets one blank
    /// line, matching a fresh form.
    pub fn from_parts(header: InvoiceHeader, mut items: Vec<LineItem>, tax: TaxConfig) -> Self {
        if items.is_empty() {
            items.push(LineItem::blank());
        }
        let totals = calculate(&items, &tax);
        Self {
            header,
            items,
            tax,
            totals,
        }
    }

    pub fn header(&self) -> &InvoiceHeader {
        &self.header
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn tax(&self) -> &TaxConfig {
        &self.tax
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn view(&self) -> InvoiceView<'_> {
        InvoiceView {
            header: &self.header,
            items: &self.items,
            tax: &self.tax,
            totals: &self.totals,
        }
    }

    /// Apply one edit and recompute the totals.
    ///
    /// A rejected edit leaves the draft exactly as it was.
    pub fn apply(&mut self, edit: DraftEdit) -> DomainResult<()> {
        tracing::debug!(?edit, "applying draft edit");

        match edit {
            DraftEdit::SetInvoiceNumber(number) => self.header.invoice_number = number,
            DraftEdit::SetIssueDate(date) => self.header.issue_date = date,
            DraftEdit::SetDueDate(date) => self.header.due_date = date,
            DraftEdit::SetCustomerName(name) => self.header.customer.name = name,
            DraftEdit::SetCustomerEmail(email) => self.header.customer.email = non_blank(email),
            DraftEdit::SetCustomerPhone(phone) => self.header.customer.phone = non_blank(phone),
            DraftEdit::SetCustomerAddress(address) => {
                self.header.customer.address = non_blank(address)
            }
            DraftEdit::SetNotes(notes) => self.header.notes = non_blank(notes),
            DraftEdit::SetSignatureLocation(location) => {
                self.header.signature.location = non_blank(location)
            }
            DraftEdit::SetSignatureName(name) => self.header.signature.name = non_blank(name),
            DraftEdit::AddItem => self.items.push(LineItem::blank()),
            DraftEdit::RemoveItem(index) => {
                self.ensure_index(index)?;
                if self.items.len() == 1 {
                    return Err(DomainError::invariant("Item terakhir tidak dapat dihapus"));
                }
                self.items.remove(index);
            }
            DraftEdit::UpdateItem { index, field, value } => {
                self.ensure_index(index)?;
                let item = &mut self.items[index];
                match field {
                    ItemField::Description => item.set_description(value),
                    ItemField::Quantity => item.set_quantity(input::positive_or_one(&value)),
                    ItemField::UnitPrice => item.set_unit_price(input::amount_or_zero(&value)),
                    ItemField::Days => item.set_days(input::positive_or_one(&value)),
                }
            }
            DraftEdit::SetPpnRate(value) => self.tax.set_ppn_rate(input::rate_or_zero(&value)),
            DraftEdit::SetPphRate(value) => self.tax.set_pph_rate(input::rate_or_zero(&value)),
            DraftEdit::SetDownPayment(value) => {
                self.tax.set_down_payment(input::amount_or_zero(&value))
            }
            DraftEdit::SetPolicy(policy) => self.tax.set_policy(policy),
        }

        self.totals = calculate(&self.items, &self.tax);
        Ok(())
    }

    /// Validate, render once and hand the document to `surface`.
    ///
    /// Nothing is rendered when validation fails, and the draft is never
    /// modified.
    pub fn submit<S: PrintSurface + ?Sized>(
        &self,
        renderer: &DocumentRenderer,
        surface: &mut S,
    ) -> Result<RenderedDocument, SubmitError> {
        if let Err(e) = validate(&self.header, &self.items) {
            tracing::warn!(invoice = %self.header.invoice_number, error = %e, "invoice rejected");
            return Err(e.into());
        }

        let document = renderer.render(self.view());
        if let Err(e) = surface.print(&document) {
            tracing::warn!(invoice = %self.header.invoice_number, error = %e, "print surface unavailable");
            return Err(e.into());
        }

        tracing::info!(
            invoice = %self.header.invoice_number,
            layout = renderer.layout().as_str(),
            policy = self.tax.policy().as_str(),
            total = %self.totals.total,
            "invoice submitted for printing"
        );
        Ok(document)
    }

    fn ensure_index(&self, index: usize) -> DomainResult<()> {
        if index >= self.items.len() {
            return Err(DomainError::invariant(format!(
                "Item {index} tidak ditemukan (draft berisi {} item)",
                self.items.len()
            )));
        }
        Ok(())
    }
}
