use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days between issue date and due date on a fresh draft.
pub const DEFAULT_PAYMENT_TERM_DAYS: u64 = 7;

/// Who the invoice is addressed to. Only the name is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Place and signatory printed under the totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Signature {
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.name.is_none()
    }
}

/// Everything on the invoice except the lines and the money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub customer: Customer,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub signature: Signature,
}

impl InvoiceHeader {
    /// Header for a new invoice: due a week after issue, nothing else filled in.
    pub fn new(invoice_number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            issue_date,
            due_date: default_due_date(issue_date),
            customer: Customer::default(),
            notes: None,
            signature: Signature::default(),
        }
    }
}

pub fn default_due_date(issue_date: NaiveDate) -> NaiveDate {
    issue_date
        .checked_add_days(Days::new(DEFAULT_PAYMENT_TERM_DAYS))
        .unwrap_or(issue_date)
}

/// `None` for blank text, otherwise the text as typed.
pub(crate) fn non_blank(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.trim().is_empty() { None } else { Some(value) }
}

/// Seller details printed in the letterhead and footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address_lines: Vec<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Logo URL or path, used as-is in an `<img src>`.
    #[serde(default)]
    pub logo: Option<String>,
}
