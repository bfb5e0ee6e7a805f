//! Invoicing domain module.
//!
//! Totals calculation, validation and printable document rendering for
//! Indonesian Rupiah invoices, implemented as deterministic functions over
//! plain data. The only side effect lives behind [`print::PrintSurface`].

pub mod draft;
pub mod header;
pub mod input;
pub mod line_item;
pub mod number;
pub mod print;
pub mod render;
pub mod tax;
pub mod totals;
pub mod validation;

pub use draft::{DraftEdit, InvoiceDraft, ItemField};
pub use header::{CompanyProfile, Customer, InvoiceHeader, Signature};
pub use input::{InvoiceDraftInput, LineItemInput};
pub use line_item::LineItem;
pub use number::InvoiceNumberFormat;
pub use print::{HtmlFileSurface, MemorySurface, PrintSurface, PrintSurfaceUnavailable, SubmitError};
pub use render::{DocumentRenderer, InvoiceView, Layout, RenderedDocument};
pub use tax::{TaxConfig, TaxPolicy};
pub use totals::{Effect, SummaryKind, SummaryLine, Totals, calculate};
pub use validation::validate;
