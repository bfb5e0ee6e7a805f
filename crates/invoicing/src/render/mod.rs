//! Printable HTML invoice documents.
//!
//! Rendering is a pure function of the invoice data and the chosen layout.
//! All user-supplied text is escaped before it reaches the markup. Handing the
//! result to a printer is the job of [`crate::print`].

mod dates;
mod escape;
mod style;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::header::{CompanyProfile, InvoiceHeader};
use crate::line_item::LineItem;
use crate::tax::TaxConfig;
use crate::totals::{Effect, SummaryKind, SummaryLine, Totals};

pub use dates::{long_date, short_date};
pub use escape::{html_escape, multiline};

/// Page layout. Both layouts carry the same data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// A5 half page, company details in the footer.
    #[default]
    Compact,
    /// A4 full page under a letterhead.
    Letterhead,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Compact => "compact",
            Layout::Letterhead => "letterhead",
        }
    }

    fn stylesheet(&self) -> &'static str {
        match self {
            Layout::Compact => style::COMPACT,
            Layout::Letterhead => style::LETTERHEAD,
        }
    }
}

impl core::str::FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" | "a5" => Ok(Layout::Compact),
            "letterhead" | "a4" => Ok(Layout::Letterhead),
            other => Err(format!(
                "unknown layout '{other}' (expected compact or letterhead)"
            )),
        }
    }
}

/// Borrowed view of everything that goes on the page.
#[derive(Debug, Clone, Copy)]
pub struct InvoiceView<'a> {
    pub header: &'a InvoiceHeader,
    pub items: &'a [LineItem],
    pub tax: &'a TaxConfig,
    pub totals: &'a Totals,
}

/// A complete, self-contained HTML document ready for a print surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub title: String,
    pub layout: Layout,
    pub html: String,
}

/// Renders invoices with one layout and one seller profile.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    layout: Layout,
    company: CompanyProfile,
}

impl DocumentRenderer {
    pub fn new(layout: Layout, company: CompanyProfile) -> Self {
        Self { layout, company }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    pub fn render(&self, invoice: InvoiceView<'_>) -> RenderedDocument {
        let header = invoice.header;
        let title = format!("Invoice #{}", header.invoice_number);

        let mut html = String::with_capacity(16 * 1024);
        html.push_str("<!DOCTYPE html>\n<html lang=\"id\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str(&format!("<title>{}</title>\n", html_escape(&title)));
        html.push_str("<style>");
        html.push_str(style::BASE);
        html.push_str(self.layout.stylesheet());
        html.push_str("</style>\n</head>\n");
        html.push_str(&format!("<body class=\"{}\">\n<div class=\"container\">\n", self.layout.as_str()));

        match self.layout {
            Layout::Compact => self.push_compact_header(&mut html, header),
            Layout::Letterhead => self.push_letterhead(&mut html, header),
        }
        push_customer(&mut html, header);
        push_details(&mut html, header);
        push_items(&mut html, invoice.items);
        push_summary(&mut html, &invoice.totals.summary(invoice.tax));
        push_notes(&mut html, header);
        push_signature(&mut html, header);
        if self.layout == Layout::Compact {
            self.push_compact_footer(&mut html);
        }

        html.push_str("</div>\n");
        // Opens the platform print dialog as soon as the page is shown.
        html.push_str("<script>\nwindow.onload = function() { window.print(); }\n</script>\n");
        html.push_str("</body>\n</html>\n");

        RenderedDocument {
            title,
            layout: self.layout,
            html,
        }
    }

    fn push_logo(&self, html: &mut String) {
        if let Some(logo) = &self.company.logo {
            html.push_str(&format!("<img src=\"{}\" alt=\"Logo\">", html_escape(logo)));
        }
    }

    fn push_compact_header(&self, html: &mut String, header: &InvoiceHeader) {
        html.push_str("<div class=\"header\">\n<div class=\"company-info\">");
        self.push_logo(html);
        if !self.company.name.is_empty() {
            html.push_str(&format!("<h1>{}</h1>", html_escape(&self.company.name)));
        }
        html.push_str("</div>\n<div class=\"invoice-header\">");
        html.push_str("<div class=\"invoice-title\">INVOICE</div>");
        html.push_str(&format!(
            "<div class=\"invoice-number\">{}</div>",
            html_escape(&header.invoice_number)
        ));
        html.push_str("</div>\n</div>\n");
    }

    fn push_letterhead(&self, html: &mut String, header: &InvoiceHeader) {
        html.push_str("<div class=\"letterhead\">");
        self.push_logo(html);
        html.push_str("<div class=\"letterhead-text\">");
        if !self.company.name.is_empty() {
            html.push_str(&format!("<h1>{}</h1>", html_escape(&self.company.name)));
        }
        self.push_company_contact(html);
        html.push_str("</div></div>\n");

        html.push_str("<div class=\"title-row\">");
        html.push_str("<div class=\"invoice-title\">INVOICE</div>");
        html.push_str(&format!(
            "<div class=\"invoice-number\">{}</div>",
            html_escape(&header.invoice_number)
        ));
        html.push_str("</div>\n");
    }

    fn push_compact_footer(&self, html: &mut String) {
        html.push_str("<div class=\"footer\">");
        self.push_logo(html);
        html.push_str("<div class=\"footer-text\">");
        self.push_company_contact(html);
        html.push_str("</div></div>\n");
    }

    fn push_company_contact(&self, html: &mut String) {
        for line in &self.company.address_lines {
            html.push_str(&format!("<p>{}</p>", html_escape(line)));
        }
        if let Some(phone) = &self.company.phone {
            html.push_str(&format!("<p>Tlp: {}</p>", html_escape(phone)));
        }
        if let Some(email) = &self.company.email {
            html.push_str(&format!("<p>{}</p>", html_escape(email)));
        }
    }
}

fn push_customer(html: &mut String, header: &InvoiceHeader) {
    let customer = &header.customer;
    html.push_str("<div class=\"info-section\"><div class=\"info-box\">");
    html.push_str("<h3>Informasi Pelanggan</h3>");
    html.push_str(&format!("<p><strong>{}</strong></p>", html_escape(&customer.name)));
    if let Some(email) = &customer.email {
        html.push_str(&format!("<p>{}</p>", html_escape(email)));
    }
    if let Some(phone) = &customer.phone {
        html.push_str(&format!("<p>Telepon: {}</p>", html_escape(phone)));
    }
    if let Some(address) = &customer.address {
        html.push_str(&format!("<p>Alamat: {}</p>", multiline(address)));
    }
    html.push_str("</div></div>\n");
}

fn push_details(html: &mut String, header: &InvoiceHeader) {
    let boxes = [
        ("Nomor Invoice", html_escape(&header.invoice_number)),
        ("Tanggal Penerbitan", short_date(header.issue_date)),
        ("Tanggal Jatuh Tempo", short_date(header.due_date)),
    ];
    html.push_str("<div class=\"details-section\">");
    for (label, value) in boxes {
        html.push_str(&format!(
            "<div class=\"details-box\"><h4>{label}</h4><p>{value}</p></div>"
        ));
    }
    html.push_str("</div>\n");
}

fn push_items(html: &mut String, items: &[LineItem]) {
    html.push_str("<table class=\"items\">\n<thead><tr>");
    html.push_str("<th>Deskripsi</th>");
    html.push_str("<th class=\"num\" style=\"width: 12%;\">Jumlah</th>");
    html.push_str("<th class=\"num\" style=\"width: 18%;\">Harga</th>");
    html.push_str("<th class=\"num\" style=\"width: 12%;\">Jumlah Hari</th>");
    html.push_str("<th class=\"num\" style=\"width: 20%;\">Total</th>");
    html.push_str("</tr></thead>\n<tbody>\n");
    for item in items {
        html.push_str(&format!(
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
            html_escape(item.description()),
            number(item.quantity()),
            item.unit_price(),
            number(item.days()),
            item.line_total(),
        ));
    }
    html.push_str("</tbody>\n</table>\n");
}

fn push_summary(html: &mut String, lines: &[SummaryLine]) {
    html.push_str("<div class=\"summary\"><table>\n");
    for line in lines {
        let label = match line.kind {
            SummaryKind::Subtotal => "Subtotal:".to_string(),
            SummaryKind::DownPayment => "DP:".to_string(),
            SummaryKind::Ppn(rate) => format!("PPN ({rate}%):"),
            SummaryKind::Pph(rate) => format!("PPH ({rate}%):"),
            SummaryKind::Total => "Total:".to_string(),
        };
        let amount = match line.effect {
            Effect::Deduction => format!("- {}", line.amount),
            Effect::Neutral | Effect::Addition => line.amount.to_string(),
        };
        if line.kind == SummaryKind::Total {
            html.push_str(&format!(
                "<tr class=\"grand-total\"><td><strong>{label}</strong></td><td><strong>{amount}</strong></td></tr>\n"
            ));
        } else {
            html.push_str(&format!("<tr><td>{label}</td><td>{amount}</td></tr>\n"));
        }
    }
    html.push_str("</table></div>\n");
}

fn push_notes(html: &mut String, header: &InvoiceHeader) {
    if let Some(notes) = &header.notes {
        html.push_str("<div class=\"notes\"><h3>Catatan</h3>");
        html.push_str(&format!("<p>{}</p></div>\n", multiline(notes)));
    }
}

fn push_signature(html: &mut String, header: &InvoiceHeader) {
    let signature = &header.signature;
    if signature.is_empty() {
        return;
    }
    let date = long_date(header.issue_date);
    let place_and_date = match &signature.location {
        Some(location) => format!("{}, {date}", html_escape(location)),
        None => date,
    };
    html.push_str("<div class=\"signature-section\"><div class=\"signature-box\">");
    html.push_str(&format!("<p>{place_and_date}</p>"));
    html.push_str("<div class=\"signature-space\"></div>");
    if let Some(name) = &signature.name {
        html.push_str(&format!("<div class=\"signature-name\">{}</div>", html_escape(name)));
    }
    html.push_str("</div></div>\n");
}

/// Quantities and days: no trailing zeros, Indonesian decimal comma.
fn number(value: Decimal) -> String {
    value.normalize().to_string().replace('.', ",")
}
