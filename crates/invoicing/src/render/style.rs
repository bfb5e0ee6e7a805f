//! Stylesheets for the two print layouts.

/// Rules shared by both layouts.
pub(super) const BASE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: Arial, sans-serif; color: #000000; background: white; line-height: 1.2; }
.container { width: 100%; height: 100%; display: flex; flex-direction: column; }
.invoice-title { font-weight: bold; margin: 0; }
.info-section, .details-section { display: flex; gap: 8px; }
.info-box, .details-box { flex: 1; background-color: #f8fafc; }
.info-box h3, .details-box h4 { margin: 0 0 3px 0; font-weight: bold; }
table { width: 100%; border-collapse: collapse; }
table th, table td { text-align: left; border-bottom: 1px solid #c4c4c4; }
table th { font-weight: bold; }
.items td.num, .items th.num { text-align: right; }
.summary { width: 50%; margin-left: auto; }
.summary table td { border: none; }
.summary table td:last-child { text-align: right; }
.summary tr.grand-total { font-weight: bold; }
.notes { border-top: 1px solid #eee; }
.notes h3 { font-weight: bold; color: #333; }
.signature-section { text-align: right; }
.signature-box { display: inline-block; text-align: center; min-width: 100px; }
.signature-space { height: 40px; margin: 5px 0; }
@media print { body { margin: 0; padding: 0; } }
"#;

/// A5 half page, company details in the footer.
pub(super) const COMPACT: &str = r#"
@page { size: A5; margin: 0; }
body { font-size: 10px; width: 148mm; height: 210mm; }
.container { padding: 12mm 10mm; }
.header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px; padding-bottom: 6px; }
.company-info { display: flex; align-items: center; gap: 8px; }
.company-info img { width: 80px; height: 60px; object-fit: contain; }
.invoice-header { text-align: right; }
.invoice-title { font-size: 16px; }
.invoice-number { font-size: 11px; }
.info-section, .details-section { margin-bottom: 8px; font-size: 8px; }
.info-box { padding: 6px; }
.details-box { padding: 5px; }
table { margin-bottom: 8px; font-size: 8px; }
table th, table td { padding: 4px 5px; }
.summary { margin-bottom: 8px; font-size: 9px; }
.summary table td { padding: 2px 5px; }
.summary tr.grand-total { font-size: 11px; }
.notes { margin-bottom: 8px; padding-top: 12px; font-size: 8px; }
.signature-section { margin: 12px 0 8px 0; font-size: 8px; }
.footer { margin-top: auto; font-size: 8px; border-top: 1px dashed #c4c4c4; padding-top: 8px; display: flex; align-items: center; justify-content: space-between; }
.footer img { width: 60px; height: 60px; object-fit: contain; display: block; }
.footer-text { line-height: 1.5; }
"#;

/// A4 full page under a letterhead band.
pub(super) const LETTERHEAD: &str = r#"
@page { size: A4; margin: 0; }
body { font-size: 12px; width: 210mm; min-height: 297mm; }
.container { padding: 18mm 16mm; }
.letterhead { display: flex; align-items: center; gap: 16px; border-bottom: 3px double #000; padding-bottom: 10px; margin-bottom: 14px; }
.letterhead img { width: 90px; height: 90px; object-fit: contain; }
.letterhead h1 { font-size: 20px; margin-bottom: 4px; }
.letterhead p { font-size: 11px; margin: 1px 0; }
.title-row { display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 12px; }
.invoice-title { font-size: 22px; letter-spacing: 2px; }
.invoice-number { font-size: 13px; }
.info-section, .details-section { margin-bottom: 12px; font-size: 11px; }
.info-box, .details-box { padding: 8px; }
table { margin-bottom: 12px; font-size: 11px; }
table th, table td { padding: 6px 8px; }
.summary { margin-bottom: 12px; font-size: 12px; }
.summary table td { padding: 3px 8px; }
.summary tr.grand-total { font-size: 14px; }
.notes { margin-bottom: 12px; padding-top: 12px; font-size: 11px; }
.signature-section { margin-top: 24px; font-size: 11px; }
.signature-space { height: 60px; }
"#;
