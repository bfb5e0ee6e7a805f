//! `faktur` command: turn an invoice form (JSON) into a printable HTML file.

pub mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use faktur_invoicing::{DocumentRenderer, HtmlFileSurface, InvoiceDraftInput};

pub use config::Config;

pub const USAGE: &str = "usage: faktur <invoice.json> [output.html]";

/// Outcome of one run, mapped to the process exit code by `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The document was written to this path.
    Printed(PathBuf),
    /// The invoice was rejected or could not be printed; the message is for
    /// the user.
    Rejected(String),
}

/// Read, compute, validate, render and write one invoice.
///
/// Unreadable or malformed input is an `Err`; a rejected invoice is an
/// `Ok(Outcome::Rejected)`.
pub fn run(input: &Path, output: Option<&Path>, config: &Config, today: NaiveDate) -> anyhow::Result<Outcome> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let mut form: InvoiceDraftInput = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    let company = form.company.take().unwrap_or_default();
    let number_format = &config.number_format;
    let draft = form.into_draft(today, config.policy, || {
        number_format.generate(&mut rand::thread_rng(), today)
    });

    let totals = draft.totals();
    tracing::info!(
        invoice = %draft.header().invoice_number,
        items = draft.items().len(),
        policy = totals.policy.as_str(),
        subtotal = %totals.subtotal,
        ppn = %totals.ppn_amount,
        pph = %totals.pph_amount,
        total = %totals.total,
        "totals computed"
    );

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input, &draft.header().invoice_number),
    };
    let renderer = DocumentRenderer::new(config.layout, company);
    let mut surface = HtmlFileSurface::new(&output);

    match draft.submit(&renderer, &mut surface) {
        Ok(_) => Ok(Outcome::Printed(output)),
        Err(e) => Ok(Outcome::Rejected(e.to_string())),
    }
}

/// `invoice-INV-AB12-BNN-03-2025.html` next to the input file.
pub fn default_output_path(input: &Path, invoice_number: &str) -> PathBuf {
    let stem: String = invoice_number
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
        .collect();
    let file_name = format!("invoice-{stem}.html");
    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("faktur-cli-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()
    }

    #[test]
    fn output_path_is_derived_from_invoice_number() {
        let path = default_output_path(Path::new("/tmp/forms/a.json"), "INV-AB12/BNN/03/2025");
        assert_eq!(path, PathBuf::from("/tmp/forms/invoice-INV-AB12-BNN-03-2025.html"));
    }

    #[test]
    fn valid_form_is_written() {
        let dir = scratch_dir("ok");
        let input = dir.join("form.json");
        fs::write(
            &input,
            r#"{
                "invoice_number": "INV-TEST/BNN/02/2025",
                "customer": { "name": "Budi" },
                "items": [{ "description": "Sewa", "quantity": 2, "price": 100000, "days": 3 }],
                "ppn_rate": 11, "pph_rate": 2,
                "company": { "name": "CV Uji" }
            }"#,
        )
        .unwrap();

        let outcome = run(&input, None, &Config::default(), today()).unwrap();
        let expected = dir.join("invoice-INV-TEST-BNN-02-2025.html");
        assert_eq!(outcome, Outcome::Printed(expected.clone()));
        let html = fs::read_to_string(&expected).unwrap();
        assert!(html.contains("Rp 678.000"));
        assert!(html.contains("CV Uji"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn invalid_form_is_rejected_without_output() {
        let dir = scratch_dir("rejected");
        let input = dir.join("form.json");
        let output = dir.join("out.html");
        fs::write(&input, r#"{ "items": [{ "description": "Sewa" }] }"#).unwrap();

        let outcome = run(&input, Some(output.as_path()), &Config::default(), today()).unwrap();
        assert_eq!(outcome, Outcome::Rejected("Nama pelanggan harus diisi".to_string()));
        assert!(!output.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = scratch_dir("malformed");
        let input = dir.join("form.json");
        fs::write(&input, "{ not json").unwrap();
        let err = run(&input, None, &Config::default(), today()).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse"));
        let _ = fs::remove_dir_all(&dir);
    }
}
