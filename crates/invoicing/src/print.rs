//! Print surfaces: where a rendered document goes to be printed.
//!
//! A surface is acquired once per submission. When it cannot be acquired the
//! failure is reported to the caller; a document is never dropped silently.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use faktur_core::DomainError;

use crate::render::RenderedDocument;

/// The print target could not be opened or written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Dokumen tidak dapat dicetak: {reason}")]
pub struct PrintSurfaceUnavailable {
    pub reason: String,
}

impl PrintSurfaceUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors from submitting an invoice for printing.
///
/// Both are recoverable: the draft is left untouched and can be corrected or
/// resubmitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{}", .0.message())]
    Validation(#[from] DomainError),

    #[error(transparent)]
    PrintSurfaceUnavailable(#[from] PrintSurfaceUnavailable),
}

/// Something that can take a finished document and print it.
pub trait PrintSurface {
    fn print(&mut self, document: &RenderedDocument) -> Result<(), PrintSurfaceUnavailable>;
}

/// Writes the document to an HTML file; opening it in a browser triggers the
/// print dialog.
#[derive(Debug, Clone)]
pub struct HtmlFileSurface {
    path: PathBuf,
}

impl HtmlFileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintSurface for HtmlFileSurface {
    fn print(&mut self, document: &RenderedDocument) -> Result<(), PrintSurfaceUnavailable> {
        fs::write(&self.path, document.html.as_bytes()).map_err(|e| {
            PrintSurfaceUnavailable::new(format!("{}: {e}", self.path.display()))
        })?;
        tracing::info!(path = %self.path.display(), bytes = document.html.len(), "invoice document written");
        Ok(())
    }
}

/// Keeps printed documents in memory, for embedding hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    printed: Vec<RenderedDocument>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn printed(&self) -> &[RenderedDocument] {
        &self.printed
    }
}

impl PrintSurface for MemorySurface {
    fn print(&mut self, document: &RenderedDocument) -> Result<(), PrintSurfaceUnavailable> {
        self.printed.push(document.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Layout;

    fn document() -> RenderedDocument {
        RenderedDocument {
            title: "Invoice #1".to_string(),
            layout: Layout::Compact,
            html: "<html></html>".to_string(),
        }
    }

    #[test]
    fn file_surface_writes_html() {
        let path = std::env::temp_dir().join(format!("faktur-print-{}.html", std::process::id()));
        let mut surface = HtmlFileSurface::new(&path);
        surface.print(&document()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unwritable_file_surface_is_unavailable() {
        let path = std::env::temp_dir()
            .join("faktur-missing-dir")
            .join("nested")
            .join("invoice.html");
        let mut surface = HtmlFileSurface::new(&path);
        let err = surface.print(&document()).unwrap_err();
        assert!(err.to_string().starts_with("Dokumen tidak dapat dicetak:"));
    }

    #[test]
    fn submit_error_shows_bare_validation_message() {
        let err = SubmitError::from(DomainError::validation("Nama pelanggan harus diisi"));
        assert_eq!(err.to_string(), "Nama pelanggan harus diisi");
    }
}
