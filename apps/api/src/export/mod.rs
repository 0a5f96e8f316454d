//! Export adapters: print snapshot and word-processor download.
//!
//! Every export goes through [`run_gated`]: validation first, then a fresh render,
//! then the adapter. A failed validation returns the report and leaves the
//! exporter untouched.

pub mod handlers;
pub mod print;
pub mod word;

use tracing::{info, warn};

use crate::form::dates::YearMonth;
use crate::form::validation::ValidationReport;
use crate::form::FormState;
use crate::render::{render_document, RenderedDocument};

pub use print::PrintExporter;
pub use word::WordExporter;

/// A finished export, ready to hand to the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    pub content_type: &'static str,
    /// Set for downloads; `None` for documents shown inline.
    pub file_name: Option<String>,
    pub body: String,
}

/// Turns a rendered snapshot into an output document.
///
/// Implementations receive a snapshot taken after validation passed; they never
/// see live form state beyond the read-only reference used for naming.
pub trait DocumentExporter: Send + Sync {
    fn name(&self) -> &'static str;

    fn export(&self, snapshot: &RenderedDocument, form: &FormState) -> ExportedDocument;
}

/// Validates the form and, if it passes, renders a snapshot for preview.
pub fn open_preview(form: &mut FormState, now: YearMonth) -> Result<RenderedDocument, ValidationReport> {
    let report = form.validate_all();
    if !report.passed {
        warn!(
            "Preview blocked: {} invalid field(s)",
            report.invalid.len()
        );
        return Err(report);
    }
    Ok(render_document(form, now))
}

/// Validates, renders and exports. Returns the validation report on failure.
pub fn run_gated(
    form: &mut FormState,
    exporter: &dyn DocumentExporter,
    now: YearMonth,
) -> Result<ExportedDocument, ValidationReport> {
    let report = form.validate_all();
    if !report.passed {
        warn!(
            "{} export blocked: {} invalid field(s)",
            exporter.name(),
            report.invalid.len()
        );
        return Err(report);
    }
    let snapshot = render_document(form, now);
    let exported = exporter.export(&snapshot, form);
    info!(
        "{} export produced {} bytes",
        exporter.name(),
        exported.body.len()
    );
    Ok(exported)
}
