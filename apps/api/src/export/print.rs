use crate::export::{DocumentExporter, ExportedDocument};
use crate::form::FormState;
use crate::render::RenderedDocument;

/// Produces a standalone page holding a copy of the preview. The browser's
/// print dialog takes it from there.
pub struct PrintExporter;

impl DocumentExporter for PrintExporter {
    fn name(&self) -> &'static str {
        "print"
    }

    fn export(&self, snapshot: &RenderedDocument, _form: &FormState) -> ExportedDocument {
        let body = format!(
            r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>Resume</title></head><body onload="window.print()"><div id="printArea">{}</div></body></html>"#,
            snapshot.to_html()
        );
        ExportedDocument {
            content_type: "text/html; charset=utf-8",
            file_name: None,
            body,
        }
    }
}
