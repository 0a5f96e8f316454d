use crate::export::{DocumentExporter, ExportedDocument};
use crate::form::fields::FieldId;
use crate::form::FormState;
use crate::render::RenderedDocument;

pub const WORD_CONTENT_TYPE: &str = "application/msword;charset=utf-8";
const WORD_EXTENSION: &str = "doc";

/// Wraps the preview in a minimal HTML envelope that word processors open as a
/// document, named after the candidate.
pub struct WordExporter;

/// Replaces every run of characters outside `[A-Za-z0-9_-]` with a single `_`.
/// An empty name falls back to `Resume`.
pub fn safe_file_stem(full_name: &str) -> String {
    let source = if full_name.is_empty() { "Resume" } else { full_name };
    let mut stem = String::with_capacity(source.len());
    let mut in_run = false;
    for c in source.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            stem.push(c);
            in_run = false;
        } else if !in_run {
            stem.push('_');
            in_run = true;
        }
    }
    stem
}

pub fn word_envelope(content: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>Resume</title></head><body>{content}</body></html>"#
    )
}

impl DocumentExporter for WordExporter {
    fn name(&self) -> &'static str {
        "word"
    }

    fn export(&self, snapshot: &RenderedDocument, form: &FormState) -> ExportedDocument {
        let stem = safe_file_stem(form.fields.trimmed(FieldId::FullName));
        ExportedDocument {
            content_type: WORD_CONTENT_TYPE,
            file_name: Some(format!("{stem}.{WORD_EXTENSION}")),
            body: word_envelope(&snapshot.to_html()),
        }
    }
}
