//! Preview renderer: a pure projection of [`FormState`] into the resume document.
//!
//! Nothing here is cached: every call rebuilds the whole document from the form,
//! so the output after any mutation is exactly what a fresh render would produce.
//! Every piece of user text passes through [`html::escape_html`] before it lands
//! in markup.

pub mod editor;
pub mod html;
pub mod sections;

use serde::Serialize;

use crate::form::dates::YearMonth;
use crate::form::fields::FieldId;
use crate::form::section_order::SectionId;
use crate::form::FormState;
use crate::render::html::{ensure_http, escape_html};
use crate::render::sections::render_section;

/// One non-empty section of the document, already escaped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFragment {
    pub section: SectionId,
    pub html: String,
}

/// The rendered resume: header block plus the non-empty sections in user order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDocument {
    pub header: String,
    pub sections: Vec<SectionFragment>,
}

impl RenderedDocument {
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|f| f.section).collect()
    }

    pub fn body_html(&self) -> String {
        self.sections.iter().map(|f| f.html.as_str()).collect()
    }

    /// The complete preview markup, as handed to print and export.
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="resume-preview" id="resumePreview">{}<div class="resume-body" id="resumeBody">{}</div></div>"#,
            self.header,
            self.body_html()
        )
    }
}

/// Social and web links in header order: field, icon class, link text.
const LINKS: [(FieldId, &str, &str); 5] = [
    (FieldId::Website, "fas fa-globe", "Website"),
    (FieldId::Linkedin, "fab fa-linkedin", "LinkedIn"),
    (FieldId::Github, "fab fa-github", "GitHub"),
    (FieldId::Facebook, "fab fa-facebook", "Facebook"),
    (FieldId::Youtube, "fab fa-youtube", "YouTube"),
];

const PLAIN_CONTACTS: [(FieldId, &str); 3] = [
    (FieldId::Email, "fas fa-envelope"),
    (FieldId::Phone, "fas fa-phone"),
    (FieldId::Location, "fas fa-map-marker-alt"),
];

fn contact_items(form: &FormState) -> String {
    let mut out = String::new();
    for (field, icon) in PLAIN_CONTACTS {
        let value = form.fields.trimmed(field);
        if !value.is_empty() {
            out.push_str(&format!(
                r#"<span class="resume-contact-item"><i class="{icon}"></i>{}</span>"#,
                escape_html(value)
            ));
        }
    }
    for (field, icon, text) in LINKS {
        let href = ensure_http(form.fields.get(field));
        if !href.is_empty() {
            out.push_str(&format!(
                r#"<span class="resume-contact-item"><i class="{icon}"></i><a href="{}" target="_blank">{text}</a></span>"#,
                escape_html(&href)
            ));
        }
    }
    out
}

fn photo(form: &FormState) -> String {
    match &form.photo {
        Some(photo) => format!(
            r#"<div class="resume-photo"><img src="{}" alt="Profile Photo"></div>"#,
            escape_html(&photo.data_uri)
        ),
        None => r#"<div class="resume-photo"><div class="resume-photo-placeholder"><i class="fas fa-user"></i></div></div>"#
            .to_string(),
    }
}

pub fn render_header(form: &FormState) -> String {
    let name = match form.fields.get(FieldId::FullName) {
        "" => "Your Name",
        name => name,
    };
    let title = match form.fields.get(FieldId::JobTitle) {
        "" => "Your Job Title",
        title => title,
    };
    format!(
        r#"<div class="resume-header" id="resumeHeader">{}<div class="resume-header-info"><h1 class="resume-name">{}</h1><div class="resume-title">{}</div><div class="resume-contact">{}</div></div></div>"#,
        photo(form),
        escape_html(name),
        escape_html(title),
        contact_items(form)
    )
}

/// Renders the full document. `now` resolves durations of current positions.
pub fn render_document(form: &FormState, now: YearMonth) -> RenderedDocument {
    let sections = form
        .section_order
        .as_slice()
        .iter()
        .filter_map(|section| {
            render_section(form, *section, now).map(|html| SectionFragment {
                section: *section,
                html,
            })
        })
        .collect();

    RenderedDocument {
        header: render_header(form),
        sections,
    }
}
