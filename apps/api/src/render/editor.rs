//! The editing panel's derived state: chip lists, order controls, duration
//! readouts and inline flags. Rebuilt alongside the document after every edit.

use serde::Serialize;

use crate::form::dates::YearMonth;
use crate::form::section_order::SectionControl;
use crate::form::tags::{TagCollection, TagKind};
use crate::form::validation::FieldFlag;
use crate::form::FormState;
use crate::render::html::escape_html;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChipList {
    pub kind: TagKind,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceControls {
    pub id: u32,
    pub duration: Option<String>,
    pub end_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorView {
    pub chips: Vec<ChipList>,
    pub section_controls: Vec<SectionControl>,
    pub experience: Vec<ExperienceControls>,
    pub objective_counter: String,
    pub flags: Vec<FieldFlag>,
}

const TAG_KINDS: [TagKind; 5] = [
    TagKind::PersonalSkills,
    TagKind::ProfessionalSkills,
    TagKind::TechnicalSkills,
    TagKind::Hobbies,
    TagKind::Languages,
];

/// Chips carry their position so the remove button can address them.
pub fn render_chip_list(tags: &TagCollection) -> String {
    tags.items()
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            format!(
                r#"<span class="chip" data-index="{i}">{}<button type="button" aria-label="Remove" data-index="{i}">&times;</button></span>"#,
                escape_html(tag)
            )
        })
        .collect()
}

pub fn render_editor(form: &FormState, now: YearMonth) -> EditorView {
    EditorView {
        chips: TAG_KINDS
            .iter()
            .map(|kind| ChipList {
                kind: *kind,
                html: render_chip_list(form.tags(*kind)),
            })
            .collect(),
        section_controls: form.section_order.controls(),
        experience: form
            .experience
            .entries()
            .iter()
            .map(|entry| ExperienceControls {
                id: entry.id,
                duration: entry.record.duration_display(now),
                end_disabled: entry.record.end_disabled(),
            })
            .collect(),
        objective_counter: form.fields.objective_counter(),
        flags: form.flags(),
    }
}
