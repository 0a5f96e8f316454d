//! Form state, the single in-memory record of everything the user has entered.
//!
//! Every mutation goes through [`FormState`]; the renderer and the exporters only
//! ever read it. Edits re-validate the touched input so inline flags stay current.

pub mod dates;
pub mod entries;
pub mod fields;
pub mod handlers;
pub mod photo;
pub mod section_order;
pub mod tags;
pub mod validation;

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::form::entries::{
    Certification, Education, EntryKind, EntryRecord, Experience, Project, RepeatableGroup,
};
use crate::form::fields::{FieldId, FieldStore};
use crate::form::photo::Photo;
use crate::form::section_order::SectionOrder;
use crate::form::tags::{Skills, TagCollection, TagKind};
use crate::form::validation::FieldKey;

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("No {} entry with id {id}", .kind.as_str())]
    EntryNotFound { kind: EntryKind, id: u32 },

    #[error("{} entries have no field '{field}'", .kind.as_str())]
    UnknownField { kind: EntryKind, field: String },

    #[error("Field '{field}' of {} entry is disabled", .kind.as_str())]
    FieldDisabled { kind: EntryKind, field: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FormState {
    pub fields: FieldStore,
    pub skills: Skills,
    pub hobbies: TagCollection,
    pub languages: TagCollection,
    pub experience: RepeatableGroup<Experience>,
    pub education: RepeatableGroup<Education>,
    pub projects: RepeatableGroup<Project>,
    pub certifications: RepeatableGroup<Certification>,
    pub section_order: SectionOrder,
    pub photo: Option<Photo>,
    #[serde(skip)]
    invalid: BTreeSet<FieldKey>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

fn set_in_group<T: EntryRecord>(
    group: &mut RepeatableGroup<T>,
    id: u32,
    field: &str,
    value: String,
) -> Result<FieldKey, FormError> {
    let record = group
        .get_mut(id)
        .ok_or(FormError::EntryNotFound { kind: T::KIND, id })?;
    record.set(field, value)?;
    // set() succeeded, so the name is one of FIELDS
    let field = T::FIELDS
        .iter()
        .copied()
        .find(|f| *f == field)
        .ok_or_else(|| FormError::UnknownField {
            kind: T::KIND,
            field: field.to_string(),
        })?;
    Ok(FieldKey::Entry {
        kind: T::KIND,
        id,
        field,
    })
}

impl FormState {
    /// A fresh form as first shown: one blank experience and one blank education entry.
    pub fn new() -> Self {
        let mut form = FormState {
            fields: FieldStore::default(),
            skills: Skills::default(),
            hobbies: TagCollection::default(),
            languages: TagCollection::default(),
            experience: RepeatableGroup::default(),
            education: RepeatableGroup::default(),
            projects: RepeatableGroup::default(),
            certifications: RepeatableGroup::default(),
            section_order: SectionOrder::default(),
            photo: None,
            invalid: BTreeSet::new(),
        };
        form.experience.add_entry();
        form.education.add_entry();
        form
    }

    // ── Field store ─────────────────────────────────────────────────────────

    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.fields.set(field, value);
        self.validate_field(FieldKey::Form { field });
    }

    pub(crate) fn value_of(&self, key: &FieldKey) -> Option<&str> {
        match key {
            FieldKey::Form { field } => Some(self.fields.get(*field)),
            FieldKey::Entry { kind, id, field } => match kind {
                EntryKind::Experience => self.experience.get(*id)?.get(field),
                EntryKind::Education => self.education.get(*id)?.get(field),
                EntryKind::Project => self.projects.get(*id)?.get(field),
                EntryKind::Certification => self.certifications.get(*id)?.get(field),
            },
        }
    }

    // ── Tag collections ─────────────────────────────────────────────────────

    pub fn tags(&self, kind: TagKind) -> &TagCollection {
        match kind {
            TagKind::PersonalSkills => &self.skills.personal,
            TagKind::ProfessionalSkills => &self.skills.professional,
            TagKind::TechnicalSkills => &self.skills.technical,
            TagKind::Hobbies => &self.hobbies,
            TagKind::Languages => &self.languages,
        }
    }

    fn tags_mut(&mut self, kind: TagKind) -> &mut TagCollection {
        match kind {
            TagKind::PersonalSkills => &mut self.skills.personal,
            TagKind::ProfessionalSkills => &mut self.skills.professional,
            TagKind::TechnicalSkills => &mut self.skills.technical,
            TagKind::Hobbies => &mut self.hobbies,
            TagKind::Languages => &mut self.languages,
        }
    }

    pub fn add_tag(&mut self, kind: TagKind, raw: &str) -> bool {
        self.tags_mut(kind).add(raw)
    }

    pub fn remove_tag(&mut self, kind: TagKind, index: usize) -> Option<String> {
        self.tags_mut(kind).remove_at(index)
    }

    // ── Repeatable groups ───────────────────────────────────────────────────

    pub fn add_entry(&mut self, kind: EntryKind) -> u32 {
        match kind {
            EntryKind::Experience => self.experience.add_entry(),
            EntryKind::Education => self.education.add_entry(),
            EntryKind::Project => self.projects.add_entry(),
            EntryKind::Certification => self.certifications.add_entry(),
        }
    }

    /// Removes an entry and any flags its inputs carried. Absent ids are ignored.
    pub fn remove_entry(&mut self, kind: EntryKind, id: u32) -> bool {
        let removed = match kind {
            EntryKind::Experience => self.experience.remove_entry(id),
            EntryKind::Education => self.education.remove_entry(id),
            EntryKind::Project => self.projects.remove_entry(id),
            EntryKind::Certification => self.certifications.remove_entry(id),
        };
        if removed {
            self.invalid.retain(|key| {
                !matches!(key, FieldKey::Entry { kind: k, id: i, .. } if *k == kind && *i == id)
            });
        }
        removed
    }

    pub fn set_entry_field(
        &mut self,
        kind: EntryKind,
        id: u32,
        field: &str,
        value: String,
    ) -> Result<(), FormError> {
        let key = match kind {
            EntryKind::Experience => set_in_group(&mut self.experience, id, field, value),
            EntryKind::Education => set_in_group(&mut self.education, id, field, value),
            EntryKind::Project => set_in_group(&mut self.projects, id, field, value),
            EntryKind::Certification => set_in_group(&mut self.certifications, id, field, value),
        }?;
        self.validate_field(key);
        Ok(())
    }

    /// Ticks or unticks "currently working here". Ticking clears and disables the
    /// end date in the same step.
    pub fn set_experience_current(&mut self, id: u32, current: bool) -> Result<(), FormError> {
        let entry = self
            .experience
            .get_mut(id)
            .ok_or(FormError::EntryNotFound {
                kind: EntryKind::Experience,
                id,
            })?;
        entry.set_current(current);
        debug!("Experience {id} current = {current}");
        Ok(())
    }

    // ── Photo ───────────────────────────────────────────────────────────────

    pub fn set_photo(&mut self, photo: Photo) {
        self.photo = Some(photo);
    }

    pub fn remove_photo(&mut self) -> bool {
        self.photo.take().is_some()
    }
}
