//! Repeatable groups: experience, education, project and certification entries.
//!
//! Each group owns a counter that only ever increments, so an id is never handed
//! out twice within a kind, even after the entry holding it is removed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::form::dates::{compute_tenure, Tenure, YearMonth};
use crate::form::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Experience,
    Education,
    Project,
    Certification,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Experience => "experience",
            EntryKind::Education => "education",
            EntryKind::Project => "project",
            EntryKind::Certification => "certification",
        }
    }
}

/// The record behind one entry of a repeatable group.
pub trait EntryRecord: Default {
    const KIND: EntryKind;

    /// Text fields accepted by [`EntryRecord::get`] / [`EntryRecord::set`], in form order.
    const FIELDS: &'static [&'static str];

    /// Required fields, in form order. Checked by the validator even on drafts.
    const REQUIRED: &'static [&'static str];

    fn get(&self, field: &str) -> Option<&str>;

    fn slot(&mut self, field: &str) -> Option<&mut String>;

    /// Whether the entry has enough filled in to appear in the document.
    /// Entries that don't are draft placeholders.
    fn is_renderable(&self) -> bool;

    fn set(&mut self, field: &str, value: String) -> Result<(), FormError> {
        let slot = self.slot(field).ok_or_else(|| FormError::UnknownField {
            kind: Self::KIND,
            field: field.to_string(),
        })?;
        *slot = value;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start: String,
    pub end: String,
    pub current: bool,
    pub description: String,
}

impl Experience {
    /// The end-date input is disabled while "currently working here" is ticked.
    pub fn end_disabled(&self) -> bool {
        self.current
    }

    /// Ticking `current` clears the end date; unticking leaves it empty but editable.
    pub fn set_current(&mut self, current: bool) {
        self.current = current;
        if current {
            self.end.clear();
        }
    }

    pub fn tenure(&self, now: YearMonth) -> Option<Tenure> {
        compute_tenure(&self.start, &self.end, self.current, now)
    }

    /// `Duration: 2 years 2 months`, shown under the date inputs. `None` hides it.
    pub fn duration_display(&self, now: YearMonth) -> Option<String> {
        self.tenure(now)
            .map(|t| format!("Duration: {}", t.long_text()))
    }
}

impl EntryRecord for Experience {
    const KIND: EntryKind = EntryKind::Experience;
    const FIELDS: &'static [&'static str] =
        &["title", "company", "start", "end", "description"];
    const REQUIRED: &'static [&'static str] = &["title", "company"];

    fn get(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "company" => Some(&self.company),
            "start" => Some(&self.start),
            "end" => Some(&self.end),
            "description" => Some(&self.description),
            _ => None,
        }
    }

    fn slot(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "title" => Some(&mut self.title),
            "company" => Some(&mut self.company),
            "start" => Some(&mut self.start),
            "end" => Some(&mut self.end),
            "description" => Some(&mut self.description),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: String) -> Result<(), FormError> {
        if field == "end" && self.end_disabled() {
            return Err(FormError::FieldDisabled {
                kind: Self::KIND,
                field: field.to_string(),
            });
        }
        let slot = self.slot(field).ok_or_else(|| FormError::UnknownField {
            kind: Self::KIND,
            field: field.to_string(),
        })?;
        *slot = value;
        Ok(())
    }

    fn is_renderable(&self) -> bool {
        !self.title.trim().is_empty() || !self.company.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub grade: String,
}

impl EntryRecord for Education {
    const KIND: EntryKind = EntryKind::Education;
    const FIELDS: &'static [&'static str] = &["degree", "institution", "year", "grade"];
    const REQUIRED: &'static [&'static str] = &["degree", "institution"];

    fn get(&self, field: &str) -> Option<&str> {
        match field {
            "degree" => Some(&self.degree),
            "institution" => Some(&self.institution),
            "year" => Some(&self.year),
            "grade" => Some(&self.grade),
            _ => None,
        }
    }

    fn slot(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "degree" => Some(&mut self.degree),
            "institution" => Some(&mut self.institution),
            "year" => Some(&mut self.year),
            "grade" => Some(&mut self.grade),
            _ => None,
        }
    }

    fn is_renderable(&self) -> bool {
        !self.degree.trim().is_empty() || !self.institution.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub technologies: String,
    pub url: String,
    pub description: String,
}

impl EntryRecord for Project {
    const KIND: EntryKind = EntryKind::Project;
    const FIELDS: &'static [&'static str] = &["name", "technologies", "url", "description"];
    const REQUIRED: &'static [&'static str] = &["name"];

    fn get(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "technologies" => Some(&self.technologies),
            "url" => Some(&self.url),
            "description" => Some(&self.description),
            _ => None,
        }
    }

    fn slot(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "name" => Some(&mut self.name),
            "technologies" => Some(&mut self.technologies),
            "url" => Some(&mut self.url),
            "description" => Some(&mut self.description),
            _ => None,
        }
    }

    fn is_renderable(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub organization: String,
    pub date: String,
    pub credential_id: String,
}

impl EntryRecord for Certification {
    const KIND: EntryKind = EntryKind::Certification;
    const FIELDS: &'static [&'static str] = &["name", "organization", "date", "credential_id"];
    const REQUIRED: &'static [&'static str] = &["name"];

    fn get(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "organization" => Some(&self.organization),
            "date" => Some(&self.date),
            "credential_id" => Some(&self.credential_id),
            _ => None,
        }
    }

    fn slot(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "name" => Some(&mut self.name),
            "organization" => Some(&mut self.organization),
            "date" => Some(&mut self.date),
            "credential_id" => Some(&mut self.credential_id),
            _ => None,
        }
    }

    fn is_renderable(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Entry<T> {
    pub id: u32,
    #[serde(flatten)]
    pub record: T,
}

/// All entries of one kind, in the order they were added.
#[derive(Debug, Clone, Serialize)]
pub struct RepeatableGroup<T> {
    #[serde(skip)]
    last_id: u32,
    entries: Vec<Entry<T>>,
}

impl<T> Default for RepeatableGroup<T> {
    fn default() -> Self {
        RepeatableGroup {
            last_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T: EntryRecord> RepeatableGroup<T> {
    /// Appends a default-empty entry and returns its freshly allocated id.
    pub fn add_entry(&mut self) -> u32 {
        self.last_id += 1;
        self.entries.push(Entry {
            id: self.last_id,
            record: T::default(),
        });
        debug!("Added {} entry {}", T::KIND.as_str(), self.last_id);
        self.last_id
    }

    /// Removes the entry with `id`. Returns `false` if there was none.
    pub fn remove_entry(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if !removed {
            debug!("No {} entry {id} to remove", T::KIND.as_str());
        }
        removed
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.record)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.record)
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Entries with their primary fields filled, in group order.
    pub fn renderable(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter().filter(|e| e.record.is_renderable())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
