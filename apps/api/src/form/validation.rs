//! Required-field validation and the gate in front of preview, print and export.

use serde::Serialize;
use tracing::debug;

use crate::form::entries::{
    Certification, EntryKind, EntryRecord, Education, Experience, Project, RepeatableGroup,
};
use crate::form::fields::FieldId;
use crate::form::FormState;

pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Addresses one validatable input: a top-level field or a field of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum FieldKey {
    Form {
        field: FieldId,
    },
    Entry {
        kind: EntryKind,
        id: u32,
        field: &'static str,
    },
}

/// Inline message attached to an invalid input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFlag {
    #[serde(flatten)]
    pub key: FieldKey,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub passed: bool,
    /// Invalid inputs in document order.
    pub invalid: Vec<FieldKey>,
    /// The input the editor should scroll to and focus.
    pub first_invalid: Option<FieldKey>,
}

/// Required top-level fields that precede the repeatable groups on the form.
const LEADING_REQUIRED: [FieldId; 6] = [
    FieldId::FullName,
    FieldId::JobTitle,
    FieldId::Email,
    FieldId::Phone,
    FieldId::Location,
    FieldId::Objective,
];

fn group_keys<T: EntryRecord>(group: &RepeatableGroup<T>) -> impl Iterator<Item = FieldKey> + '_ {
    group.entries().iter().flat_map(|entry| {
        T::REQUIRED.iter().map(move |field| FieldKey::Entry {
            kind: T::KIND,
            id: entry.id,
            field: *field,
        })
    })
}

impl FormState {
    fn required_keys(&self) -> Vec<FieldKey> {
        let mut keys: Vec<FieldKey> = LEADING_REQUIRED
            .iter()
            .map(|field| FieldKey::Form { field: *field })
            .collect();
        keys.extend(group_keys(&self.experience));
        keys.extend(group_keys(&self.education));
        keys.extend(group_keys(&self.projects));
        keys.extend(group_keys(&self.certifications));
        keys.push(FieldKey::Form {
            field: FieldId::Declaration,
        });
        keys
    }

    fn is_required(&self, key: &FieldKey) -> bool {
        match key {
            FieldKey::Form { field } => field.is_required(),
            FieldKey::Entry { kind, field, .. } => {
                let required = match kind {
                    EntryKind::Experience => Experience::REQUIRED,
                    EntryKind::Education => Education::REQUIRED,
                    EntryKind::Project => Project::REQUIRED,
                    EntryKind::Certification => Certification::REQUIRED,
                };
                required.contains(field)
            }
        }
    }

    /// Re-checks a single input and updates its flag. Returns whether it is valid.
    ///
    /// A key for an entry that no longer exists is treated as valid.
    pub fn validate_field(&mut self, key: FieldKey) -> bool {
        let empty = self
            .value_of(&key)
            .map(|v| v.trim().is_empty())
            .unwrap_or(false);
        let valid = !(self.is_required(&key) && empty);
        if valid {
            self.invalid.remove(&key);
        } else {
            debug!("Flagging required field {key:?}");
            self.invalid.insert(key);
        }
        valid
    }

    /// Checks every required input, including those of draft entries, flagging
    /// each failure and clearing stale flags.
    pub fn validate_all(&mut self) -> ValidationReport {
        self.invalid.clear();
        let invalid: Vec<FieldKey> = self
            .required_keys()
            .into_iter()
            .filter(|key| !self.validate_field(*key))
            .collect();
        ValidationReport {
            passed: invalid.is_empty(),
            first_invalid: invalid.first().copied(),
            invalid,
        }
    }

    /// Flags currently shown in the editor, in document order.
    pub fn flags(&self) -> Vec<FieldFlag> {
        self.required_keys()
            .into_iter()
            .filter(|key| self.invalid.contains(key))
            .map(|key| FieldFlag {
                key,
                message: REQUIRED_MESSAGE,
            })
            .collect()
    }

    #[cfg(test)]
    pub fn is_flagged(&self, key: &FieldKey) -> bool {
        self.invalid.contains(key)
    }
}
