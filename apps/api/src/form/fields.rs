use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maximum length of the career objective (mirrors the textarea's maxlength).
pub const OBJECTIVE_MAX_CHARS: usize = 500;

/// Every scalar input on the form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    FullName,
    JobTitle,
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
    Github,
    Facebook,
    Youtube,
    Objective,
    Declaration,
}

impl FieldId {
    #[cfg(test)]
    pub const ALL: [FieldId; 12] = [
        FieldId::FullName,
        FieldId::JobTitle,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Location,
        FieldId::Website,
        FieldId::Linkedin,
        FieldId::Github,
        FieldId::Facebook,
        FieldId::Youtube,
        FieldId::Objective,
        FieldId::Declaration,
    ];

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FieldId::FullName
                | FieldId::JobTitle
                | FieldId::Email
                | FieldId::Phone
                | FieldId::Location
                | FieldId::Objective
                | FieldId::Declaration
        )
    }

    pub fn max_chars(&self) -> Option<usize> {
        match self {
            FieldId::Objective => Some(OBJECTIVE_MAX_CHARS),
            _ => None,
        }
    }
}

/// Current values of the scalar inputs. Fields never set read as empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FieldStore {
    values: BTreeMap<FieldId, String>,
}

impl FieldStore {
    pub fn get(&self, id: FieldId) -> &str {
        self.values.get(&id).map(String::as_str).unwrap_or("")
    }

    /// Trimmed value, as read by the renderer and the validator.
    pub fn trimmed(&self, id: FieldId) -> &str {
        self.get(id).trim()
    }

    /// Stores `value`, truncated to the field's character limit if it has one.
    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        let mut value = value.into();
        if let Some(limit) = id.max_chars() {
            if let Some((cut, _)) = value.char_indices().nth(limit) {
                value.truncate(cut);
            }
        }
        self.values.insert(id, value);
    }

    /// `"<n> / 500"` counter shown under the objective textarea.
    pub fn objective_counter(&self) -> String {
        format!(
            "{} / {}",
            self.get(FieldId::Objective).chars().count(),
            OBJECTIVE_MAX_CHARS
        )
    }
}
