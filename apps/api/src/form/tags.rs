//! Tag collections: the chip lists for skills, hobbies and languages.
//!
//! Entries are whitespace-normalized on the way in and unique under
//! case-insensitive comparison; the first spelling submitted wins.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which chip list an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    PersonalSkills,
    ProfessionalSkills,
    TechnicalSkills,
    Hobbies,
    Languages,
}

/// Collapses whitespace runs to a single space and trims both ends.
pub fn normalize_item(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TagCollection {
    items: Vec<String>,
}

impl TagCollection {
    /// Appends `raw` after normalization. Returns `false` (and changes nothing)
    /// when it normalizes to empty or duplicates an existing entry.
    pub fn add(&mut self, raw: &str) -> bool {
        let item = normalize_item(raw);
        if item.is_empty() {
            debug!("Ignoring empty tag");
            return false;
        }
        let lowered = item.to_lowercase();
        if self.items.iter().any(|t| t.to_lowercase() == lowered) {
            debug!("Ignoring duplicate tag '{item}'");
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes the entry at `index`. Out-of-bounds indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            debug!("Tag index {index} out of bounds ({} items)", self.items.len());
            None
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Skills split into the three categories rendered as separate columns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Skills {
    pub personal: TagCollection,
    pub professional: TagCollection,
    pub technical: TagCollection,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.personal.is_empty() && self.professional.is_empty() && self.technical.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_item("  Machine \t  Learning \n"), "Machine Learning");
        assert_eq!(normalize_item("   "), "");
    }

    #[test]
    fn test_case_insensitive_duplicate_keeps_first_spelling() {
        let mut tags = TagCollection::default();
        assert!(tags.add("Python"));
        assert!(!tags.add("python"));
        assert_eq!(tags.items(), ["Python".to_string()]);
    }

    #[test]
    fn test_duplicate_after_normalization() {
        let mut tags = TagCollection::default();
        tags.add("Public Speaking");
        assert!(!tags.add("  public   speaking "));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_empty_and_blank_are_noops() {
        let mut tags = TagCollection::default();
        tags.add("Rust");
        assert!(!tags.add(""));
        assert!(!tags.add("   "));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut tags = TagCollection::default();
        for t in ["Go", "Rust", "Zig"] {
            tags.add(t);
        }
        assert_eq!(tags.items(), ["Go", "Rust", "Zig"]);
    }

    #[test]
    fn test_remove_at() {
        let mut tags = TagCollection::default();
        tags.add("English");
        tags.add("French");
        assert_eq!(tags.remove_at(0).as_deref(), Some("English"));
        assert_eq!(tags.items(), ["French"]);
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let mut tags = TagCollection::default();
        tags.add("Chess");
        assert!(tags.remove_at(5).is_none());
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_skills_empty_only_when_all_categories_empty() {
        let mut skills = Skills::default();
        assert!(skills.is_empty());
        skills.technical.add("SQL");
        assert!(!skills.is_empty());
    }
}
