//! User-controlled ordering of the document sections.
//!
//! The order is always a permutation of [`SectionId::ALL`]: every mutation is a
//! swap or a remove-then-insert of an existing element.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Objective,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Hobbies,
    Declaration,
}

impl SectionId {
    /// Also the default order.
    pub const ALL: [SectionId; 9] = [
        SectionId::Objective,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Certifications,
        SectionId::Languages,
        SectionId::Hobbies,
        SectionId::Declaration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Objective => "Career Objective",
            SectionId::Experience => "Work Experience",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Certifications => "Certifications",
            SectionId::Languages => "Languages",
            SectionId::Hobbies => "Hobbies",
            SectionId::Declaration => "Declaration",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Objective => "objective",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Certifications => "certifications",
            SectionId::Languages => "languages",
            SectionId::Hobbies => "hobbies",
            SectionId::Declaration => "declaration",
        }
    }
}

/// One row of the order-editing list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionControl {
    pub section: SectionId,
    pub label: &'static str,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionOrder {
    order: Vec<SectionId>,
}

impl Default for SectionOrder {
    fn default() -> Self {
        SectionOrder {
            order: SectionId::ALL.to_vec(),
        }
    }
}

impl SectionOrder {
    pub fn as_slice(&self) -> &[SectionId] {
        &self.order
    }

    fn index_of(&self, id: SectionId) -> usize {
        // Every id is present; the order is a permutation of ALL.
        self.order.iter().position(|s| *s == id).unwrap_or(0)
    }

    /// Swaps `id` with its predecessor. Returns `false` at the top.
    pub fn move_up(&mut self, id: SectionId) -> bool {
        let i = self.index_of(id);
        if i == 0 {
            debug!("Section '{}' is already first", id.as_str());
            return false;
        }
        self.order.swap(i - 1, i);
        true
    }

    /// Swaps `id` with its successor. Returns `false` at the bottom.
    pub fn move_down(&mut self, id: SectionId) -> bool {
        let i = self.index_of(id);
        if i + 1 >= self.order.len() {
            debug!("Section '{}' is already last", id.as_str());
            return false;
        }
        self.order.swap(i, i + 1);
        true
    }

    /// Drag-and-drop: removes `dragged` from its slot and inserts it at the index
    /// `target` occupied before the removal.
    ///
    /// Moving down therefore lands *after* the target, moving up lands *before*
    /// it; dropping onto the immediate successor swaps the pair.
    pub fn reorder(&mut self, dragged: SectionId, target: SectionId) -> bool {
        if dragged == target {
            return false;
        }
        let from = self.index_of(dragged);
        let to = self.index_of(target);
        let item = self.order.remove(from);
        self.order.insert(to, item);
        true
    }

    pub fn controls(&self) -> Vec<SectionControl> {
        let last = self.order.len().saturating_sub(1);
        self.order
            .iter()
            .enumerate()
            .map(|(i, section)| SectionControl {
                section: *section,
                label: section.label(),
                can_move_up: i > 0,
                can_move_down: i < last,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::SectionId::{Certifications, Declaration, Education, Experience, Objective, Skills};

    fn is_permutation(order: &SectionOrder) -> bool {
        order.as_slice().len() == SectionId::ALL.len()
            && SectionId::ALL
                .iter()
                .all(|s| order.as_slice().iter().filter(|o| *o == s).count() == 1)
    }

    #[test]
    fn test_default_order() {
        assert_eq!(SectionOrder::default().as_slice(), SectionId::ALL);
    }

    #[test]
    fn test_boundary_moves_are_noops() {
        let mut order = SectionOrder::default();
        assert!(!order.move_up(Objective));
        assert!(!order.move_down(Declaration));
        assert_eq!(order, SectionOrder::default());
    }

    #[test]
    fn test_move_up_and_down() {
        let mut order = SectionOrder::default();
        assert!(order.move_up(Experience));
        assert_eq!(&order.as_slice()[..2], [Experience, Objective]);
        assert!(order.move_down(Experience));
        assert_eq!(order, SectionOrder::default());
    }

    #[test]
    fn test_reorder_downwards_lands_after_target() {
        let mut order = SectionOrder::default();
        // objective at 0, skills at 3: remove 0, insert at 3
        order.reorder(Objective, Skills);
        assert_eq!(
            &order.as_slice()[..5],
            [Experience, Education, Skills, Objective, SectionId::Projects]
        );
    }

    #[test]
    fn test_reorder_upwards_lands_before_target() {
        let mut order = SectionOrder::default();
        // certifications at 5, experience at 1: remove 5, insert at 1
        order.reorder(Certifications, Experience);
        assert_eq!(
            &order.as_slice()[..4],
            [Objective, Certifications, Experience, Education]
        );
    }

    #[test]
    fn test_reorder_onto_next_neighbour_swaps() {
        let mut order = SectionOrder::default();
        order.reorder(Objective, Experience);
        assert_eq!(&order.as_slice()[..2], [Experience, Objective]);
    }

    #[test]
    fn test_reorder_onto_previous_neighbour_swaps() {
        let mut order = SectionOrder::default();
        order.reorder(Experience, Objective);
        assert_eq!(&order.as_slice()[..2], [Experience, Objective]);
    }

    #[test]
    fn test_reorder_onto_self_is_noop() {
        let mut order = SectionOrder::default();
        assert!(!order.reorder(Education, Education));
        assert_eq!(order, SectionOrder::default());
    }

    #[test]
    fn test_permutation_survives_mixed_mutations() {
        let mut order = SectionOrder::default();
        let all = SectionId::ALL;
        for step in 0..200usize {
            let a = all[(step * 7) % all.len()];
            let b = all[(step * 5 + 3) % all.len()];
            match step % 3 {
                0 => {
                    order.move_up(a);
                }
                1 => {
                    order.move_down(b);
                }
                _ => {
                    order.reorder(a, b);
                }
            }
            assert!(is_permutation(&order), "broken after step {step}");
        }
    }

    #[test]
    fn test_controls_disable_boundary_buttons() {
        let controls = SectionOrder::default().controls();
        assert!(!controls[0].can_move_up);
        assert!(controls[0].can_move_down);
        assert!(controls[8].can_move_up);
        assert!(!controls[8].can_move_down);
        assert_eq!(controls[1].label, "Work Experience");
    }
}
