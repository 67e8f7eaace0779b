//! The user-ordered list of selected sections and its derived preview markup

use super::catalog::Note;
use super::flatten::flatten;

/// A note chosen by the user: its title plus pre-flattened markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSection {
    pub title: String,
    pub markup: String,
}

/// Ordered sequence of selected sections.
///
/// Titles are unique within the list (enforced on insertion). The combined
/// preview markup is recomputed eagerly after every mutation, so it always
/// equals the ordered concatenation of the sections' markup.
#[derive(Debug, Clone, Default)]
pub struct SelectionList {
    sections: Vec<SelectedSection>,
    combined: String,
}

impl SelectionList {
    /// Flatten the note and append it, unless a section with the same
    /// title is already present. Duplicates are a silent no-op.
    /// Returns whether the list changed.
    pub fn select(&mut self, note: &Note) -> bool {
        if self.sections.iter().any(|s| s.title == note.title) {
            tracing::debug!("Note already selected: {}", note.title);
            return false;
        }
        self.sections.push(SelectedSection {
            title: note.title.clone(),
            markup: flatten(note),
        });
        self.recompute();
        true
    }

    /// Remove the section at `index`, shifting later sections down.
    /// An out-of-range index is a no-op. Returns whether the list changed.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.sections.len() {
            tracing::debug!(
                "Ignoring removal at index {} (len {})",
                index,
                self.sections.len()
            );
            return false;
        }
        let removed = self.sections.remove(index);
        tracing::info!("Removed section: {}", removed.title);
        self.recompute();
        true
    }

    /// Replace the sequence with a permutation of the current sections.
    ///
    /// The gesture layer only ever hands back the same elements in a new
    /// order; anything else is rejected and the old order kept.
    /// Returns whether the new order was applied.
    pub fn reorder(&mut self, new_order: Vec<SelectedSection>) -> bool {
        if !is_permutation(&self.sections, &new_order) {
            tracing::warn!("Rejected reorder: not a permutation of the current selection");
            return false;
        }
        self.sections = new_order;
        self.recompute();
        true
    }

    /// Move the section at `from` so it sits at `to`, as produced by a
    /// drag gesture. Routed through `reorder` so the permutation check
    /// applies uniformly.
    pub fn move_section(&mut self, from: usize, mut to: usize) -> bool {
        if from >= self.sections.len() || to > self.sections.len() {
            tracing::debug!("Ignoring move {} -> {} (len {})", from, to, self.sections.len());
            return false;
        }
        if to > from {
            to -= 1;
        }
        if to == from {
            return false;
        }
        let mut new_order = self.sections.clone();
        let section = new_order.remove(from);
        new_order.insert(to, section);
        self.reorder(new_order)
    }

    pub fn sections(&self) -> &[SelectedSection] {
        &self.sections
    }

    /// The ordered concatenation of every section's markup, no separator
    pub fn combined_markup(&self) -> &str {
        &self.combined
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn recompute(&mut self) {
        self.combined = self.sections.iter().map(|s| s.markup.as_str()).collect();
    }
}

/// Same title multiset in both sequences
fn is_permutation(current: &[SelectedSection], candidate: &[SelectedSection]) -> bool {
    if current.len() != candidate.len() {
        return false;
    }
    let mut a: Vec<&str> = current.iter().map(|s| s.title.as_str()).collect();
    let mut b: Vec<&str> = candidate.iter().map(|s| s.title.as_str()).collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{ContentBlock, ContentDocument};

    fn note(title: &str, text: &str) -> Note {
        Note {
            title: title.to_string(),
            category: "Misc".to_string(),
            content_list: vec![ContentDocument {
                body: vec![ContentBlock::Paragraph {
                    text: text.to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_select_appends_flattened_markup() {
        let mut list = SelectionList::default();
        assert!(list.select(&note("Intro", "hello")));
        assert_eq!(list.len(), 1);
        assert_eq!(list.sections()[0].title, "Intro");
        assert_eq!(list.sections()[0].markup, "hello\n\n");
        assert_eq!(list.combined_markup(), "hello\n\n");
    }

    #[test]
    fn test_duplicate_select_is_silent_noop() {
        let mut list = SelectionList::default();
        assert!(list.select(&note("Intro", "one")));
        assert!(!list.select(&note("Intro", "two")));
        assert_eq!(list.len(), 1);
        assert_eq!(list.combined_markup(), "one\n\n");
    }

    #[test]
    fn test_remove_shifts_later_sections_down() {
        let mut list = SelectionList::default();
        list.select(&note("A", "a"));
        list.select(&note("B", "b"));
        list.select(&note("C", "c"));
        assert!(list.remove(1));
        assert_eq!(list.len(), 2);
        assert_eq!(list.sections()[0].title, "A");
        assert_eq!(list.sections()[1].title, "C");
        assert_eq!(list.combined_markup(), "a\n\nc\n\n");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut list = SelectionList::default();
        list.select(&note("A", "a"));
        assert!(!list.remove(5));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_reorder_permutation_recomputes_preview() {
        let mut list = SelectionList::default();
        list.select(&note("Intro", "intro"));
        list.select(&note("Setup", "setup"));

        let mut new_order: Vec<_> = list.sections().to_vec();
        new_order.swap(0, 1);
        assert!(list.reorder(new_order));

        assert_eq!(list.sections()[0].title, "Setup");
        assert_eq!(list.combined_markup(), "setup\n\nintro\n\n");
    }

    #[test]
    fn test_reorder_rejects_non_permutation() {
        let mut list = SelectionList::default();
        list.select(&note("A", "a"));
        list.select(&note("B", "b"));

        let bogus = vec![SelectedSection {
            title: "A".to_string(),
            markup: "a\n\n".to_string(),
        }];
        assert!(!list.reorder(bogus));
        assert_eq!(list.len(), 2);
        assert_eq!(list.combined_markup(), "a\n\nb\n\n");

        let swapped_in = vec![
            SelectedSection {
                title: "A".to_string(),
                markup: "a\n\n".to_string(),
            },
            SelectedSection {
                title: "X".to_string(),
                markup: "x\n\n".to_string(),
            },
        ];
        assert!(!list.reorder(swapped_in));
        assert_eq!(list.sections()[1].title, "B");
    }

    #[test]
    fn test_move_section_drag_semantics() {
        let mut list = SelectionList::default();
        list.select(&note("A", "a"));
        list.select(&note("B", "b"));
        list.select(&note("C", "c"));

        // Drag A below C: insertion index 3 in the original sequence.
        assert!(list.move_section(0, 3));
        let order: Vec<_> = list.sections().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);

        // Dropping an element onto its own slot changes nothing.
        assert!(!list.move_section(1, 1));
        assert!(!list.move_section(9, 0));
    }

    #[test]
    fn test_empty_list_has_empty_preview() {
        let list = SelectionList::default();
        assert!(list.is_empty());
        assert_eq!(list.combined_markup(), "");
    }
}
