//! Catalog view model: filtering, sorting, and grouping notes by category

use serde::{Deserialize, Serialize};

use super::catalog::Note;

/// Sort direction for the catalog listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Short label for the sort toggle button
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "A-Z",
            Self::Descending => "Z-A",
        }
    }
}

/// Filter, sort, and group the catalog for display.
///
/// Notes whose title contains the query (case-insensitively) are kept,
/// sorted by (category, title) under the active direction, then bucketed
/// by category. Bucket order is the order categories first appear in the
/// sorted sequence. Descending uses descending comparators on both keys
/// rather than reversing the ascending result, so ties keep a stable
/// meaning if titles are ever non-unique.
pub fn grouped<'a>(
    notes: &'a [Note],
    query: &str,
    direction: SortDirection,
) -> Vec<(&'a str, Vec<&'a Note>)> {
    let query = query.to_lowercase();

    let mut filtered: Vec<&Note> = notes
        .iter()
        .filter(|note| note.title.to_lowercase().contains(&query))
        .collect();

    filtered.sort_by(|a, b| match direction {
        SortDirection::Ascending => a
            .category
            .cmp(&b.category)
            .then_with(|| a.title.cmp(&b.title)),
        SortDirection::Descending => b
            .category
            .cmp(&a.category)
            .then_with(|| b.title.cmp(&a.title)),
    });

    // Notes sharing a category are adjacent after the sort, so a bucket
    // only ever extends the most recent one.
    let mut buckets: Vec<(&str, Vec<&Note>)> = Vec::new();
    for note in filtered {
        match buckets.last_mut() {
            Some((category, bucket)) if *category == note.category => bucket.push(note),
            _ => buckets.push((note.category.as_str(), vec![note])),
        }
    }
    buckets
}
