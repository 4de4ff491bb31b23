//! Filter/search projection
//!
//! Pure derivation of the display list from the store's collection.
//! The result order is inherited from the collection order, which
//! already reflects star partitioning and manual reordering.

use crate::store::Note;

/// Active filter category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    /// "All Notes" — no further filter
    All,
    /// Only starred notes
    Starred,
    /// Notes carrying a specific label
    Label(String),
}

impl Category {
    fn matches(&self, note: &Note) -> bool {
        match self {
            Category::All => true,
            Category::Starred => note.starred,
            Category::Label(label) => note.labels.iter().any(|l| l == label),
        }
    }
}

/// Select the ordered subsequence of notes visible under the given
/// query, category, and archived/active toggle. The query matches
/// case-insensitively against title or content; a blank query matches
/// everything.
pub fn visible_notes<'a>(
    notes: &'a [Note],
    query: &str,
    category: &Category,
    show_archived: bool,
) -> Vec<&'a Note> {
    let query = query.trim().to_lowercase();

    notes
        .iter()
        .filter(|note| note.archived == show_archived)
        .filter(|note| {
            query.is_empty()
                || note.title.to_lowercase().contains(&query)
                || note.content.to_lowercase().contains(&query)
        })
        .filter(|note| category.matches(note))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{NoteDraft, NoteStore};

    fn store_with_fixture() -> NoteStore {
        let mut store = NoteStore::new();
        store.add(NoteDraft {
            title: "Groceries".into(),
            content: "Buy Milk".into(),
            labels: vec!["home".into()],
            ..Default::default()
        });
        store.add(NoteDraft {
            title: "Taxes".into(),
            content: "File returns".into(),
            starred: true,
            ..Default::default()
        });
        let archived = store.add(NoteDraft {
            title: "Old plans".into(),
            content: "Trip notes".into(),
            ..Default::default()
        });
        store.archive(&archived.id).unwrap();
        store
    }

    fn titles(notes: &[&Note]) -> Vec<String> {
        notes.iter().map(|n| n.title.clone()).collect()
    }

    #[test]
    fn test_archived_partition() {
        let store = store_with_fixture();

        let active = visible_notes(store.notes(), "", &Category::All, false);
        assert_eq!(titles(&active), vec!["Groceries", "Taxes"]);

        let archived = visible_notes(store.notes(), "", &Category::All, true);
        assert_eq!(titles(&archived), vec!["Old plans"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_or_content() {
        let store = store_with_fixture();

        let by_content = visible_notes(store.notes(), "milk", &Category::All, false);
        assert_eq!(titles(&by_content), vec!["Groceries"]);

        let by_title = visible_notes(store.notes(), "TAX", &Category::All, false);
        assert_eq!(titles(&by_title), vec!["Taxes"]);
    }

    #[test]
    fn test_starred_category() {
        let store = store_with_fixture();

        let starred = visible_notes(store.notes(), "", &Category::Starred, false);
        assert_eq!(titles(&starred), vec!["Taxes"]);
    }

    #[test]
    fn test_label_category() {
        let store = store_with_fixture();

        let home = visible_notes(
            store.notes(),
            "",
            &Category::Label("home".to_string()),
            false,
        );
        assert_eq!(titles(&home), vec!["Groceries"]);

        let none = visible_notes(
            store.notes(),
            "",
            &Category::Label("work".to_string()),
            false,
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_order_inherited_from_collection() {
        let mut store = store_with_fixture();
        store.reorder(0, 1).unwrap();

        let active = visible_notes(store.notes(), "", &Category::All, false);
        assert_eq!(titles(&active), vec!["Taxes", "Groceries"]);
    }
}
