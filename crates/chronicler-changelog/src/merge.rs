//! Merging per-section categories

use serde::Serialize;

use crate::types::{CategoryCount, CategoryMap};

/// Categories merged across all sections of a release
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergedChanges {
    /// Category to items, first-seen category order
    pub categories: CategoryMap,
    /// Total number of items
    pub total: usize,
    /// Item count per category
    pub counts: Vec<CategoryCount>,
}

impl MergedChanges {
    /// Check if nothing was recognized
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Merge section results in processing order.
///
/// Items are appended as they come; nothing is sorted or deduplicated.
pub fn merge<I>(sections: I) -> MergedChanges
where
    I: IntoIterator<Item = CategoryMap>,
{
    let mut categories = CategoryMap::new();
    for section in sections {
        for (category, items) in section.iter() {
            categories.extend(category, items.iter().cloned());
        }
    }

    let categories = categories.without_empty();
    MergedChanges {
        total: categories.total_items(),
        counts: categories.counts(),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeItem;

    fn section(pairs: &[(&str, &str)]) -> CategoryMap {
        let mut map = CategoryMap::new();
        for (category, text) in pairs {
            map.push(category, ChangeItem::new(*text));
        }
        map
    }

    #[test]
    fn test_merge_preserves_section_order() {
        let merged = merge(vec![
            section(&[("Bug Fixes", "Fix crash"), ("Tests", "Add test")]),
            section(&[("New Features", "Dark mode"), ("Bug Fixes", "Fix leak")]),
        ]);

        let fixes: Vec<String> = merged
            .categories
            .get("Bug Fixes")
            .unwrap()
            .iter()
            .map(ChangeItem::text)
            .collect();
        assert_eq!(fixes, vec!["Fix crash", "Fix leak"]);
        assert_eq!(
            merged.categories.categories().collect::<Vec<_>>(),
            vec!["Bug Fixes", "Tests", "New Features"]
        );
        assert_eq!(merged.total, 4);
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let merged = merge(vec![
            section(&[("Chores", "Bump deps")]),
            section(&[("Chores", "Bump deps")]),
        ]);
        assert_eq!(merged.total, 2);
        assert_eq!(
            merged.counts,
            vec![CategoryCount { category: "Chores".into(), count: 2 }]
        );
    }

    #[test]
    fn test_merge_nothing() {
        let merged = merge(Vec::<CategoryMap>::new());
        assert!(merged.is_empty());
        assert!(merged.categories.is_empty());
        assert!(merged.counts.is_empty());

        let mut only_empty = CategoryMap::new();
        only_empty.ensure("Bug Fixes");
        assert!(merge(vec![only_empty]).categories.is_empty());
    }
}
