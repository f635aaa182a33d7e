//! Changelog types

use chrono::NaiveDate;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::vocabulary::UNRELEASED;

/// One described change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeItem {
    /// Title line, present for heading-delimited entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body lines in source order
    pub lines: Vec<String>,
}

impl ChangeItem {
    /// Create a single-line item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            title: None,
            lines: vec![text.into()],
        }
    }

    /// Create a titled item with no body yet
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            lines: Vec::new(),
        }
    }

    /// Append a body line
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Title and body flattened to one line of text
    pub fn text(&self) -> String {
        self.title
            .iter()
            .chain(self.lines.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the item carries any text
    pub fn is_empty(&self) -> bool {
        self.title.as_deref().map_or(true, str::is_empty)
            && self.lines.iter().all(String::is_empty)
    }
}

/// Item count for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category label
    pub category: String,
    /// Number of items
    pub count: usize,
}

/// Category label to items, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    entries: Vec<(String, Vec<ChangeItem>)>,
}

impl CategoryMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Items for a category
    pub fn get(&self, category: &str) -> Option<&[ChangeItem]> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, items)| items.as_slice())
    }

    /// Check if a category is present (even with no items)
    pub fn contains(&self, category: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == category)
    }

    /// Make sure a category exists, creating an empty list on first sight
    pub fn ensure(&mut self, category: &str) -> &mut Vec<ChangeItem> {
        let index = match self.entries.iter().position(|(name, _)| name == category) {
            Some(index) => index,
            None => {
                self.entries.push((category.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// Append one item to a category
    pub fn push(&mut self, category: &str, item: ChangeItem) {
        self.ensure(category).push(item);
    }

    /// Append items to a category, keeping their order
    pub fn extend<I: IntoIterator<Item = ChangeItem>>(&mut self, category: &str, items: I) {
        self.ensure(category).extend(items);
    }

    /// Iterate categories in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ChangeItem])> {
        self.entries
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Category labels in insertion order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of categories, including empty ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no categories at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of items across categories
    pub fn total_items(&self) -> usize {
        self.entries.iter().map(|(_, items)| items.len()).sum()
    }

    /// Per-category item counts, in insertion order
    pub fn counts(&self) -> Vec<CategoryCount> {
        self.entries
            .iter()
            .map(|(name, items)| CategoryCount {
                category: name.clone(),
                count: items.len(),
            })
            .collect()
    }

    /// Copy without categories that have no items
    pub fn without_empty(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(_, items)| !items.is_empty())
                .cloned()
                .collect(),
        }
    }
}

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, items) in &self.entries {
            map.serialize_entry(name, items)?;
        }
        map.end()
    }
}

/// One `## [version]` block of a changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionBlock {
    /// Version label, or `Unreleased`
    pub version: String,
    /// Release date
    pub date: Option<NaiveDate>,
    /// Categories and their items
    pub categories: CategoryMap,
    /// Source text the block was parsed from
    #[serde(rename = "raw_content")]
    pub raw: String,
}

impl VersionBlock {
    /// Create a block with no categories
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: None,
            categories: CategoryMap::new(),
            raw: String::new(),
        }
    }

    /// Set the date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the categories
    pub fn with_categories(mut self, categories: CategoryMap) -> Self {
        self.categories = categories;
        self
    }

    /// Check if this is the Unreleased block
    pub fn is_unreleased(&self) -> bool {
        self.version.eq_ignore_ascii_case(UNRELEASED)
    }

    /// Check if any category has items
    pub fn has_changes(&self) -> bool {
        self.change_count() > 0
    }

    /// Total number of items
    pub fn change_count(&self) -> usize {
        self.categories.total_items()
    }
}
