//! Insertion-ordered set of URL strings.

use std::collections::HashSet;

/// Keeps the first occurrence of every key, in the order first seen.
///
/// Keys compare by exact string equality: `https://a/x` and `https://a/x/`
/// are distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item` if unseen. Returns `true` when it was added.
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.seen.contains(&item) {
            return false;
        }
        self.seen.insert(item.clone());
        self.items.push(item);
        true
    }

    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.seen.contains(item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<S: Into<String>> Extend<S> for OrderedSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let set: OrderedSet = ["b", "a", "b", "c", "a"].into_iter().collect();
        assert_eq!(set.into_vec(), vec!["b", "a", "c"]);
    }

    #[test]
    fn insert_reports_novelty() {
        let mut set = OrderedSet::new();
        assert!(set.insert("https://offers.greatclips.com/abc"));
        assert!(!set.insert("https://offers.greatclips.com/abc"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("https://offers.greatclips.com/abc"));
    }

    #[test]
    fn trailing_slash_and_query_are_distinct_keys() {
        let set: OrderedSet = [
            "https://offers.greatclips.com/abc",
            "https://offers.greatclips.com/abc/",
            "https://offers.greatclips.com/abc?ref=x",
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn empty_set() {
        let set = OrderedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
