//! Markers and ordered marker sets.

use std::fmt;

/// A reaction emoji usable as a selectable option.
///
/// Stored in the textual form Discord uses when rendering a reaction:
/// the Unicode sequence itself, or `<:name:id>` for custom emoji.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker(String);

impl Marker {
    /// Creates a marker from its textual form.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The keycap emoji for `index`, e.g. `1⃣`.
    pub fn keycap(index: usize) -> Self {
        Self(format!("{index}\u{20e3}"))
    }

    /// The textual form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Marker {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Marker {
    fn from(text: String) -> Self {
        Self(text)
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    marker: Marker,
    value: V,
    cancel: bool,
}

/// An ordered mapping from markers to the values they select.
///
/// Insertion order is display and attachment order. Re-inserting an
/// existing marker replaces its value in place.
#[derive(Debug, Clone)]
pub struct MarkerSet<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Default for MarkerSet<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> MarkerSet<V> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a selectable marker.
    #[must_use]
    pub fn with(mut self, marker: impl Into<Marker>, value: V) -> Self {
        self.insert(marker.into(), value, false);
        self
    }

    /// Adds the sentinel marker meaning "no selection".
    #[must_use]
    pub fn with_cancel(mut self, marker: impl Into<Marker>, value: V) -> Self {
        self.insert(marker.into(), value, true);
        self
    }

    fn insert(&mut self, marker: Marker, value: V, cancel: bool) {
        match self.entries.iter_mut().find(|entry| entry.marker == marker) {
            Some(entry) => {
                entry.value = value;
                entry.cancel = cancel;
            }
            None => self.entries.push(Entry {
                marker,
                value,
                cancel,
            }),
        }
    }

    /// Whether `marker` belongs to the set.
    pub fn contains(&self, marker: &Marker) -> bool {
        self.entries.iter().any(|entry| &entry.marker == marker)
    }

    /// The value selected by `marker`.
    pub fn get(&self, marker: &Marker) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| &entry.marker == marker)
            .map(|entry| &entry.value)
    }

    /// Whether `marker` is the cancel sentinel.
    pub fn is_cancel(&self, marker: &Marker) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.cancel && &entry.marker == marker)
    }

    /// All markers in order, cancel included.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.entries.iter().map(|entry| &entry.marker)
    }

    /// Markers and values in order, cancel excluded.
    pub fn selectable(&self) -> impl Iterator<Item = (&Marker, &V)> {
        self.entries
            .iter()
            .filter(|entry| !entry.cancel)
            .map(|entry| (&entry.marker, &entry.value))
    }

    /// Number of markers, cancel included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_insertion_order() {
        let set = MarkerSet::new().with("b", 2).with("a", 1).with_cancel("x", 0);
        let markers: Vec<_> = set.markers().map(Marker::as_str).collect();
        assert_eq!(markers, vec!["b", "a", "x"]);
    }

    #[test]
    fn test_reinsert_replaces_value_in_place() {
        let set = MarkerSet::new().with("a", 1).with("b", 2).with("a", 3);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(&"a".into()), Some(&3));
        assert_eq!(set.markers().next(), Some(&Marker::from("a")));
    }

    #[test]
    fn test_cancel_is_excluded_from_selectable() {
        let set = MarkerSet::new().with("a", Some(1)).with_cancel("x", None);
        assert!(set.contains(&"x".into()));
        assert!(set.is_cancel(&"x".into()));
        assert!(!set.is_cancel(&"a".into()));
        assert_eq!(set.selectable().count(), 1);
    }

    #[test]
    fn test_keycap() {
        assert_eq!(Marker::keycap(3).as_str(), "3\u{20e3}");
    }
}
