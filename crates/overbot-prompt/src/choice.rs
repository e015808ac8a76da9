//! Numbered selection from a list of entries.

use crate::marker::{Marker, MarkerSet};
use crate::prompt::{Prompt, PromptOptions};
use std::fmt::Display;

/// Lists entries as `1. first`, `2. second`, ... and returns the one whose
/// keycap the invoker picks.
///
/// Entries must not be empty. Discord only has keycap emoji for 1 through
/// 9, so longer lists cannot attach markers past the ninth and those
/// entries can only be picked if the user adds the reaction by hand.
#[derive(Debug, Clone)]
pub struct ChoicePrompt<T = String> {
    entries: Vec<T>,
    options: PromptOptions,
    markers: MarkerSet<usize>,
}

impl<T> ChoicePrompt<T> {
    /// Creates the prompt.
    pub fn new(entries: Vec<T>, options: PromptOptions) -> Self {
        let markers = (0..entries.len()).fold(MarkerSet::new(), |set, index| {
            set.with(Marker::keycap(index + 1), index)
        });
        Self {
            entries,
            options,
            markers,
        }
    }

    /// The entries, in display order.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

impl<T> Prompt for ChoicePrompt<T>
where
    T: Display + Clone + Send + Sync,
{
    type Value = usize;
    type Output = T;

    fn options(&self) -> &PromptOptions {
        &self.options
    }

    fn markers(&self) -> &MarkerSet<Self::Value> {
        &self.markers
    }

    fn body(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| format!("{}. {entry}", index + 1))
            .collect()
    }

    fn resolve(&self, marker: &Marker) -> Option<Self::Output> {
        let index = *self.markers.get(marker)?;
        self.entries.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> ChoicePrompt {
        ChoicePrompt::new(
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            PromptOptions::default(),
        )
    }

    #[test]
    fn test_body_numbers_entries() {
        assert_eq!(prompt().body(), vec!["1. A", "2. B", "3. C"]);
    }

    #[test]
    fn test_second_keycap_resolves_to_second_entry() {
        assert_eq!(prompt().resolve(&Marker::keycap(2)), Some("B".to_string()));
    }

    #[test]
    fn test_foreign_markers_do_not_resolve() {
        let prompt = prompt();
        assert_eq!(prompt.resolve(&Marker::keycap(4)), None);
        assert_eq!(prompt.resolve(&"❌".into()), None);
        assert!(!prompt.markers().contains(&Marker::keycap(0)));
    }

    #[test]
    fn test_no_cancel_marker() {
        let prompt = prompt();
        assert_eq!(prompt.markers().len(), 3);
        assert_eq!(prompt.markers().selectable().count(), 3);
    }

    #[test]
    fn test_non_string_entries_use_display() {
        let prompt = ChoicePrompt::new(vec![10u32, 20], PromptOptions::default());
        assert_eq!(prompt.body(), vec!["1. 10", "2. 20"]);
        assert_eq!(prompt.resolve(&Marker::keycap(1)), Some(10));
    }
}
