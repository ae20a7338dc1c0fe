//! Frequency table - word to count accumulation

use std::collections::HashMap;

use crate::core::model::FrequencyEntry;

#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at 1 on first sight, add 1 afterwards
    pub fn increment(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
    }

    #[cfg(test)]
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// All entries, highest count first; equal counts are ordered by word
    pub fn sorted_descending(&self) -> Vec<FrequencyEntry> {
        let mut entries: Vec<FrequencyEntry> = self
            .counts
            .iter()
            .map(|(word, &count)| FrequencyEntry::new(word.clone(), count))
            .collect();
        entries.sort_by(|a, b| b.compare_count(a).then_with(|| a.word.cmp(&b.word)));
        entries
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut table = FrequencyTable::new();
        for word in iter {
            table.increment(word.as_ref());
        }
        table
    }
}
