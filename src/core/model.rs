//! Report model
//!
//! Every report, whichever variant produced it, is a list of frequency
//! entries plus the number of words that were counted.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::core::frequency::FrequencyTable;
use crate::reflect::{reflect_impl, reflect_struct};

reflect_struct! {
    /// An immutable (word, count) pair
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct FrequencyEntry implements [Debug, Serialize] {
        pub word: String,
        pub count: usize,
    }
}

reflect_impl! {
    impl FrequencyEntry {
        pub fn new(word: impl Into<String>, count: usize) -> Self {
            Self {
                word: word.into(),
                count,
            }
        }

        pub fn word(&self) -> &str {
            &self.word
        }

        pub fn count(&self) -> usize {
            self.count
        }

        /// Entries are ordered by count alone
        pub fn compare_count(&self, other: &Self) -> Ordering {
            self.count.cmp(&other.count)
        }
    }
}

/// A finished frequency report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    /// Words counted after filtering
    pub total_words: usize,

    /// Distinct words counted
    pub distinct_words: usize,

    /// Entries, most frequent first
    pub entries: Vec<FrequencyEntry>,
}

impl Report {
    pub fn from_table(table: &FrequencyTable) -> Self {
        Self {
            total_words: table.total(),
            distinct_words: table.len(),
            entries: table.sorted_descending(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_orders_by_count_only() {
        let a = FrequencyEntry::new("zebra", 3);
        let b = FrequencyEntry::new("apple", 1);
        assert_eq!(a.compare_count(&b), Ordering::Greater);
        assert_eq!(
            FrequencyEntry::new("x", 2).compare_count(&FrequencyEntry::new("y", 2)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_entry_accessors() {
        let entry = FrequencyEntry::new("cat", 2);
        assert_eq!(entry.word(), "cat");
        assert_eq!(entry.count(), 2);
    }

    #[test]
    fn test_report_from_table() {
        let table: FrequencyTable = ["cat", "cat", "sat", "ran"].iter().collect();
        let report = Report::from_table(&table);
        assert_eq!(report.total_words, 4);
        assert_eq!(report.distinct_words, 3);
        assert_eq!(report.entries[0], FrequencyEntry::new("cat", 2));
        assert_eq!(report.entries.len(), 3);
    }

    #[test]
    fn test_entry_serialization() {
        let json = serde_json::to_string(&FrequencyEntry::new("cat", 2)).unwrap();
        assert_eq!(json, r#"{"word":"cat","count":2}"#);
    }
}
