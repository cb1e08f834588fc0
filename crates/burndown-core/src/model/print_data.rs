//! Application State
//!
//! Everything a share link carries. Each transition consumes the current
//! value and returns the next one; nothing edits the state in place.

use serde::{Deserialize, Serialize};

use super::{GuidelineSettings, ItemId, Period, WorkItem};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintData {
    pub period: Option<Period>,
    pub items: Vec<WorkItem>,
    pub guidelines: GuidelineSettings,
}

impl PrintData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_period(self, period: Option<Period>) -> Self {
        Self { period, ..self }
    }

    pub fn with_item_added(mut self, item: WorkItem) -> Self {
        self.items.push(item);
        self
    }

    /// Replace the item with the same id; unknown ids leave the state as is.
    pub fn with_item_updated(mut self, updated: WorkItem) -> Self {
        if let Some(slot) = self.items.iter_mut().find(|item| item.id == updated.id) {
            *slot = updated;
        }
        self
    }

    pub fn with_item_removed(mut self, id: &ItemId) -> Self {
        self.items.retain(|item| &item.id != id);
        self
    }

    pub fn with_guidelines(self, guidelines: GuidelineSettings) -> Self {
        Self { guidelines, ..self }
    }

    pub fn item(&self, id: &ItemId) -> Option<&WorkItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Sum of effective points over all items
    pub fn total_points(&self) -> u64 {
        self.items.iter().map(WorkItem::effective_points).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> PrintData {
        PrintData::new()
            .with_item_added(WorkItem::fixed(ItemId::new("a"), "Reading Report", 10))
            .with_item_added(WorkItem::repeating(ItemId::new("b"), "Kanji Drill", 1, 15, "page"))
    }

    #[test]
    fn test_new_state_is_empty() {
        let data = PrintData::new();
        assert!(data.period.is_none());
        assert!(data.items.is_empty());
        assert!(data.guidelines.is_default());
        assert_eq!(data.total_points(), 0);
    }

    #[test]
    fn test_total_points() {
        assert_eq!(sample().total_points(), 25);
    }

    #[test]
    fn test_update_and_remove() {
        let data = sample().with_item_updated(WorkItem::fixed(ItemId::new("a"), "Essay", 8));
        assert_eq!(data.item(&ItemId::new("a")).map(|i| i.name.as_str()), Some("Essay"));
        assert_eq!(data.total_points(), 23);

        let data = data.with_item_removed(&ItemId::new("b"));
        assert_eq!(data.items.len(), 1);
        assert_eq!(data.total_points(), 8);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let before = sample();
        let after = before.clone().with_item_updated(WorkItem::fixed(ItemId::new("zz"), "X", 1));
        assert_eq!(before, after);
    }

    #[test]
    fn test_set_period_and_guidelines() {
        let start = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
        let guidelines = GuidelineSettings {
            show_ideal_line: false,
            ..GuidelineSettings::default()
        };
        let data = sample()
            .with_period(Some(Period::new(start, end)))
            .with_guidelines(guidelines);
        assert_eq!(data.period.map(|p| p.day_count()), Some(43));
        assert!(!data.guidelines.show_ideal_line);
        assert_eq!(data.items.len(), 2);
    }
}
