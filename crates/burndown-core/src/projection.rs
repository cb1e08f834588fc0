//! Progress Projection
//!
//! Turns the period and the homework total into the two reference lines of
//! the burndown chart:
//! - last-minute line: straight from the total on day one to zero on the
//!   last day
//! - ideal line: reaches zero `ideal_days_before_end` days before the end
//!   and stays there
//!
//! A period of a single day projects straight to zero.

use chrono::NaiveDate;

use crate::model::{GuidelineSettings, Period, PrintData, WorkItem};

/// Periods up to this many days label every day on the x axis.
const LABEL_EVERY_DAY_MAX: usize = 10;

/// One horizontal line of the coloring grid, one per point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub value: u64,
    /// Set on step multiples and on the total
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub days: Vec<NaiveDate>,
    pub total_points: u64,
    /// Remaining points per day on the ideal line, when shown
    pub ideal_line: Option<Vec<f64>>,
    /// Remaining points per day on the last-minute line, when shown
    pub last_minute_line: Option<Vec<f64>>,
}

impl Projection {
    pub fn new(period: &Period, items: &[WorkItem], guidelines: &GuidelineSettings) -> Self {
        let days: Vec<NaiveDate> = period.days().collect();
        let total_points: u64 = items.iter().map(WorkItem::effective_points).sum();
        let total = total_points as f64;
        let day_count = days.len();

        let ideal_line = guidelines.show_ideal_line.then(|| {
            let end = ideal_end_index(day_count, guidelines.ideal_days_before_end);
            (0..day_count).map(|i| descend(total, i, end)).collect()
        });

        let last_minute_line = guidelines.show_last_minute_line.then(|| {
            let end = day_count.saturating_sub(1);
            (0..day_count).map(|i| descend(total, i, end)).collect()
        });

        Self {
            days,
            total_points,
            ideal_line,
            last_minute_line,
        }
    }

    /// Projection of the current state, `None` until a period is set.
    pub fn from_print_data(data: &PrintData) -> Option<Self> {
        data.period
            .as_ref()
            .map(|period| Self::new(period, &data.items, &data.guidelines))
    }

    /// `M/d` labels for the x axis, thinned out to roughly ten on long
    /// periods; the last day is always labelled.
    pub fn day_labels(&self) -> Vec<String> {
        let count = self.days.len();
        let interval = if count <= LABEL_EVERY_DAY_MAX {
            1
        } else {
            (count / 10).max(3)
        };

        self.days
            .iter()
            .enumerate()
            .map(|(i, day)| {
                if i % interval == 0 || i + 1 == count {
                    day.format("%-m/%-d").to_string()
                } else {
                    String::new()
                }
            })
            .collect()
    }

    /// Distance between labelled y ticks
    pub fn step_size(&self) -> u64 {
        step_size(self.total_points)
    }

    /// Grid rows from the goal (0) up to the start (total), one per point.
    /// Only step multiples and the start row carry a label.
    pub fn grid_rows(&self) -> Vec<GridRow> {
        let step = self.step_size();
        (0..=self.total_points)
            .map(|value| {
                let label = if value == self.total_points {
                    Some(format!("{}pt Start", value))
                } else if value == 0 {
                    Some(format!("{}pt Goal", value))
                } else if value % step == 0 {
                    Some(format!("{}pt", value))
                } else {
                    None
                };
                GridRow { value, label }
            })
            .collect()
    }
}

/// Index of the day the ideal line reaches zero.
pub fn ideal_end_index(day_count: usize, ideal_days_before_end: u32) -> usize {
    day_count.saturating_sub(ideal_days_before_end as usize + 1)
}

/// Labelled-tick spacing for a chart whose y axis ends at `total_points`.
pub fn step_size(total_points: u64) -> u64 {
    match total_points {
        0..=10 => 1,
        11..=50 => 5,
        51..=100 => 10,
        101..=200 => 20,
        201..=500 => 50,
        _ => 100,
    }
}

/// Remaining points on day `i` of a line falling from `total` to zero at `end`.
fn descend(total: f64, i: usize, end: usize) -> f64 {
    if i >= end {
        0.0
    } else {
        total * (end - i) as f64 / end as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn summer() -> (Period, Vec<WorkItem>) {
        let period = Period::new(date(2025, 7, 20), date(2025, 8, 31));
        let items = vec![
            WorkItem::fixed(ItemId::new("a"), "Reading Report", 10),
            WorkItem::repeating(ItemId::new("b"), "Kanji Drill", 1, 15, "page"),
        ];
        (period, items)
    }

    #[test]
    fn test_last_minute_line() {
        let (period, items) = summer();
        let projection = Projection::new(&period, &items, &GuidelineSettings::default());
        let line = projection.last_minute_line.unwrap();

        assert_eq!(projection.total_points, 25);
        assert_eq!(line.len(), 43);
        assert_eq!(line[0], 25.0);
        assert_eq!(line[42], 0.0);
        assert!(line.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_ideal_line_reaches_zero_early() {
        let (period, items) = summer();
        let projection = Projection::new(&period, &items, &GuidelineSettings::default());
        let line = projection.ideal_line.unwrap();

        let end = ideal_end_index(43, 7);
        assert_eq!(end, 35);
        assert_eq!(line[0], 25.0);
        assert!(line[end - 1] > 0.0);
        assert!(line[end..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_hidden_lines() {
        let (period, items) = summer();
        let guidelines = GuidelineSettings {
            show_ideal_line: false,
            show_last_minute_line: false,
            ideal_days_before_end: 7,
        };
        let projection = Projection::new(&period, &items, &guidelines);
        assert!(projection.ideal_line.is_none());
        assert!(projection.last_minute_line.is_none());
    }

    #[test]
    fn test_short_period_ideal_line_is_flat_zero() {
        let period = Period::new(date(2025, 7, 20), date(2025, 7, 24));
        let items = vec![WorkItem::fixed(ItemId::new("a"), "Craft", 12)];
        let projection = Projection::new(&period, &items, &GuidelineSettings::default());
        assert_eq!(projection.ideal_line.unwrap(), vec![0.0; 5]);
    }

    #[test]
    fn test_single_day_period() {
        let period = Period::new(date(2025, 7, 20), date(2025, 7, 20));
        let items = vec![WorkItem::fixed(ItemId::new("a"), "Craft", 12)];
        let projection = Projection::new(&period, &items, &GuidelineSettings::default());
        assert_eq!(projection.last_minute_line.unwrap(), vec![0.0]);
    }

    #[test]
    fn test_inverted_period_has_no_points() {
        let period = Period::new(date(2025, 8, 31), date(2025, 7, 20));
        let projection = Projection::new(&period, &[], &GuidelineSettings::default());
        assert!(projection.days.is_empty());
        assert_eq!(projection.last_minute_line.as_deref(), Some(&[][..]));
        assert!(projection.day_labels().is_empty());
    }

    #[test]
    fn test_day_labels_thinned() {
        let (period, items) = summer();
        let labels = Projection::new(&period, &items, &GuidelineSettings::default()).day_labels();
        assert_eq!(labels.len(), 43);
        assert_eq!(labels[0], "7/20");
        assert_eq!(labels[1], "");
        assert_eq!(labels[4], "7/24");
        assert_eq!(labels[42], "8/31");
        assert_eq!(labels.iter().filter(|l| !l.is_empty()).count(), 12);
    }

    #[test]
    fn test_short_period_labels_every_day() {
        let period = Period::new(date(2025, 7, 20), date(2025, 7, 29));
        let labels = Projection::new(&period, &[], &GuidelineSettings::default()).day_labels();
        assert!(labels.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn test_step_size() {
        assert_eq!(step_size(0), 1);
        assert_eq!(step_size(10), 1);
        assert_eq!(step_size(25), 5);
        assert_eq!(step_size(100), 10);
        assert_eq!(step_size(150), 20);
        assert_eq!(step_size(500), 50);
        assert_eq!(step_size(501), 100);
    }

    fn labelled(rows: &[GridRow]) -> Vec<(u64, &str)> {
        rows.iter()
            .filter_map(|row| row.label.as_deref().map(|label| (row.value, label)))
            .collect()
    }

    #[test]
    fn test_grid_rows() {
        let (period, items) = summer();
        let rows = Projection::new(&period, &items, &GuidelineSettings::default()).grid_rows();
        assert_eq!(rows.len(), 26);
        assert_eq!(
            labelled(&rows),
            vec![
                (0, "0pt Goal"),
                (5, "5pt"),
                (10, "10pt"),
                (15, "15pt"),
                (20, "20pt"),
                (25, "25pt Start"),
            ]
        );
    }

    #[test]
    fn test_grid_rows_total_off_the_step() {
        let (period, _) = summer();
        let items = vec![WorkItem::fixed(ItemId::new("a"), "Research Project", 23)];
        let rows = Projection::new(&period, &items, &GuidelineSettings::default()).grid_rows();

        let values: Vec<u64> = rows.iter().map(|row| row.value).collect();
        assert_eq!(values, (0..=23).collect::<Vec<_>>());
        assert_eq!(rows[23].label.as_deref(), Some("23pt Start"));
        assert_eq!(rows[22].label, None);
        assert_eq!(rows[20].label.as_deref(), Some("20pt"));
        assert_eq!(labelled(&rows).len(), 6);
    }

    #[test]
    fn test_grid_rows_without_points() {
        let (period, _) = summer();
        let rows = Projection::new(&period, &[], &GuidelineSettings::default()).grid_rows();
        assert_eq!(rows, vec![GridRow { value: 0, label: Some("0pt Start".to_string()) }]);
    }

    #[test]
    fn test_from_print_data_needs_period() {
        assert!(Projection::from_print_data(&PrintData::new()).is_none());
    }
}
