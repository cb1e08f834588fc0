//! Guideline Settings
//!
//! Which reference lines the chart draws.

use serde::{Deserialize, Serialize};

use crate::defaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineSettings {
    pub show_ideal_line: bool,
    pub show_last_minute_line: bool,
    /// Days before the end by which the ideal line reaches zero, at least 1
    pub ideal_days_before_end: u32,
}

impl Default for GuidelineSettings {
    fn default() -> Self {
        Self {
            show_ideal_line: defaults::SHOW_IDEAL_LINE,
            show_last_minute_line: defaults::SHOW_LAST_MINUTE_LINE,
            ideal_days_before_end: defaults::IDEAL_DAYS_BEFORE_END,
        }
    }
}

impl GuidelineSettings {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Same settings with the ideal days clamped to at least 1.
    pub fn with_ideal_days_before_end(self, days: u32) -> Self {
        Self {
            ideal_days_before_end: days.max(1),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GuidelineSettings::default();
        assert!(settings.show_ideal_line);
        assert!(settings.show_last_minute_line);
        assert_eq!(settings.ideal_days_before_end, 7);
        assert!(settings.is_default());
    }

    #[test]
    fn test_ideal_days_clamped() {
        let settings = GuidelineSettings::default().with_ideal_days_before_end(0);
        assert_eq!(settings.ideal_days_before_end, 1);
        assert!(!settings.is_default());
    }
}
