//! Homework Presets
//!
//! Common summer homework, one click away in the homework form.

use crate::model::{ItemId, WorkItem, Workload};

pub const CATEGORY_LANGUAGE_MATH: &str = "Language & Math";
pub const CATEGORY_SCIENCE_SOCIAL: &str = "Science & Social Studies";
pub const CATEGORY_RESEARCH_ART: &str = "Research & Art";

pub const CATEGORIES: &[&str] = &[
    CATEGORY_LANGUAGE_MATH,
    CATEGORY_SCIENCE_SOCIAL,
    CATEGORY_RESEARCH_ART,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetLoad {
    Fixed { points: u32 },
    Repeating {
        points_per_unit: u32,
        units: u32,
        unit_name: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub load: PresetLoad,
}

impl Preset {
    pub fn to_work_item(&self, id: ItemId) -> WorkItem {
        let workload = match self.load {
            PresetLoad::Fixed { points } => Workload::Fixed { points },
            PresetLoad::Repeating {
                points_per_unit,
                units,
                unit_name,
            } => Workload::Repeating {
                points_per_unit,
                units,
                unit_name: unit_name.to_string(),
            },
        };
        WorkItem {
            id,
            name: self.name.to_string(),
            workload,
        }
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        key: "kanji",
        name: "Kanji Drill",
        description: "One page at a time",
        category: CATEGORY_LANGUAGE_MATH,
        load: PresetLoad::Repeating { points_per_unit: 1, units: 15, unit_name: "page" },
    },
    Preset {
        key: "reading",
        name: "Reading Report",
        description: "Read a book and write about it",
        category: CATEGORY_LANGUAGE_MATH,
        load: PresetLoad::Fixed { points: 10 },
    },
    Preset {
        key: "diary",
        name: "Diary",
        description: "Write down what happened each day",
        category: CATEGORY_LANGUAGE_MATH,
        load: PresetLoad::Repeating { points_per_unit: 1, units: 20, unit_name: "day" },
    },
    Preset {
        key: "math",
        name: "Math Drill",
        description: "Build up calculation skills",
        category: CATEGORY_LANGUAGE_MATH,
        load: PresetLoad::Repeating { points_per_unit: 1, units: 15, unit_name: "page" },
    },
    Preset {
        key: "calculation",
        name: "Calculation Workbook",
        description: "Take on the harder problems",
        category: CATEGORY_LANGUAGE_MATH,
        load: PresetLoad::Repeating { points_per_unit: 1, units: 10, unit_name: "page" },
    },
    Preset {
        key: "research",
        name: "Research Project",
        description: "Dig into something interesting",
        category: CATEGORY_SCIENCE_SOCIAL,
        load: PresetLoad::Fixed { points: 20 },
    },
    Preset {
        key: "observation",
        name: "Observation Diary",
        description: "Watch plants or insects grow",
        category: CATEGORY_SCIENCE_SOCIAL,
        load: PresetLoad::Repeating { points_per_unit: 1, units: 10, unit_name: "day" },
    },
    Preset {
        key: "art",
        name: "Painting / Poster",
        description: "Contest entries and the like",
        category: CATEGORY_RESEARCH_ART,
        load: PresetLoad::Fixed { points: 8 },
    },
    Preset {
        key: "craft",
        name: "Craft",
        description: "Summer craft project",
        category: CATEGORY_RESEARCH_ART,
        load: PresetLoad::Fixed { points: 12 },
    },
    Preset {
        key: "calligraphy",
        name: "Calligraphy",
        description: "Brush writing homework",
        category: CATEGORY_RESEARCH_ART,
        load: PresetLoad::Fixed { points: 5 },
    },
];

pub fn presets_in(category: &str) -> impl Iterator<Item = &'static Preset> + '_ {
    PRESETS.iter().filter(move |preset| preset.category == category)
}

pub fn find(key: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_has_known_category() {
        for preset in PRESETS {
            assert!(CATEGORIES.contains(&preset.category), "{}", preset.key);
        }
        let total: usize = CATEGORIES.iter().map(|c| presets_in(c).count()).sum();
        assert_eq!(total, PRESETS.len());
    }

    #[test]
    fn test_to_work_item() {
        let kanji = find("kanji").unwrap().to_work_item(ItemId::new("x"));
        assert_eq!(kanji.name, "Kanji Drill");
        assert_eq!(kanji.effective_points(), 15);

        let craft = find("craft").unwrap().to_work_item(ItemId::new("y"));
        assert_eq!(craft.effective_points(), 12);
        assert!(!craft.workload.is_repeating());
    }

    #[test]
    fn test_unknown_key() {
        assert!(find("nope").is_none());
    }
}
