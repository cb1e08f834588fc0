//! Compaction Codec
//!
//! Maps [`PrintData`] to and from its minimal wire form. Field names shrink
//! to single letters, dates become epoch milliseconds, items become
//! positional tuples and every value equal to its default (see
//! [`crate::defaults`]) is left out.
//!
//! ```text
//! {
//!   "d": [startMs, endMs],                      // absent: no period
//!   "h": [[0, name, points],                    // fixed
//!         [1, name, perUnit, units, unitName?]],// repeating
//!   "g": [["si", 0], ["sl", 0], ["id", days]]   // non-default guidelines only
//! }
//! ```
//!
//! Item ids are not carried; decoded items are numbered by position.

use std::fmt;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::defaults;
use crate::error::{CodecError, CodecResult};
use crate::model::{GuidelineSettings, ItemId, Period, PrintData, WorkItem, Workload};

const TAG_FIXED: i64 = 0;
const TAG_REPEATING: i64 = 1;

const KEY_HIDE_IDEAL: &str = "si";
const KEY_HIDE_LAST_MINUTE: &str = "sl";
const KEY_IDEAL_DAYS: &str = "id";

/// Wire form of [`PrintData`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactState {
    #[serde(rename = "d", default, skip_serializing_if = "Option::is_none")]
    pub period: Option<[i64; 2]>,
    #[serde(rename = "h", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CompactItem>>,
    #[serde(rename = "g", default, skip_serializing_if = "Option::is_none")]
    pub guidelines: Option<Vec<GuidelineOverride>>,
}

/// Positional tuple of one work item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompactItem {
    /// `[0, name, points]`
    Fixed { name: String, points: u32 },
    /// `[1, name, pointsPerUnit, units]` or `[1, name, pointsPerUnit, units, unitName]`
    Repeating {
        name: String,
        points_per_unit: u32,
        units: u32,
        unit_name: Option<String>,
    },
}

/// One `[key, value]` pair of a non-default guideline setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuidelineOverride {
    /// `["si", 0]`
    HideIdealLine,
    /// `["sl", 0]`
    HideLastMinuteLine,
    /// `["id", days]`
    IdealDaysBeforeEnd(u32),
    /// Key written by a newer version; ignored on decode
    Unknown(String),
}

impl CompactState {
    pub fn from_print_data(data: &PrintData) -> Self {
        let period = data
            .period
            .map(|period| [period.start_instant(), period.end_instant()]);
        let items: Vec<CompactItem> = data.items.iter().map(CompactItem::from_item).collect();
        let overrides = GuidelineOverride::from_settings(&data.guidelines);

        Self {
            period,
            items: (!items.is_empty()).then_some(items),
            guidelines: (!overrides.is_empty()).then_some(overrides),
        }
    }

    /// Rebuild the application state, substituting defaults for every
    /// omitted field.
    ///
    /// Fails only when a period instant lies outside the representable date
    /// range.
    pub fn into_print_data(self) -> CodecResult<PrintData> {
        let mut guidelines = GuidelineSettings::default();
        for entry in self.guidelines.iter().flatten() {
            guidelines = entry.apply(guidelines);
        }

        let period = match self.period {
            Some([start, end]) => Some(Period::from_instants(start, end).ok_or_else(|| {
                CodecError::Decode(format!("period instants out of range: [{}, {}]", start, end))
            })?),
            None => None,
        };

        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.into_item(ItemId::positional(index)))
            .collect();

        Ok(PrintData {
            period,
            items,
            guidelines,
        })
    }
}

impl From<&PrintData> for CompactState {
    fn from(data: &PrintData) -> Self {
        Self::from_print_data(data)
    }
}

impl CompactItem {
    pub fn from_item(item: &WorkItem) -> Self {
        match &item.workload {
            Workload::Fixed { points } => CompactItem::Fixed {
                name: item.name.clone(),
                points: *points,
            },
            Workload::Repeating {
                points_per_unit,
                units,
                unit_name,
            } => CompactItem::Repeating {
                name: item.name.clone(),
                points_per_unit: *points_per_unit,
                units: *units,
                unit_name: (unit_name != defaults::UNIT_NAME).then(|| unit_name.clone()),
            },
        }
    }

    pub fn into_item(self, id: ItemId) -> WorkItem {
        match self {
            CompactItem::Fixed { name, points } => WorkItem::fixed(id, name, points),
            CompactItem::Repeating {
                name,
                points_per_unit,
                units,
                unit_name,
            } => WorkItem::repeating(
                id,
                name,
                points_per_unit,
                units,
                unit_name.unwrap_or_else(|| defaults::UNIT_NAME.to_string()),
            ),
        }
    }
}

impl GuidelineOverride {
    /// Overrides for every field that differs from its default, in wire order
    pub fn from_settings(settings: &GuidelineSettings) -> Vec<Self> {
        let mut overrides = Vec::new();
        if settings.show_ideal_line != defaults::SHOW_IDEAL_LINE {
            overrides.push(GuidelineOverride::HideIdealLine);
        }
        if settings.show_last_minute_line != defaults::SHOW_LAST_MINUTE_LINE {
            overrides.push(GuidelineOverride::HideLastMinuteLine);
        }
        if settings.ideal_days_before_end != defaults::IDEAL_DAYS_BEFORE_END {
            overrides.push(GuidelineOverride::IdealDaysBeforeEnd(settings.ideal_days_before_end));
        }
        overrides
    }

    pub fn apply(&self, settings: GuidelineSettings) -> GuidelineSettings {
        match self {
            GuidelineOverride::HideIdealLine => GuidelineSettings {
                show_ideal_line: false,
                ..settings
            },
            GuidelineOverride::HideLastMinuteLine => GuidelineSettings {
                show_last_minute_line: false,
                ..settings
            },
            GuidelineOverride::IdealDaysBeforeEnd(days) => settings.with_ideal_days_before_end(*days),
            GuidelineOverride::Unknown(key) => {
                log::debug!("ignoring unknown guideline key {:?}", key);
                settings
            }
        }
    }

    fn key(&self) -> &str {
        match self {
            GuidelineOverride::HideIdealLine => KEY_HIDE_IDEAL,
            GuidelineOverride::HideLastMinuteLine => KEY_HIDE_LAST_MINUTE,
            GuidelineOverride::IdealDaysBeforeEnd(_) => KEY_IDEAL_DAYS,
            GuidelineOverride::Unknown(key) => key,
        }
    }
}

// ========================
// Serde: item tuples
// ========================

impl Serialize for CompactItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CompactItem::Fixed { name, points } => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element(&TAG_FIXED)?;
                seq.serialize_element(name)?;
                seq.serialize_element(points)?;
                seq.end()
            }
            CompactItem::Repeating {
                name,
                points_per_unit,
                units,
                unit_name,
            } => {
                let len = if unit_name.is_some() { 5 } else { 4 };
                let mut seq = serializer.serialize_seq(Some(len))?;
                seq.serialize_element(&TAG_REPEATING)?;
                seq.serialize_element(name)?;
                seq.serialize_element(points_per_unit)?;
                seq.serialize_element(units)?;
                if let Some(unit_name) = unit_name {
                    seq.serialize_element(unit_name)?;
                }
                seq.end()
            }
        }
    }
}

struct CompactItemVisitor;

impl<'de> Visitor<'de> for CompactItemVisitor {
    type Value = CompactItem;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an item tuple [tag, name, ...]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<CompactItem, A::Error> {
        let tag: i64 = next_required(&mut seq, 0, &self)?;
        let name: String = next_required(&mut seq, 1, &self)?;

        let item = if tag == TAG_FIXED {
            let points: u32 = next_required(&mut seq, 2, &self)?;
            CompactItem::Fixed { name, points }
        } else {
            let points_per_unit: u32 = next_required(&mut seq, 2, &self)?;
            let units: u32 = next_required(&mut seq, 3, &self)?;
            let unit_name = seq.next_element::<Option<String>>()?.flatten();
            CompactItem::Repeating {
                name,
                points_per_unit,
                units,
                unit_name,
            }
        };

        skip_rest(&mut seq)?;
        Ok(item)
    }
}

impl<'de> Deserialize<'de> for CompactItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(CompactItemVisitor)
    }
}

// ========================
// Serde: guideline pairs
// ========================

impl Serialize for GuidelineOverride {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = match self {
            GuidelineOverride::IdealDaysBeforeEnd(days) => *days,
            _ => 0,
        };
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(self.key())?;
        seq.serialize_element(&value)?;
        seq.end()
    }
}

struct GuidelineOverrideVisitor;

impl<'de> Visitor<'de> for GuidelineOverrideVisitor {
    type Value = GuidelineOverride;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a guideline pair [key, value]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<GuidelineOverride, A::Error> {
        let key: String = next_required(&mut seq, 0, &self)?;

        // Presence of a flag key hides its line whatever value follows.
        let entry = match key.as_str() {
            KEY_HIDE_IDEAL => GuidelineOverride::HideIdealLine,
            KEY_HIDE_LAST_MINUTE => GuidelineOverride::HideLastMinuteLine,
            KEY_IDEAL_DAYS => GuidelineOverride::IdealDaysBeforeEnd(next_required(&mut seq, 1, &self)?),
            _ => GuidelineOverride::Unknown(key),
        };

        skip_rest(&mut seq)?;
        Ok(entry)
    }
}

impl<'de> Deserialize<'de> for GuidelineOverride {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(GuidelineOverrideVisitor)
    }
}

fn next_required<'de, A, T, V>(seq: &mut A, index: usize, visitor: &V) -> Result<T, A::Error>
where
    A: SeqAccess<'de>,
    T: Deserialize<'de>,
    V: Visitor<'de>,
{
    seq.next_element()?
        .ok_or_else(|| de::Error::invalid_length(index, visitor))
}

fn skip_rest<'de, A: SeqAccess<'de>>(seq: &mut A) -> Result<(), A::Error> {
    while seq.next_element::<IgnoredAny>()?.is_some() {}
    Ok(())
}
