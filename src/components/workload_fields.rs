//! Workload Fields Component
//!
//! Kind selector buttons plus the number inputs of the chosen kind. Shared
//! by the new-homework form and the inline editor of the list.

use burndown_core::defaults;
use burndown_core::Workload;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadKind {
    Fixed,
    Repeating,
}

/// Kind options
pub const WORKLOAD_KINDS: &[(WorkloadKind, &str)] = &[
    (WorkloadKind::Fixed, "One-off"),
    (WorkloadKind::Repeating, "Repeating"),
];

/// Form contents as typed, converted to a `Workload` on submit
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadDraft {
    pub kind: WorkloadKind,
    pub points: String,
    pub points_per_unit: String,
    pub units: String,
    pub unit_name: String,
}

impl Default for WorkloadDraft {
    fn default() -> Self {
        Self {
            kind: WorkloadKind::Fixed,
            points: "1".to_string(),
            points_per_unit: "1".to_string(),
            units: "1".to_string(),
            unit_name: defaults::UNIT_NAME.to_string(),
        }
    }
}

impl WorkloadDraft {
    pub fn from_workload(workload: &Workload) -> Self {
        match workload {
            Workload::Fixed { points } => Self {
                kind: WorkloadKind::Fixed,
                points: points.to_string(),
                ..Self::default()
            },
            Workload::Repeating {
                points_per_unit,
                units,
                unit_name,
            } => Self {
                kind: WorkloadKind::Repeating,
                points_per_unit: points_per_unit.to_string(),
                units: units.to_string(),
                unit_name: unit_name.clone(),
                ..Self::default()
            },
        }
    }

    /// Unparseable numbers count as 0; a blank unit name becomes the default.
    pub fn to_workload(&self) -> Workload {
        match self.kind {
            WorkloadKind::Fixed => Workload::Fixed {
                points: parse_count(&self.points),
            },
            WorkloadKind::Repeating => {
                let unit_name = self.unit_name.trim();
                Workload::Repeating {
                    points_per_unit: parse_count(&self.points_per_unit),
                    units: parse_count(&self.units),
                    unit_name: if unit_name.is_empty() {
                        defaults::UNIT_NAME.to_string()
                    } else {
                        unit_name.to_string()
                    },
                }
            }
        }
    }
}

fn parse_count(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

#[component]
pub fn WorkloadFields(draft: RwSignal<WorkloadDraft>) -> impl IntoView {
    let kind = move || draft.read().kind;

    view! {
        <div class="workload-fields">
            <div class="kind-selector">
                {WORKLOAD_KINDS.iter().map(|(value, label)| {
                    let value = *value;
                    view! {
                        <button
                            type="button"
                            class=move || if kind() == value { "kind-btn active" } else { "kind-btn" }
                            on:click=move |_| draft.update(|d| d.kind = value)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <Show
                when=move || kind() == WorkloadKind::Fixed
                fallback=move || view! {
                    <label>
                        "Points per unit"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || draft.read().points_per_unit.clone()
                            on:input=move |ev| draft.update(|d| d.points_per_unit = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Units"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || draft.read().units.clone()
                            on:input=move |ev| draft.update(|d| d.units = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Unit"
                        <input
                            type="text"
                            placeholder=defaults::UNIT_NAME
                            prop:value=move || draft.read().unit_name.clone()
                            on:input=move |ev| draft.update(|d| d.unit_name = event_target_value(&ev))
                        />
                    </label>
                }
            >
                <label>
                    "Points"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || draft.read().points.clone()
                        on:input=move |ev| draft.update(|d| d.points = event_target_value(&ev))
                    />
                </label>
            </Show>

            <span class="workload-preview">
                {move || format!("= {}pt", draft.read().to_workload().effective_points())}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_from_repeating() {
        let workload = Workload::Repeating {
            points_per_unit: 2,
            units: 15,
            unit_name: "day".to_string(),
        };
        let draft = WorkloadDraft::from_workload(&workload);
        assert_eq!(draft.kind, WorkloadKind::Repeating);
        assert_eq!(draft.units, "15");
        assert_eq!(draft.to_workload(), workload);
    }

    #[test]
    fn test_kind_switch_keeps_other_fields() {
        let mut draft = WorkloadDraft::from_workload(&Workload::Fixed { points: 8 });
        draft.kind = WorkloadKind::Repeating;
        draft.kind = WorkloadKind::Fixed;
        assert_eq!(draft.to_workload(), Workload::Fixed { points: 8 });
    }

    #[test]
    fn test_bad_numbers_count_as_zero() {
        let draft = WorkloadDraft {
            kind: WorkloadKind::Repeating,
            points_per_unit: "-3".to_string(),
            units: " 12 ".to_string(),
            unit_name: "  ".to_string(),
            ..WorkloadDraft::default()
        };
        assert_eq!(
            draft.to_workload(),
            Workload::Repeating {
                points_per_unit: 0,
                units: 12,
                unit_name: "page".to_string(),
            }
        );
    }
}
