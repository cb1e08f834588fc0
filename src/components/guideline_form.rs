//! Guideline Form Component
//!
//! Toggles for the two reference lines and the ideal line's margin.

use burndown_core::GuidelineSettings;
use leptos::prelude::*;

use crate::store::{store_set_guidelines, use_app_store, AppStateStoreFields};

/// Typed margin, at least one day
fn parse_ideal_days(value: &str) -> u32 {
    value.trim().parse::<u32>().unwrap_or(1).max(1)
}

#[component]
pub fn GuidelineForm() -> impl IntoView {
    let store = use_app_store();
    let guidelines = move || store.print_data().read().guidelines;

    view! {
        <div class="guideline-form">
            <h2>"Guide lines"</h2>
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    prop:checked=move || guidelines().show_ideal_line
                    on:change=move |ev| {
                        store_set_guidelines(&store, GuidelineSettings {
                            show_ideal_line: event_target_checked(&ev),
                            ..guidelines()
                        });
                    }
                />
                "Ideal line (finish early)"
            </label>
            <Show when=move || guidelines().show_ideal_line>
                <label class="ideal-days">
                    "Finish"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || guidelines().ideal_days_before_end.to_string()
                        on:change=move |ev| {
                            let days = parse_ideal_days(&event_target_value(&ev));
                            store_set_guidelines(&store, guidelines().with_ideal_days_before_end(days));
                        }
                    />
                    "days before the end"
                </label>
            </Show>
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    prop:checked=move || guidelines().show_last_minute_line
                    on:change=move |ev| {
                        store_set_guidelines(&store, GuidelineSettings {
                            show_last_minute_line: event_target_checked(&ev),
                            ..guidelines()
                        });
                    }
                />
                "Last-minute line"
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ideal_days() {
        assert_eq!(parse_ideal_days("3"), 3);
        assert_eq!(parse_ideal_days("0"), 1);
        assert_eq!(parse_ideal_days("-2"), 1);
        assert_eq!(parse_ideal_days(""), 1);
    }
}
