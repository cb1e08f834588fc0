//! Period Form Component
//!
//! Start and end date inputs with the inclusive day count.

use burndown_core::Period;
use chrono::NaiveDate;
use leptos::prelude::*;

use crate::store::{store_set_period, use_app_store, AppStateStoreFields};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

/// Period for the two inputs as typed: `Some(Some(_))` when both hold a
/// date, `Some(None)` when both are empty, `None` (leave as is) otherwise.
fn period_from_inputs(start: &str, end: &str) -> Option<Option<Period>> {
    if start.trim().is_empty() && end.trim().is_empty() {
        return Some(None);
    }
    let start = parse_date_input(start)?;
    let end = parse_date_input(end)?;
    Some(Some(Period::new(start, end)))
}

#[component]
pub fn PeriodForm() -> impl IntoView {
    let store = use_app_store();
    let period = move || store.print_data().read().period;

    // Inputs keep what was typed; one empty side leaves the period alone.
    let initial = store.print_data().read_untracked().period;
    let start_text = RwSignal::new(date_input_value(initial.map(|p| p.start_date)));
    let end_text = RwSignal::new(date_input_value(initial.map(|p| p.end_date)));

    Effect::new(move |_| {
        if let Some(p) = period() {
            start_text.set(date_input_value(Some(p.start_date)));
            end_text.set(date_input_value(Some(p.end_date)));
        }
    });

    let apply = move || {
        let typed = period_from_inputs(&start_text.get_untracked(), &end_text.get_untracked());
        if let Some(next) = typed {
            store_set_period(&store, next);
        }
    };

    let on_start = move |ev: web_sys::Event| {
        start_text.set(event_target_value(&ev));
        apply();
    };

    let on_end = move |ev: web_sys::Event| {
        end_text.set(event_target_value(&ev));
        apply();
    };

    view! {
        <div class="period-form">
            <h2>"Period"</h2>
            <div class="period-inputs">
                <label>
                    "Start"
                    <input
                        type="date"
                        prop:value=move || start_text.get()
                        on:change=on_start
                    />
                </label>
                <span class="period-separator">"to"</span>
                <label>
                    "End"
                    <input
                        type="date"
                        prop:value=move || end_text.get()
                        on:change=on_end
                    />
                </label>
            </div>
            {move || match period().map(|p| p.day_count()) {
                None => view! {
                    <p class="period-hint">"Pick the first and last day. Sharing needs a period."</p>
                }.into_any(),
                Some(0) => view! {
                    <p class="period-warning">"The end date is before the start date."</p>
                }.into_any(),
                Some(days) => view! {
                    <p class="period-days">{format!("{} days", days)}</p>
                }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_input_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
        assert_eq!(date_input_value(Some(date)), "2025-07-20");
        assert_eq!(parse_date_input("2025-07-20"), Some(date));
    }

    #[test]
    fn test_cleared_input() {
        assert_eq!(date_input_value(None), "");
        assert_eq!(parse_date_input(""), None);
    }

    #[test]
    fn test_both_dates_make_a_period() {
        let period = period_from_inputs("2025-07-20", "2025-08-31").unwrap().unwrap();
        assert_eq!(period.day_count(), 43);
    }

    #[test]
    fn test_both_inputs_emptied_clears_the_period() {
        assert_eq!(period_from_inputs("", ""), Some(None));
        assert_eq!(period_from_inputs(" ", ""), Some(None));
    }

    #[test]
    fn test_one_empty_input_changes_nothing() {
        assert_eq!(period_from_inputs("", "2025-08-31"), None);
        assert_eq!(period_from_inputs("2025-07-20", ""), None);
        assert_eq!(period_from_inputs("2025-07-20", "soon"), None);
    }
}
