//! Remove Homework Button Component
//!
//! Asks "Remove <name>?" inline before dropping a homework item, since the
//! points it carried disappear from the chart with it.

use leptos::prelude::*;

fn confirm_prompt(item_name: &str) -> String {
    let name = item_name.trim();
    if name.is_empty() {
        "Remove this homework?".to_string()
    } else {
        format!("Remove {}?", name)
    }
}

#[component]
pub fn RemoveHomeworkButton(
    /// Name shown in the question, read when the question opens
    #[prop(into)] item_name: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    move || {
        if !asking.get() {
            return view! {
                <button
                    type="button"
                    class="remove-btn"
                    title="Remove"
                    on:click=move |_| set_asking.set(true)
                >
                    "×"
                </button>
            }
            .into_any();
        }

        view! {
            <span class="remove-confirm" role="group">
                <span class="remove-confirm-text">{confirm_prompt(&item_name.get_untracked())}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |_| {
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Remove"
                </button>
                <button type="button" class="cancel-btn" on:click=move |_| set_asking.set(false)>
                    "Keep"
                </button>
            </span>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_homework() {
        assert_eq!(confirm_prompt("Kanji Drill"), "Remove Kanji Drill?");
        assert_eq!(confirm_prompt("  Diary "), "Remove Diary?");
    }

    #[test]
    fn test_prompt_for_unnamed_homework() {
        assert_eq!(confirm_prompt(""), "Remove this homework?");
    }
}
