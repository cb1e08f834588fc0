//! Homework Form Component
//!
//! Preset buttons grouped by category, plus a form for anything else.

use burndown_core::presets::{presets_in, CATEGORIES};
use burndown_core::WorkItem;
use leptos::prelude::*;

use super::{WorkloadDraft, WorkloadFields};
use crate::store::{new_item_id, store_add_item, use_app_store};

#[component]
pub fn HomeworkForm() -> impl IntoView {
    let store = use_app_store();
    let (name, set_name) = signal(String::new());
    let draft = RwSignal::new(WorkloadDraft::default());

    let add_custom = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = name.get();
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let item = WorkItem {
            id: new_item_id(),
            name: text.to_string(),
            workload: draft.get().to_workload(),
        };
        log::debug!("adding homework {:?}", item);
        store_add_item(&store, item);
        set_name.set(String::new());
        draft.set(WorkloadDraft::default());
    };

    view! {
        <div class="homework-form">
            <h2>"Add homework"</h2>

            <div class="preset-picker">
                {CATEGORIES.iter().map(|category| view! {
                    <div class="preset-category">
                        <h3>{*category}</h3>
                        <div class="preset-buttons">
                            {presets_in(category).map(|preset| view! {
                                <button
                                    type="button"
                                    class="preset-btn"
                                    title=preset.description
                                    on:click=move |_| store_add_item(&store, preset.to_work_item(new_item_id()))
                                >
                                    {preset.name}
                                </button>
                            }).collect_view()}
                        </div>
                    </div>
                }).collect_view()}
            </div>

            <form class="custom-homework" on:submit=add_custom>
                <input
                    type="text"
                    placeholder="Homework name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <WorkloadFields draft=draft />
                <button type="submit">"Add"</button>
            </form>
        </div>
    }
}
