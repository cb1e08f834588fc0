//! Homework List Component
//!
//! Added homework with inline editing and confirm-delete.

use burndown_core::{ItemId, WorkItem};
use leptos::prelude::*;

use super::{RemoveHomeworkButton, WorkloadDraft, WorkloadFields};
use crate::store::{
    store_remove_item, store_update_item, use_app_store, AppStateStoreFields,
};

#[component]
pub fn HomeworkList() -> impl IntoView {
    let store = use_app_store();
    let item_ids = move || {
        store
            .print_data()
            .read()
            .items
            .iter()
            .map(|item| item.id.clone())
            .collect::<Vec<_>>()
    };

    view! {
        <div class="homework-list">
            <h2>"Homework"</h2>
            <Show
                when=move || !item_ids().is_empty()
                fallback=|| view! {
                    <p class="homework-empty">"No homework yet. Pick a preset or add your own."</p>
                }
            >
                <ul>
                    <For
                        each=item_ids
                        key=|id| id.clone()
                        children=move |id| view! { <HomeworkRow id=id /> }
                    />
                </ul>
                <p class="homework-total">
                    {move || format!("Total: {}pt", store.print_data().read().total_points())}
                </p>
            </Show>
        </div>
    }
}

/// One homework entry, read from the store by id
#[component]
fn HomeworkRow(id: ItemId) -> impl IntoView {
    let store = use_app_store();
    let id = StoredValue::new(id);
    let item = move || id.with_value(|id| store.print_data().read().item(id).cloned());

    let (editing, set_editing) = signal(false);
    let name = RwSignal::new(String::new());
    let draft = RwSignal::new(WorkloadDraft::default());

    let start_edit = move |_| {
        if let Some(current) = item() {
            draft.set(WorkloadDraft::from_workload(&current.workload));
            name.set(current.name);
            set_editing.set(true);
        }
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = item() else {
            set_editing.set(false);
            return;
        };
        let text = name.get();
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        store_update_item(&store, WorkItem {
            name: text.to_string(),
            workload: draft.get().to_workload(),
            ..current
        });
        set_editing.set(false);
    };

    let remove = move |_: ()| id.with_value(|id| store_remove_item(&store, id));
    let item_name = Signal::derive(move || item().map(|i| i.name).unwrap_or_default());

    view! {
        <li class="homework-row">
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span class="homework-name">{item_name}</span>
                    <span class="homework-detail">
                        {move || item().and_then(|i| i.detail()).unwrap_or_default()}
                    </span>
                    <span class="homework-points">
                        {move || item().map(|i| format!("{}pt", i.effective_points())).unwrap_or_default()}
                    </span>
                    <button type="button" class="edit-btn" on:click=start_edit>"Edit"</button>
                    <RemoveHomeworkButton item_name=item_name on_confirm=remove />
                }
            >
                <form class="homework-edit" on:submit=save>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <WorkloadFields draft=draft />
                    <button type="submit">"Save"</button>
                    <button type="button" class="cancel-btn" on:click=move |_| set_editing.set(false)>
                        "Cancel"
                    </button>
                </form>
            </Show>
        </li>
    }
}
