//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The homework
//! data itself is one `PrintData` value: every change goes through one of
//! its transitions and the result replaces the old value wholesale.

use std::sync::atomic::{AtomicU32, Ordering};

use burndown_core::{GuidelineSettings, ItemId, Period, PrintData, WorkItem};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Period, homework and guidelines (what a share link carries)
    pub print_data: PrintData,
    /// Set when a share link in the URL could not be restored
    pub load_error: Option<String>,
    /// Print layout instead of the editor
    pub print_preview: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

fn store_transition(store: &AppStore, transition: impl FnOnce(PrintData) -> PrintData) {
    let binding = store.print_data();
    let mut data = binding.write();
    let current = std::mem::take(&mut *data);
    *data = transition(current);
}

pub fn store_set_period(store: &AppStore, period: Option<Period>) {
    store_transition(store, |data| data.with_period(period));
}

pub fn store_add_item(store: &AppStore, item: WorkItem) {
    store_transition(store, |data| data.with_item_added(item));
}

/// Update an item in the store by ID
pub fn store_update_item(store: &AppStore, updated_item: WorkItem) {
    store_transition(store, |data| data.with_item_updated(updated_item));
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: &ItemId) {
    store_transition(store, |data| data.with_item_removed(item_id));
}

pub fn store_set_guidelines(store: &AppStore, guidelines: GuidelineSettings) {
    store_transition(store, |data| data.with_guidelines(guidelines));
}

static NEXT_ITEM: AtomicU32 = AtomicU32::new(0);

/// Id for an item created in this session
pub fn new_item_id() -> ItemId {
    let serial = NEXT_ITEM.fetch_add(1, Ordering::Relaxed);
    ItemId::new(format!("item-{}-{}", js_sys::Date::now() as u64, serial))
}
