//! Homework Burndown App
//!
//! Root component: restores shared data from the URL, provides the store
//! and context, and switches between the editor and the print layout.

use burndown_core::{Period, PrintData, ShareConfig};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser;
use crate::components::{
    BurndownChart, GuidelineForm, HelpModal, HomeworkForm, HomeworkList, PeriodForm, PrintLayout,
    ShareButton,
};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

/// Days in the period offered on a fresh start (today through today + 31)
const DEFAULT_PERIOD_DAYS: u32 = 32;

const LOAD_ERROR_MESSAGE: &str =
    "The shared data could not be read. The link may be incomplete; starting with a blank sheet.";

fn fresh_print_data() -> PrintData {
    PrintData::new().with_period(Some(Period::starting_on(browser::today(), DEFAULT_PERIOD_DAYS)))
}

/// State to start with: the shared data in the URL when there is some,
/// otherwise a fresh sheet.
fn initial_state(config: &ShareConfig) -> AppState {
    let Some(token) = browser::share_token_in_url(&config.param) else {
        return AppState {
            print_data: fresh_print_data(),
            ..Default::default()
        };
    };

    match burndown_core::decode_print_data(&token) {
        Ok(print_data) => {
            log::info!("restored {} homework items from share link", print_data.items.len());
            if let Err(e) = browser::strip_share_param(&config.param) {
                log::warn!("could not tidy the address bar: {}", e);
            }
            AppState {
                print_data,
                ..Default::default()
            }
        }
        Err(e) => {
            log::warn!("share link rejected: {}", e);
            AppState {
                print_data: fresh_print_data(),
                load_error: Some(LOAD_ERROR_MESSAGE.to_string()),
                ..Default::default()
            }
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let share_config = browser::current_origin()
        .map(ShareConfig::for_origin)
        .unwrap_or_default();
    let store = Store::new(initial_state(&share_config));
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (show_help, set_show_help) = signal(false);

    // Provide context to all children
    let ctx = AppContext::new(share_config, (notice, set_notice));
    provide_context(ctx);
    provide_context(store);

    view! {
        <div class="app-layout">
            <header class="app-header no-print">
                <h1>"Homework Burndown"</h1>
                <div class="header-actions">
                    <button
                        class="print-toggle-btn"
                        on:click=move |_| store.print_preview().update(|on| *on = !*on)
                    >
                        {move || if store.print_preview().get() { "Back to editing" } else { "Print preview" }}
                    </button>
                    <button class="help-btn" on:click=move |_| set_show_help.set(true)>"?"</button>
                </div>
            </header>

            {move || store.load_error().get().map(|message| view! {
                <div class="load-error-banner no-print" role="alert">
                    <span>{message}</span>
                    <button on:click=move |_| store.load_error().set(None)>"×"</button>
                </div>
            })}

            {move || ctx.notice.get().map(|message| view! {
                <div class="notice no-print">
                    <span>{message}</span>
                    <button on:click=move |_| ctx.clear_notice()>"×"</button>
                </div>
            })}

            <Show
                when=move || !store.print_preview().get()
                fallback=|| view! { <PrintLayout /> }
            >
                <main class="editor">
                    <section class="editor-settings">
                        <PeriodForm />
                        <GuidelineForm />
                    </section>
                    <section class="editor-homework">
                        <HomeworkForm />
                        <HomeworkList />
                    </section>
                    <section class="editor-chart">
                        <BurndownChart />
                        <ShareButton />
                    </section>
                </main>
            </Show>

            <HelpModal show=show_help set_show=set_show_help />
        </div>
    }
}
