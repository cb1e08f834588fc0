//! Print Layout Component
//!
//! Summary table and chart laid out for paper.

use leptos::prelude::*;

use super::BurndownChart;
use crate::browser;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PrintLayout() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let print = move |_| {
        if let Err(e) = browser::print_page() {
            log::error!("{}", e);
            ctx.notify(String::from(e));
        }
    };

    let period_line = move || {
        store.print_data().read().period.map(|p| {
            format!(
                "{} - {} ({} days)",
                p.start_date.format("%-m/%-d"),
                p.end_date.format("%-m/%-d"),
                p.day_count()
            )
        })
    };

    view! {
        <div class="print-layout">
            <div class="print-actions no-print">
                <button type="button" class="print-btn" on:click=print>"Print"</button>
                <button type="button" on:click=move |_| store.print_preview().set(false)>
                    "Back to editing"
                </button>
            </div>

            <h1 class="print-title">"Homework Coloring Sheet"</h1>
            <p class="print-period">{period_line}</p>

            <table class="print-summary">
                <thead>
                    <tr>
                        <th>"Homework"</th>
                        <th>"Detail"</th>
                        <th>"Points"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || store.print_data().read().items.iter().map(|item| {
                        let detail = item.detail().unwrap_or_default();
                        let points = format!("{}pt", item.effective_points());
                        view! {
                            <tr>
                                <td>{item.name.clone()}</td>
                                <td>{detail}</td>
                                <td class="points">{points}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="2">"Total"</td>
                        <td class="points">
                            {move || format!("{}pt", store.print_data().read().total_points())}
                        </td>
                    </tr>
                </tfoot>
            </table>

            <BurndownChart />
        </div>
    }
}
