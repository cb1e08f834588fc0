//! Share Button Component
//!
//! Copy-link button and the external share targets. Hidden until there is
//! something to share.

use burndown_core::{ShareChannel, ShareReadiness};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::share;
use crate::store::{use_app_store, AppStateStoreFields};

/// How long the "Copied!" label stays up
const COPIED_RESET_MS: u32 = 2_000;

fn readiness_hint(readiness: ShareReadiness) -> &'static str {
    match readiness {
        ShareReadiness::Ready => "",
        ShareReadiness::MissingPeriod => "Set a period to share this sheet.",
        ShareReadiness::NoItems => "Add some homework to share this sheet.",
    }
}

#[component]
pub fn ShareButton() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let readiness = Memo::new(move |_| ShareReadiness::of(&store.print_data().read()));

    let (copying, set_copying) = signal(false);
    let (copied, set_copied) = signal(false);
    let (message, set_message) = signal(String::new());

    let copy_link = move |_| {
        if copying.get_untracked() {
            return;
        }
        set_copying.set(true);
        let config = ctx.share_config();
        let data = store.print_data().get_untracked();

        spawn_local(async move {
            match share::copy_share_link(&config, &data).await {
                Ok(_) => {
                    set_copying.set(false);
                    set_copied.set(true);
                    TimeoutFuture::new(COPIED_RESET_MS).await;
                    set_copied.set(false);
                }
                Err(e) => {
                    log::error!("copy failed: {}", e);
                    set_copying.set(false);
                    set_copied.set(false);
                    ctx.notify(format!("Could not copy the link: {}", e));
                }
            }
        });
    };

    let share_to = move |channel: ShareChannel| {
        let config = ctx.share_config();
        let data = store.print_data().get_untracked();
        let text = message.get_untracked();
        if let Err(e) = share::share_via(channel, &config, &data, Some(&text)) {
            log::warn!("share via {:?} failed: {}", channel, e);
            ctx.notify(format!("Could not open the share window: {}", e));
        }
    };

    view! {
        <Show
            when=move || readiness.get().is_ready()
            fallback=move || view! {
                <p class="share-hint no-print">{move || readiness_hint(readiness.get())}</p>
            }
        >
            <div class="share-panel no-print">
                <button
                    type="button"
                    class=move || if copied.get() { "share-btn copied" } else { "share-btn" }
                    disabled=move || copying.get()
                    on:click=copy_link
                >
                    {move || if copied.get() { "Copied!" } else { "Copy share link" }}
                </button>
                <textarea
                    class="share-message"
                    rows="2"
                    placeholder=ctx.share_config().default_message
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
                <div class="share-channels">
                    {ShareChannel::ALL.iter().map(|channel| {
                        let channel = *channel;
                        view! {
                            <button
                                type="button"
                                class="share-channel-btn"
                                on:click=move |_| share_to(channel)
                            >
                                {channel.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </Show>
    }
}
