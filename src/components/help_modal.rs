//! Help Modal Component
//!
//! Markdown help plus the most recent log lines.

use leptos::prelude::*;

use crate::markdown::parse_markdown;

const HELP_TEXT: &str = r#"
## How to use

1. Pick the **period**: the first and the last day of the holiday.
2. Add **homework**, from the presets or with your own name and points.
   Repeating homework counts points for every page or day.
3. Print the sheet and color one cell for every point finished.

## The lines

- %b%Ideal line%b%: finishes a few days before the end, with time to spare.
- %r%Last-minute line%r%: finishes on the very last day.

Stay below a line and you are on schedule.

## Sharing

*Copy share link* puts everything on this page into a link. Whoever opens
it sees the same sheet. Nothing is stored on a server.
"#;

/// Lines shown under "Recent log"
const RECENT_LOG_LINES: usize = 50;

/// The last `max` lines, oldest first
fn log_excerpt(lines: &[String], max: usize) -> String {
    let skip = lines.len().saturating_sub(max);
    lines[skip..].join("\n")
}

#[component]
pub fn HelpModal(show: ReadSignal<bool>, set_show: WriteSignal<bool>) -> impl IntoView {
    let html = parse_markdown(HELP_TEXT);

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop no-print" on:click=move |_| set_show.set(false)>
                <div class="modal help-modal" on:click=|ev| ev.stop_propagation()>
                    <button type="button" class="modal-close" on:click=move |_| set_show.set(false)>
                        "×"
                    </button>
                    <div class="markdown-body" inner_html=html.clone()></div>
                    <details class="recent-log">
                        <summary>"Recent log"</summary>
                        <pre>{log_excerpt(&console_logger::recent_lines(), RECENT_LOG_LINES)}</pre>
                    </details>
                </div>
            </div>
        </Show>
    }
}
