//! Browser Glue
//!
//! Thin wrappers over the window, location, history and clipboard APIs.
//! Everything here talks to `web_sys` so the rest of the UI does not have to.

mod clipboard;
mod location;
mod window;

pub use clipboard::{copy_to_clipboard, ClipboardError};
pub use location::{current_origin, share_token_in_url, strip_share_param};
pub use window::{open_in_new_tab, print_page, today};

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("no browser window available")]
    NoWindow,
    #[error("the browser refused to open {0}")]
    Open(String),
    #[error("failed to update history: {0}")]
    History(String),
    #[error("failed to print: {0}")]
    Print(String),
}

impl From<BrowserError> for String {
    fn from(error: BrowserError) -> Self {
        error.to_string()
    }
}

/// Readable text for a thrown JS value
pub(crate) fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
