//! Location and History
//!
//! Reading the share token out of the address bar and removing it again.

use burndown_core::share::{strip_query_param, token_from_query};

use super::{describe_js, BrowserError};

/// `scheme://host[:port]` of the running page
pub fn current_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Token carried in the current URL's `param`, if any.
pub fn share_token_in_url(param: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    token_from_query(&search, param)
}

/// Replace the visible URL with one that lacks `param`, without adding a
/// history entry.
pub fn strip_share_param(param: &str) -> Result<(), BrowserError> {
    let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
    let location = window.location();
    let read = |part: Result<String, wasm_bindgen::JsValue>| {
        part.map_err(|e| BrowserError::History(describe_js(&e)))
    };

    let url = format!(
        "{}{}{}",
        read(location.pathname())?,
        strip_query_param(&read(location.search())?, param),
        read(location.hash())?
    );

    window
        .history()
        .map_err(|e| BrowserError::History(describe_js(&e)))?
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url))
        .map_err(|e| BrowserError::History(describe_js(&e)))
}
