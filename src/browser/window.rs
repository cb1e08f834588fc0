//! Window
//!
//! New browsing contexts, printing and the local calendar date.

use chrono::NaiveDate;

use super::{describe_js, BrowserError};

/// Open `url` in a new tab.
///
/// Only reports whether the browser agreed to open it; what happens in the
/// new tab is not observed.
pub fn open_in_new_tab(url: &str) -> Result<(), BrowserError> {
    let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        // popup blockers hand back null
        Ok(None) => Err(BrowserError::Open(url.to_string())),
        Err(e) => {
            log::warn!("window.open failed: {}", describe_js(&e));
            Err(BrowserError::Open(url.to_string()))
        }
    }
}

pub fn print_page() -> Result<(), BrowserError> {
    let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
    window
        .print()
        .map_err(|e| BrowserError::Print(describe_js(&e)))
}

/// Today in the user's time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
