//! Clipboard
//!
//! Plain text only. The async clipboard API is used in secure contexts;
//! elsewhere a hidden textarea is selected and `execCommand("copy")` runs.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlElement, HtmlTextAreaElement, Window};

use super::describe_js;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("copy command was not carried out")]
    CopyCommandFailed,
}

/// Removes the temporary element however the copy ends.
struct DetachOnDrop(HtmlElement);

impl Drop for DetachOnDrop {
    fn drop(&mut self) {
        self.0.remove();
    }
}

/// Copy `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window()
        .ok_or_else(|| ClipboardError::Unavailable("no window".to_string()))?;

    if window.is_secure_context() {
        if let Some(clipboard) = async_clipboard(&window) {
            return write_text(&clipboard, text).await;
        }
    }

    log::debug!("async clipboard unavailable, copying through a textarea");
    copy_with_selection(&window, text)
}

fn async_clipboard(window: &Window) -> Option<JsValue> {
    let navigator = window.navigator();
    js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|clipboard| !clipboard.is_undefined() && !clipboard.is_null())
}

async fn write_text(clipboard: &JsValue, text: &str) -> Result<(), ClipboardError> {
    let write = js_sys::Reflect::get(clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| ClipboardError::Unavailable(describe_js(&e)))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| ClipboardError::Unavailable("writeText is not a function".to_string()))?;

    let promise = write
        .call1(clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Rejected(describe_js(&e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| ClipboardError::Unavailable("writeText did not return a promise".to_string()))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| ClipboardError::Rejected(describe_js(&e)))?;
    Ok(())
}

fn copy_with_selection(window: &Window, text: &str) -> Result<(), ClipboardError> {
    let unavailable = |what: &str| ClipboardError::Unavailable(what.to_string());

    let document = window.document().ok_or_else(|| unavailable("no document"))?;
    let body = document.body().ok_or_else(|| unavailable("no document body"))?;

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|e| ClipboardError::Unavailable(describe_js(&e)))?
        .dyn_into()
        .map_err(|_| unavailable("textarea element"))?;
    textarea.set_value(text);
    textarea.set_read_only(true);

    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("left", "-999999px");
    let _ = style.set_property("top", "-999999px");

    body.append_child(&textarea)
        .map_err(|e| ClipboardError::Unavailable(describe_js(&e)))?;
    let _detach = DetachOnDrop(textarea.clone().into());

    let _ = textarea.focus();
    textarea.select();

    let html_document: HtmlDocument = document
        .dyn_into()
        .map_err(|_| unavailable("not an HTML document"))?;
    let copied = html_document
        .exec_command("copy")
        .map_err(|e| ClipboardError::Rejected(describe_js(&e)))?;

    if copied {
        Ok(())
    } else {
        Err(ClipboardError::CopyCommandFailed)
    }
}
