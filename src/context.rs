//! Application Context
//!
//! Shared state provided via Leptos Context API.

use burndown_core::ShareConfig;
use leptos::prelude::*;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Where share links point
    share_config: StoredValue<ShareConfig>,
    /// Transient message under the header - read
    pub notice: ReadSignal<Option<String>>,
    /// Transient message under the header - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        share_config: ShareConfig,
        notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            share_config: StoredValue::new(share_config),
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    pub fn share_config(&self) -> ShareConfig {
        self.share_config.get_value()
    }

    /// Show a message to the user
    pub fn notify(&self, message: impl Into<String>) {
        self.set_notice.set(Some(message.into()));
    }

    pub fn clear_notice(&self) {
        self.set_notice.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
