//! Share Coordinator
//!
//! Glues the pure link building in `burndown_core::share` to the browser:
//! copying the link and opening a share target's compose window.

use burndown_core::{CodecError, PrintData, ShareChannel, ShareConfig, ShareReadiness};
use thiserror::Error;

use crate::browser::{self, BrowserError, ClipboardError};

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("nothing to share yet ({0:?})")]
    NotReady(ShareReadiness),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error(transparent)]
    Browser(#[from] BrowserError),
}

fn ensure_ready(data: &PrintData) -> Result<(), ShareError> {
    match ShareReadiness::of(data) {
        ShareReadiness::Ready => Ok(()),
        other => Err(ShareError::NotReady(other)),
    }
}

pub fn generate_link(config: &ShareConfig, data: &PrintData) -> Result<String, ShareError> {
    ensure_ready(data)?;
    Ok(burndown_core::share::share_link(config, data)?)
}

/// Copy the share link and hand it back.
pub async fn copy_share_link(config: &ShareConfig, data: &PrintData) -> Result<String, ShareError> {
    let link = generate_link(config, data)?;
    browser::copy_to_clipboard(&link).await?;
    log::info!("share link copied ({} chars)", link.len());
    Ok(link)
}

/// Open `channel`'s compose window with the link and `message`.
pub fn share_via(
    channel: ShareChannel,
    config: &ShareConfig,
    data: &PrintData,
    message: Option<&str>,
) -> Result<(), ShareError> {
    let link = generate_link(config, data)?;
    let url = channel.compose_url(&link, config.message_or_default(message));
    browser::open_in_new_tab(&url)?;
    log::info!("opened {:?} compose window", channel);
    Ok(())
}
