//! Share Links
//!
//! Pure half of sharing: building the link that carries the token, the
//! compose URLs of the external share targets, and reading the token back
//! out of a query string. Clipboard and window calls live in the UI crate.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::ShareConfig;
use crate::error::CodecResult;
use crate::model::PrintData;

/// Characters `encodeURIComponent` leaves alone besides alphanumerics
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Whether the current state can be shared at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareReadiness {
    Ready,
    /// No period has been set yet
    MissingPeriod,
    /// The homework list is empty
    NoItems,
}

impl ShareReadiness {
    pub fn of(data: &PrintData) -> Self {
        if data.period.is_none() {
            ShareReadiness::MissingPeriod
        } else if data.items.is_empty() {
            ShareReadiness::NoItems
        } else {
            ShareReadiness::Ready
        }
    }

    pub fn is_ready(self) -> bool {
        self == ShareReadiness::Ready
    }
}

/// External compose-window targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareChannel {
    Line,
    X,
}

impl ShareChannel {
    pub const ALL: [ShareChannel; 2] = [ShareChannel::Line, ShareChannel::X];

    pub fn label(self) -> &'static str {
        match self {
            ShareChannel::Line => "Share on LINE",
            ShareChannel::X => "Share on X",
        }
    }

    /// URL that opens the target's compose window prefilled with `message`
    /// and `link`.
    pub fn compose_url(self, link: &str, message: &str) -> String {
        match self {
            ShareChannel::Line => format!(
                "https://social-plugins.line.me/lineit/share?url={}&text={}",
                encode_component(link),
                encode_component(&format!("{}\n{}", message, link))
            ),
            ShareChannel::X => format!(
                "https://twitter.com/intent/tweet?text={}",
                encode_component(&format!("{} {}", message, link))
            ),
        }
    }
}

/// Percent-encode like JavaScript's `encodeURIComponent`.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Full share link for `data`: `<origin><path>?<param>=<token>`.
///
/// Without a known origin the link is relative to the site root.
pub fn share_link(config: &ShareConfig, data: &PrintData) -> CodecResult<String> {
    let token = crate::encode_print_data(data)?;
    Ok(format!(
        "{}{}?{}={}",
        config.origin.as_deref().unwrap_or(""),
        config.path,
        config.param,
        token
    ))
}

/// Value of `param` in a query string such as `?d=abc&x=1`.
///
/// Empty values count as missing.
pub fn token_from_query(search: &str, param: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == param)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
}

/// The query string with every `param` entry removed, `""` when nothing is
/// left.
pub fn strip_query_param(search: &str, param: &str) -> String {
    let rest: Vec<&str> = search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split_once('=').map_or(*pair, |(key, _)| key) != param)
        .collect();

    if rest.is_empty() {
        String::new()
    } else {
        format!("?{}", rest.join("&"))
    }
}
