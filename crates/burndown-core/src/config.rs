//! Share Configuration
//!
//! Where share links point and what message accompanies them.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SHARE_PATH: &str = "/app";
pub const DEFAULT_SHARE_PARAM: &str = "d";
pub const DEFAULT_SHARE_MESSAGE: &str = "Here is our homework coloring sheet!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Scheme and host of the running app, e.g. `https://example.com`.
    /// Unknown origins produce relative links.
    pub origin: Option<String>,
    /// Route that restores shared data
    pub path: String,
    /// Query parameter carrying the token
    pub param: String,
    pub default_message: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            origin: None,
            path: DEFAULT_SHARE_PATH.to_string(),
            param: DEFAULT_SHARE_PARAM.to_string(),
            default_message: DEFAULT_SHARE_MESSAGE.to_string(),
        }
    }
}

impl ShareConfig {
    pub fn for_origin(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        let origin = origin.trim_end_matches('/');
        Self {
            // Opaque origins ("null") cannot be linked to
            origin: (!origin.is_empty() && origin != "null").then(|| origin.to_string()),
            ..Self::default()
        }
    }

    /// `message` unless it is missing or blank
    pub fn message_or_default<'a>(&'a self, message: Option<&'a str>) -> &'a str {
        message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(&self.default_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_origin() {
        let config = ShareConfig::for_origin("https://example.com/");
        assert_eq!(config.origin.as_deref(), Some("https://example.com"));
        assert_eq!(config.path, "/app");
        assert_eq!(config.param, "d");

        assert_eq!(ShareConfig::for_origin("null").origin, None);
        assert_eq!(ShareConfig::for_origin("").origin, None);
    }

    #[test]
    fn test_message_or_default() {
        let config = ShareConfig::default();
        assert_eq!(config.message_or_default(Some("Look!")), "Look!");
        assert_eq!(config.message_or_default(Some("  ")), DEFAULT_SHARE_MESSAGE);
        assert_eq!(config.message_or_default(None), DEFAULT_SHARE_MESSAGE);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ShareConfig = serde_json::from_str(r#"{"origin":"https://a.test"}"#).unwrap();
        assert_eq!(config.origin.as_deref(), Some("https://a.test"));
        assert_eq!(config.param, "d");
    }
}
