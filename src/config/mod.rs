use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

pub(crate) const DEFAULT_SITE_TITLE: &str = "Darjeeling Journey";

/// Runtime settings read from `window.ENV` at startup.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct EnvConfig {
    pub site_title: String,

    /// Optional viewer endpoint that takes the ticket link as a trailing,
    /// percent-encoded parameter (e.g. `https://docs.google.com/viewer?embedded=true&url=`).
    /// When unset the link itself is embedded.
    #[serde(default)]
    pub viewer_url: Option<String>,
}

impl EnvConfig {
    pub fn new() -> Self {
        // Both `window.ENV.SITE_TITLE` and `window.ENV.site_title` are accepted,
        // upper-case first. Same for VIEWER_URL.
        let env = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .map(JsValue::from)
            .filter(|env| !env.is_undefined() && env.is_object());

        let Some(env) = env else {
            return Self::from_values(None, None);
        };

        Self::from_values(
            read_env_string(&env, &["SITE_TITLE", "site_title"]),
            read_env_string(&env, &["VIEWER_URL", "viewer_url"]),
        )
    }

    /// Blank values count as unset.
    pub fn from_values(site_title: Option<String>, viewer_url: Option<String>) -> Self {
        let site_title = site_title
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string());
        let viewer_url = viewer_url
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            site_title,
            viewer_url,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn read_env_string(env: &JsValue, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(env, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = EnvConfig::default();
        assert_eq!(cfg.site_title, "Darjeeling Journey");
        assert!(cfg.viewer_url.is_none());
    }

    #[test]
    fn test_blank_values_fall_back() {
        let cfg = EnvConfig::from_values(Some("   ".to_string()), Some(String::new()));
        assert_eq!(cfg.site_title, DEFAULT_SITE_TITLE);
        assert!(cfg.viewer_url.is_none());
    }

    #[test]
    fn test_values_are_trimmed() {
        let cfg = EnvConfig::from_values(
            Some(" Sikkim Loop ".to_string()),
            Some(" https://viewer.example/?src= ".to_string()),
        );
        assert_eq!(cfg.site_title, "Sikkim Loop");
        assert_eq!(cfg.viewer_url.as_deref(), Some("https://viewer.example/?src="));
    }

    #[test]
    fn test_config_deserialize_without_viewer() {
        let cfg: EnvConfig =
            serde_json::from_str(r#"{"site_title": "Trip"}"#).expect("config should parse");
        assert_eq!(cfg.site_title, "Trip");
        assert!(cfg.viewer_url.is_none());
    }
}
