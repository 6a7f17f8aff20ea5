use serde::{Deserialize, Serialize};
use url::Url;

/// Remote simulator base URL used when no offline bundle serves the embed.
pub const DEFAULT_CIRCUITJS_URL: &str = "https://falstad.com/circuit/circuitjs.html";

/// Fenced code block tag intercepted in documents.
pub const DEFAULT_CIRCUIT_TAG: &str = "circuitjs";

/// User-facing settings, persisted as a flat JSON record.
///
/// Keys stay camelCase so config files written by other frontends of the
/// embedder remain readable as-is. Every field carries a default, so a
/// partial record on disk is overlaid onto [`Settings::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Allow interaction with the embedded simulation.
    pub editable: bool,
    /// Render an `[EDIT]` link that opens the circuit in a full browser.
    pub edit_link: bool,
    /// Remote simulator base URL.
    pub circuit_js_url: Url,
    /// Code block tag identifying circuit blocks.
    pub circuit_tag: String,
    /// Prefer the locally installed simulator bundle when it is ready.
    pub offline_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editable: true,
            edit_link: true,
            circuit_js_url: Url::parse(DEFAULT_CIRCUITJS_URL).expect("default URL is valid"),
            circuit_tag: DEFAULT_CIRCUIT_TAG.to_string(),
            offline_mode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.editable);
        assert!(settings.edit_link);
        assert!(settings.offline_mode);
        assert_eq!(settings.circuit_tag, "circuitjs");
        assert_eq!(settings.circuit_js_url.as_str(), DEFAULT_CIRCUITJS_URL);
    }

    #[test]
    fn test_partial_record_overlays_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"offlineMode": false, "circuitTag": "circuit"}"#).unwrap();

        assert!(!settings.offline_mode);
        assert_eq!(settings.circuit_tag, "circuit");
        // untouched fields keep their defaults
        assert!(settings.editable);
        assert!(settings.edit_link);
        assert_eq!(settings.circuit_js_url.as_str(), DEFAULT_CIRCUITJS_URL);
    }

    #[test]
    fn test_keys_are_camel_case() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"editLink\""));
        assert!(json.contains("\"circuitJsUrl\""));
        assert!(json.contains("\"circuitTag\""));
        assert!(json.contains("\"offlineMode\""));
    }

    #[test]
    fn test_roundtrip() {
        let settings = Settings {
            editable: false,
            circuit_js_url: Url::parse("https://example.com/sim.html").unwrap(),
            ..Settings::default()
        };

        let json = serde_json::to_string(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();

        assert!(!parsed.editable);
        assert_eq!(parsed.circuit_js_url.as_str(), "https://example.com/sim.html");
    }
}
