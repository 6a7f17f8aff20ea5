use camino::Utf8Path;
use circuitnote_assets::AssetManager;
use circuitnote_config::Settings;
use url::Url;

use crate::token;

/// One rendered code block's worth of state: the source text and its
/// URL-safe token, encoded once at construction. Blocks never share
/// descriptors; identical text in two blocks is encoded independently.
#[derive(Debug, Clone)]
pub struct CircuitEmbed {
    source: String,
    token: String,
}

/// How the main view gets materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Standard in-page `<iframe>`.
    Frame,
    /// Isolated `<webview>`, which loads `file://` URLs without
    /// cross-origin restrictions.
    IsolatedView,
}

/// Outcome of resolving an embed against settings and asset readiness.
#[derive(Debug, Clone)]
pub struct ResolvedEmbed {
    pub main_url: String,
    pub mode: ViewMode,
    /// Set when offline mode was requested but the bundle is not installed.
    /// The main view then falls back to the remote URL so the user still
    /// sees a working simulation.
    pub offline_notice: Option<String>,
    /// Always remote with `running=true`: local file URLs are not shareable
    /// outside the host process, and editing is a full-browser affordance.
    pub edit_url: Option<String>,
}

impl CircuitEmbed {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let token = token::encode(&source);
        Self { source, token }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Decides display URL and view strategy. Evaluated once per render,
    /// against the manager's cached readiness rather than a fresh probe.
    pub fn resolve(&self, settings: &Settings, assets: &AssetManager) -> ResolvedEmbed {
        let running = settings.editable;
        let edit_url = settings.edit_link.then(|| self.remote_url(settings, true));

        if settings.offline_mode && assets.capability().is_supported() {
            if assets.assets_ready() {
                return ResolvedEmbed {
                    main_url: local_url(&assets.entry_point(), &self.token, running),
                    mode: ViewMode::IsolatedView,
                    offline_notice: None,
                    edit_url,
                };
            }

            return ResolvedEmbed {
                main_url: self.remote_url(settings, running),
                mode: ViewMode::Frame,
                offline_notice: Some(
                    "Offline assets are not installed. Run `circuitnote assets download` \
                     to use the bundled simulator; showing the remote simulator instead."
                        .to_string(),
                ),
                edit_url,
            };
        }

        ResolvedEmbed {
            main_url: self.remote_url(settings, running),
            mode: ViewMode::Frame,
            offline_notice: None,
            edit_url,
        }
    }

    /// `<base>?ctz=<token>&running=<bool>` against the configured remote
    /// base URL.
    pub fn remote_url(&self, settings: &Settings, running: bool) -> String {
        build_url(settings.circuit_js_url.as_str(), &self.token, running)
    }
}

/// The token alphabet is already query-safe, so the URL is assembled by
/// string formatting; running it through a query serializer would re-encode
/// the token and break the simulator's decoder.
fn build_url(base: &str, token: &str, running: bool) -> String {
    format!("{base}?ctz={token}&running={running}")
}

fn local_url(entry_point: &Utf8Path, token: &str, running: bool) -> String {
    let base = match Url::from_file_path(entry_point.as_std_path()) {
        Ok(url) => url.to_string(),
        // relative install paths cannot go through the parser
        Err(()) => format!(
            "file:///{}",
            entry_point.as_str().trim_start_matches('/').replace('\\', "/")
        ),
    };
    build_url(&base, token, running)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_encoded_once() {
        let embed = CircuitEmbed::new("R 1 2 1000");
        assert_eq!(embed.token(), token::encode("R 1 2 1000"));
        assert_eq!(embed.source(), "R 1 2 1000");
    }

    #[test]
    fn test_remote_url_shape() {
        let settings = Settings::default();
        let embed = CircuitEmbed::new("R 1 2 1000");

        let url = embed.remote_url(&settings, false);
        assert_eq!(
            url,
            format!(
                "https://falstad.com/circuit/circuitjs.html?ctz={}&running=false",
                embed.token()
            )
        );
    }

    #[test]
    fn test_local_url_keeps_token_untouched() {
        let token = token::encode("$ 1 0.000005 10 50 5 50");
        let url = local_url(Utf8Path::new("/home/user/.circuitnote/circuitjs/circuitjs.html"), &token, true);

        assert!(url.starts_with("file:///"));
        assert!(url.ends_with(&format!("circuitjs.html?ctz={token}&running=true")));
    }
}
