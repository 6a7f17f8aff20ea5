use camino::Utf8PathBuf;
use circuitnote_assets::{APP_DIR, AssetManager, Capability, ENTRY_POINT};
use circuitnote_config::Settings;
use circuitnote_embed::{CircuitEmbed, ViewMode, render_document, token};

fn install_dir(dir: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join("circuitjs")).unwrap()
}

fn install_bundle(dir: &Utf8PathBuf) {
    std::fs::create_dir_all(dir.join(APP_DIR)).unwrap();
    std::fs::write(dir.join(ENTRY_POINT), "<html></html>").unwrap();
}

fn settings(offline_mode: bool) -> Settings {
    Settings {
        editable: false,
        circuit_js_url: "https://x/c.html".parse().unwrap(),
        offline_mode,
        ..Settings::default()
    }
}

#[tokio::test]
async fn online_mode_always_uses_remote_url() {
    let dir = tempfile::tempdir().unwrap();
    let install = install_dir(&dir);
    install_bundle(&install);

    let manager = AssetManager::new(install);
    assert!(manager.check_assets().await);

    // assets are ready, but offline mode is off
    let resolved = CircuitEmbed::new("R 1 2 1000").resolve(&settings(false), &manager);

    assert!(resolved.main_url.starts_with("https://x/c.html?ctz="));
    assert_eq!(resolved.mode, ViewMode::Frame);
    assert!(resolved.offline_notice.is_none());
}

#[tokio::test]
async fn offline_mode_with_ready_assets_uses_local_file_url() {
    let dir = tempfile::tempdir().unwrap();
    let install = install_dir(&dir);
    install_bundle(&install);

    let manager = AssetManager::new(install.clone());
    assert!(manager.check_assets().await);

    let embed = CircuitEmbed::new("R 1 2 1000");
    let resolved = embed.resolve(&settings(true), &manager);

    assert!(resolved.main_url.starts_with("file://"));
    assert!(resolved.main_url.contains("circuitjs.html"));
    assert!(resolved.main_url.ends_with(&format!("?ctz={}&running=false", embed.token())));
    assert_eq!(resolved.mode, ViewMode::IsolatedView);
    assert!(resolved.offline_notice.is_none());
}

#[tokio::test]
async fn offline_mode_without_assets_falls_back_with_notice() {
    let dir = tempfile::tempdir().unwrap();
    let manager = AssetManager::new(install_dir(&dir));
    manager.check_assets().await;

    let resolved = CircuitEmbed::new("R 1 2 1000").resolve(&settings(true), &manager);

    assert!(resolved.offline_notice.is_some());
    // never blank: the fallback still points at a working remote view
    assert!(resolved.main_url.starts_with("https://x/c.html?ctz="));
    assert_eq!(resolved.mode, ViewMode::Frame);
}

#[tokio::test]
async fn unsupported_platform_resolves_remote() {
    let dir = tempfile::tempdir().unwrap();
    let install = install_dir(&dir);
    install_bundle(&install);

    let manager =
        AssetManager::with_capability(install, Capability::Unsupported { reason: "test" });
    manager.check_assets().await;

    let resolved = CircuitEmbed::new("R 1 2 1000").resolve(&settings(true), &manager);

    assert!(resolved.main_url.starts_with("https://x/c.html?ctz="));
    assert_eq!(resolved.mode, ViewMode::Frame);
}

#[tokio::test]
async fn edit_link_is_remote_and_running_in_every_mode() {
    let dir = tempfile::tempdir().unwrap();
    let install = install_dir(&dir);
    install_bundle(&install);

    let manager = AssetManager::new(install);
    assert!(manager.check_assets().await);

    let embed = CircuitEmbed::new("R 1 2 1000");
    for offline_mode in [false, true] {
        let resolved = embed.resolve(&settings(offline_mode), &manager);
        let edit_url = resolved.edit_url.expect("edit link enabled by default");
        assert_eq!(
            edit_url,
            format!("https://x/c.html?ctz={}&running=true", embed.token())
        );
    }
}

#[tokio::test]
async fn edit_link_respects_setting() {
    let dir = tempfile::tempdir().unwrap();
    let manager = AssetManager::new(install_dir(&dir));

    let mut settings = settings(false);
    settings.edit_link = false;

    let resolved = CircuitEmbed::new("R 1 2 1000").resolve(&settings, &manager);
    assert!(resolved.edit_url.is_none());
}

/// The end-to-end scenario: main and edit URL share one token, differing
/// only in the running flag.
#[tokio::test]
async fn end_to_end_urls_share_token() {
    let dir = tempfile::tempdir().unwrap();
    let manager = AssetManager::new(install_dir(&dir));

    let embed = CircuitEmbed::new("R 1 2 1000");
    let resolved = embed.resolve(&settings(false), &manager);

    let token = token::encode("R 1 2 1000");
    assert_eq!(resolved.main_url, format!("https://x/c.html?ctz={token}&running=false"));
    assert_eq!(
        resolved.edit_url.as_deref(),
        Some(format!("https://x/c.html?ctz={token}&running=true").as_str())
    );
    assert_eq!(token::decode(&token).as_deref(), Some("R 1 2 1000"));
}

#[tokio::test]
async fn document_intercepts_only_configured_tag() {
    let dir = tempfile::tempdir().unwrap();
    let manager = AssetManager::new(install_dir(&dir));

    let markdown = "# Notes\n\n\
                    ```circuitjs\nR 1 2 1000\n```\n\n\
                    ```rust\nfn main() {}\n```\n";

    let html = render_document(markdown, &settings(false), &manager);

    assert!(html.contains("<h1>Notes</h1>"));
    assert!(html.contains("circuitjs-container"));
    assert!(html.contains("<iframe"));
    // the rust block stays an ordinary code block
    assert!(html.contains("fn main()"));
    assert_eq!(html.matches("circuitjs-container").count(), 1);
}

#[tokio::test]
async fn document_blocks_are_encoded_independently() {
    let dir = tempfile::tempdir().unwrap();
    let manager = AssetManager::new(install_dir(&dir));

    let settings = Settings {
        edit_link: false,
        ..settings(false)
    };
    let markdown = "```circuitjs\nR 1 2 1000\n```\n\n```circuitjs\nR 1 2 1000\n```\n";
    let html = render_document(markdown, &settings, &manager);

    assert_eq!(html.matches("<iframe").count(), 2);
    // same text, same token, twice
    let token = token::encode("R 1 2 1000\n");
    assert_eq!(html.matches(&format!("ctz={token}")).count(), 2);
}

#[tokio::test]
async fn document_offline_fallback_has_notice_and_frame() {
    let dir = tempfile::tempdir().unwrap();
    let manager = AssetManager::new(install_dir(&dir));
    manager.check_assets().await;

    let markdown = "```circuitjs\nR 1 2 1000\n```\n";
    let html = render_document(markdown, &settings(true), &manager);

    assert!(html.contains("circuitjs-notice"));
    assert!(html.contains("<iframe src=\"https://x/c.html?ctz="));
}

#[tokio::test]
async fn custom_tag_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let manager = AssetManager::new(install_dir(&dir));

    let mut settings = settings(false);
    settings.circuit_tag = "ckt".to_string();

    let markdown = "```circuitjs\nR 1 2 1000\n```\n\n```ckt\nR 1 2 1000\n```\n";
    let html = render_document(markdown, &settings, &manager);

    assert_eq!(html.matches("circuitjs-container").count(), 1);
    // the now-unconfigured default tag renders as a plain code block
    assert!(html.contains("<code class=\"language-circuitjs\">"));
}
