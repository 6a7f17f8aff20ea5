use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, error};
use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use crate::error::{AssetError, AssetResult};
use crate::platform::Capability;
use crate::release::{ASSET_FILENAME, ReleaseClient};

/// HTML entry point expected inside the install directory.
pub const ENTRY_POINT: &str = "circuitjs.html";

/// Compiled simulator resources directory expected alongside it.
pub const APP_DIR: &str = "circuitjs1";

/// Default install root, `~/.circuitnote/circuitjs`. `CIRCUITNOTE_HOME`
/// overrides the parent directory.
pub fn default_install_dir() -> Option<Utf8PathBuf> {
    if let Ok(home) = std::env::var("CIRCUITNOTE_HOME") {
        return Some(Utf8PathBuf::from(home).join("circuitjs"));
    }

    let home = Utf8PathBuf::from_path_buf(dirs::home_dir()?).ok()?;
    Some(home.join(".circuitnote").join("circuitjs"))
}

/// Manages the locally installed simulator bundle: presence checks,
/// download/extract, and removal.
///
/// The install directory and platform capability are injected at
/// construction; the manager holds no other configuration.
pub struct AssetManager {
    install_dir: Utf8PathBuf,
    capability: Capability,
    ready: AtomicBool,
    /// Serializes download/remove so the install directory sees at most one
    /// mutating operation at a time.
    op_lock: Mutex<()>,
}

impl AssetManager {
    pub fn new(install_dir: impl Into<Utf8PathBuf>) -> Self {
        Self::with_capability(install_dir, Capability::detect())
    }

    pub fn with_capability(install_dir: impl Into<Utf8PathBuf>, capability: Capability) -> Self {
        Self {
            install_dir: install_dir.into(),
            capability,
            ready: AtomicBool::new(false),
            op_lock: Mutex::new(()),
        }
    }

    pub fn install_dir(&self) -> &Utf8Path {
        &self.install_dir
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Path to the installed HTML entry point.
    pub fn entry_point(&self) -> Utf8PathBuf {
        self.install_dir.join(ENTRY_POINT)
    }

    /// Probes the filesystem for both expected entries and refreshes the
    /// cached readiness. Unsupported platforms and filesystem errors both
    /// degrade to "not ready"; errors are logged, never propagated.
    pub async fn check_assets(&self) -> bool {
        if !self.capability.is_supported() {
            self.ready.store(false, Ordering::Relaxed);
            return false;
        }

        let html_exists = exists(&self.install_dir.join(ENTRY_POINT)).await;
        let app_exists = exists(&self.install_dir.join(APP_DIR)).await;

        let ready = html_exists && app_exists;
        self.ready.store(ready, Ordering::Relaxed);
        ready
    }

    /// Last readiness computed by [`check_assets`](Self::check_assets).
    /// Never touches the filesystem, so the value can lag reality until the
    /// next check.
    pub fn assets_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }

    /// Downloads and installs the latest published bundle, reporting
    /// human-readable progress through `progress`. Steps run strictly in
    /// order: release metadata, asset lookup, download, extract, re-check.
    ///
    /// Returns the post-install readiness. A failed extraction may leave a
    /// partially populated directory behind; the next download overwrites it.
    ///
    /// # Errors
    ///
    /// Fails on unsupported platforms, remote errors (transport, HTTP
    /// status, missing artifact), or filesystem/archive errors.
    pub async fn download_assets(&self, progress: impl FnMut(&str)) -> AssetResult<bool> {
        let client = ReleaseClient::new()?;
        self.download_assets_from(&client, progress).await
    }

    /// Like [`download_assets`], against a caller-supplied client.
    ///
    /// # Errors
    ///
    /// See [`download_assets`].
    ///
    /// [`download_assets`]: Self::download_assets
    pub async fn download_assets_from(
        &self,
        client: &ReleaseClient,
        mut progress: impl FnMut(&str),
    ) -> AssetResult<bool> {
        if let Capability::Unsupported { reason } = self.capability {
            return Err(AssetError::Unsupported { reason });
        }

        let _guard = self.op_lock.lock().await;
        let mut progress = |msg: &str| {
            debug!("{msg}");
            progress(msg);
        };

        progress("Fetching latest release info...");
        let release = client.latest_release().await?;
        debug!("Latest release: {}", release.tag_name);

        let asset = release
            .find_asset(ASSET_FILENAME)
            .ok_or(AssetError::AssetMissing {
                filename: ASSET_FILENAME,
            })?;

        progress(&format!("Downloading {ASSET_FILENAME}..."));
        let archive = client.download(asset).await?;

        progress("Extracting assets...");
        self.extract(archive).await?;

        progress("Assets installed");
        Ok(self.check_assets().await)
    }

    /// Unpacks the archive into the install directory, creating it if
    /// absent and overwriting existing entries.
    async fn extract(&self, archive: Vec<u8>) -> AssetResult<()> {
        tokio::fs::create_dir_all(&self.install_dir).await?;

        let dest = self.install_dir.clone();
        tokio::task::spawn_blocking(move || -> AssetResult<()> {
            let mut zip = zip::ZipArchive::new(Cursor::new(archive))?;
            zip.extract(dest.as_std_path())?;
            Ok(())
        })
        .await
        .map_err(|e| AssetError::Io(std::io::Error::other(e)))?
    }

    /// Recursively deletes the install directory and resets the cached
    /// readiness. Removing an already-absent directory is a success.
    ///
    /// # Errors
    ///
    /// Fails on unsupported platforms or filesystem errors other than the
    /// directory not existing.
    pub async fn remove_assets(&self) -> AssetResult<()> {
        if let Capability::Unsupported { reason } = self.capability {
            return Err(AssetError::Unsupported { reason });
        }

        let _guard = self.op_lock.lock().await;

        match tokio::fs::remove_dir_all(&self.install_dir).await {
            Ok(()) => debug!("Removed {}", self.install_dir),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(AssetError::Io(e)),
        }

        self.ready.store(false, Ordering::Relaxed);
        Ok(())
    }
}

async fn exists(path: &Utf8Path) -> bool {
    match tokio::fs::try_exists(path).await {
        Ok(found) => found,
        Err(e) => {
            error!("Failed to probe {path}: {e}");
            false
        }
    }
}
