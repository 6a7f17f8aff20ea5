use anyhow::{Context, Result};
use clap::Subcommand;
use log::{error, info};

use crate::utils::spinner::Spinner;
use crate::utils::styles::{fmt_bold, fmt_dimmed, fmt_error, fmt_success, fmt_yellow};
use circuitnote_assets::{AssetManager, Capability, default_install_dir};

/// Offline bundle management. These are fire-and-forget from the user's
/// point of view: outcomes are reported as notices, not process failures.
#[derive(Debug, Clone, Subcommand)]
pub enum AssetsCmd {
    /// Show whether the offline simulator bundle is installed
    Status,

    /// Download and install the latest offline simulator bundle
    #[command(
        long_about = "Download the latest published simulator bundle and install it, replacing \
any previous install. Also works as a reinstall."
    )]
    Download,

    /// Remove the installed offline bundle
    Remove,
}

impl AssetsCmd {
    pub(crate) async fn handle(&self) -> Result<()> {
        let install_dir = default_install_dir().context("Failed to determine home directory")?;
        let manager = AssetManager::new(install_dir);

        match self {
            Self::Status => status(&manager).await,
            Self::Download => download(&manager).await,
            Self::Remove => remove(&manager).await,
        }

        Ok(())
    }
}

async fn status(manager: &AssetManager) {
    info!(
        "{}: {}",
        fmt_bold("Install dir"),
        fmt_dimmed(manager.install_dir().as_str())
    );

    if let Capability::Unsupported { reason } = manager.capability() {
        info!("{}", fmt_yellow(&format!("Offline assets unsupported: {reason}")));
        return;
    }

    if manager.check_assets().await {
        info!("{}", fmt_success("Simulator bundle is installed and ready"));
    } else {
        info!("{}", fmt_error("Simulator bundle is not installed"));
        info!(
            "Run {} to install it",
            fmt_bold("circuitnote assets download")
        );
    }
}

async fn download(manager: &AssetManager) {
    let mut sp = Spinner::new("Downloading offline assets...");

    let result = manager
        .download_assets(|msg| sp.update_text(msg.to_owned()))
        .await;

    match result {
        Ok(true) => sp.stop_success("Offline assets installed and ready"),
        Ok(false) => {
            sp.stop_error("Download finished but the bundle failed verification");
        }
        Err(e) => {
            sp.stop_error(format!("Error: {e}"));
            error!("Failed downloading offline assets: {e}");
        }
    }
}

async fn remove(manager: &AssetManager) {
    match manager.remove_assets().await {
        Ok(()) => info!(
            "{}",
            fmt_success(&format!(
                "Removed offline assets from {}",
                fmt_dimmed(manager.install_dir().as_str())
            ))
        ),
        Err(e) => error!(
            "{}",
            fmt_error(&format!("Failed removing offline assets: {e}"))
        ),
    }
}
