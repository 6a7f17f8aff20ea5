use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use log::info;

use crate::utils::styles::{fmt_dimmed, fmt_success};
use circuitnote_assets::{AssetManager, default_install_dir};
use circuitnote_config::Config;
use circuitnote_embed::{render_document, render_page};

#[derive(Debug, Clone, Parser)]
pub struct RenderCmd {
    /// Markdown note to render
    pub input: Utf8PathBuf,

    /// Write the HTML here instead of stdout
    #[arg(long, short)]
    pub output: Option<Utf8PathBuf>,

    /// Emit only the HTML fragment, without the standalone page wrapper
    #[arg(long)]
    pub fragment: bool,
}

impl RenderCmd {
    pub(crate) async fn handle(&self, cfg: &Config) -> Result<()> {
        let markdown = tokio::fs::read_to_string(&self.input)
            .await
            .with_context(|| format!("Failed to read {}", self.input))?;

        let install_dir = default_install_dir().context("Failed to determine home directory")?;
        let assets = AssetManager::new(install_dir);
        // one readiness probe up front so every embed in the document sees
        // the same state
        assets.check_assets().await;

        let fragment = render_document(&markdown, &cfg.settings, &assets);
        let html = if self.fragment {
            fragment
        } else {
            render_page(self.input.file_stem().unwrap_or("circuit"), &fragment)
        };

        match &self.output {
            Some(path) => {
                tokio::fs::write(path, html)
                    .await
                    .with_context(|| format!("Failed to write {path}"))?;
                info!(
                    "{}",
                    fmt_success(&format!(
                        "Rendered {input} to {output}",
                        input = fmt_dimmed(self.input.as_str()),
                        output = fmt_dimmed(path.as_str()),
                    ))
                );
            }
            None => println!("{html}"),
        }

        Ok(())
    }
}
