use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use log::info;

use crate::utils::styles::{fmt_dimmed, fmt_success};
use circuitnote_config::Config;
use circuitnote_embed::CircuitEmbed;

#[derive(Debug, Clone, Parser)]
pub struct EditCmd {
    /// File containing the circuit description text
    pub circuit: Utf8PathBuf,
}

impl EditCmd {
    pub(crate) fn handle(&self, cfg: &Config) -> Result<()> {
        let source = std::fs::read_to_string(&self.circuit)
            .with_context(|| format!("Failed to read {}", self.circuit))?;

        // editing is a full-browser affordance: always the remote URL,
        // always interactive
        let embed = CircuitEmbed::new(source);
        let url = embed.remote_url(&cfg.settings, true);

        open::that(&url).with_context(|| format!("Failed to open {url}"))?;

        info!(
            "{}",
            fmt_success(&format!(
                "Opened {circuit} in {url}",
                circuit = fmt_dimmed(self.circuit.as_str()),
                url = fmt_dimmed(cfg.settings.circuit_js_url.as_str()),
            ))
        );

        Ok(())
    }
}
