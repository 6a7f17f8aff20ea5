use anyhow::Result;
use clap::Parser;
use log::info;

use crate::utils::styles::{fmt_bold, fmt_cyan, fmt_dimmed};
use circuitnote_config::Config;

#[derive(Debug, Clone, Parser)]
pub struct ConfigCmd;

impl ConfigCmd {
    pub(crate) fn handle(&self, cfg: &Config) -> Result<()> {
        let s = &cfg.settings;
        let fields = [
            format!("{}: {}", fmt_bold("editable"), s.editable),
            format!("{}: {}", fmt_bold("editLink"), s.edit_link),
            format!("{}: {}", fmt_bold("circuitJsUrl"), s.circuit_js_url),
            format!("{}: {}", fmt_bold("circuitTag"), s.circuit_tag),
            format!("{}: {}", fmt_bold("offlineMode"), s.offline_mode),
        ];

        let tree = fields
            .iter()
            .enumerate()
            .map(|(i, f)| {
                if i < fields.len() - 1 {
                    format!("├── {f}")
                } else {
                    format!("└── {f}")
                }
            })
            .collect::<Vec<String>>()
            .join("\n");

        info!(
            "{} {}\n{tree}",
            fmt_cyan("circuitnote"),
            fmt_dimmed(cfg.path().as_str())
        );

        Ok(())
    }
}
